use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic points P which themselves are generic over their Scalar.
/// Curves only need addition, subtraction and scaling, so implementing the trait
/// for another library's vector type requires mostly wrapping.
/// Component access and norms are split into PointIndex and PointNorm
/// to keep this trait as minimal as possible.
pub trait Point: Copy + PartialEq + Default + Debug
where
    Self: Add<Self, Output = Self>
        + Sub<Self, Output = Self>
        + Mul<<Self as Point>::Scalar, Output = Self>,
{
    type Scalar: Float + Default + Debug;

    /// Number of coordinate axes
    const DIM: usize;
}

/// Component access by axis index e.g. [0, 1] -> [x, y]
pub trait PointIndex: Point {
    /// Returns None for an index >= DIM
    fn axis(&self, index: usize) -> Option<Self::Scalar>;
}

/// Norms of a point interpreted as a vector
pub trait PointNorm: Point {
    /// Returns the squared L2 norm
    fn squared_norm(&self) -> Self::Scalar;

    /// Returns the L2 norm (distance from origin)
    fn norm(&self) -> Self::Scalar {
        self.squared_norm().sqrt()
    }
}
