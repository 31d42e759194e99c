use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::{Point, PointIndex, PointNorm};

/// An immutable pair of coordinates (x, y).
/// Points compare by value; every operation returns a new point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn origin() -> Self {
        Point2 {
            x: T::zero(),
            y: T::zero(),
        }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the euclidean distance between self and other
    pub fn distance(&self, other: Self) -> T {
        let d = *self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// True if both coordinates are within `tolerance` of the other point's
    pub fn approx_eq(&self, other: Self, tolerance: T) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// False if either coordinate is infinite or NaN
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> From<(T, T)> for Point2<T>
where
    T: Float,
{
    fn from((x, y): (T, T)) -> Self {
        Point2::new(x, y)
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // scaling multiplies each component T * T => T
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
    const DIM: usize = 2;
}

impl<T> PointIndex for Point2<T>
where
    T: Float + Default + Debug,
{
    fn axis(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }
}

impl<T> PointNorm for Point2<T>
where
    T: Float + Default + Debug,
{
    fn squared_norm(&self) -> T {
        self.x * self.x + self.y * self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn distance_pythagorean() {
        let p = Point2::new(0f64, 1f64);
        let q = Point2::new(3f64, 5f64);
        assert!((p.distance(q) - 5.0).abs() < EPSILON);
        assert!((q.distance(p) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn axis_access() {
        let p = Point2::new(1.5f64, -2.0f64);
        assert_eq!(p.axis(0), Some(1.5));
        assert_eq!(p.axis(1), Some(-2.0));
        assert_eq!(p.axis(2), None);
        assert_eq!(<Point2<f64> as Point>::DIM, 2);
    }

    #[test]
    fn tuple_conversion() {
        let p: Point2<f64> = (0.25, 0.75).into();
        assert_eq!(p, Point2::new(0.25, 0.75));
        let (x, y): (f64, f64) = p.into();
        assert_eq!((x, y), (0.25, 0.75));
    }

    #[test]
    fn finiteness() {
        assert!(Point2::new(1e300f64, -1e300f64).is_finite());
        assert!(!Point2::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Point2::new(0.0, f64::NAN).is_finite());
    }

    #[test]
    fn approx_eq_tolerance() {
        let p = Point2::new(1.0f64, 1.0f64);
        assert!(p.approx_eq(Point2::new(1.0 + 1e-12, 1.0 - 1e-12), EPSILON));
        assert!(!p.approx_eq(Point2::new(1.1, 1.0), EPSILON));
    }
}
