//! Affine remapping of points between two axis aligned rectangles.
//!
//! Each axis is mapped independently so that the lower left corner of the source
//! lands on the lower left corner of the target and the upper right corner on the
//! upper right corner:
//! ```text
//! x' = (nur.x - nll.x) * (p.x - oll.x) / (our.x - oll.x) + nll.x
//! y' = (nll.y - nur.y) * (p.y - our.y) / (oll.y - our.y) + nur.y
//! ```
//! The y axis is anchored on the upper right corner and measured downwards,
//! the x axis is anchored on the lower left corner and measured rightwards.
//! Which direction "up" ends up on screen is decided by the corners the caller
//! passes for the target, e.g. `Rect::new((0, height), (width, 0))` for a canvas
//! whose y axis points down.

use core::fmt::Debug;

use log::warn;
use num_traits::Float;

use crate::error::CurveError;
use crate::point2::Point2;
use crate::NativeFloat;

/// An axis aligned rectangle given by its lower left and upper right corner
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect<T> {
    lower_left: Point2<T>,
    upper_right: Point2<T>,
}

impl<T> Rect<T>
where
    T: Float,
{
    pub fn new(lower_left: Point2<T>, upper_right: Point2<T>) -> Self {
        Rect {
            lower_left,
            upper_right,
        }
    }

    /// The unit square [(0,0), (1,1)]
    pub fn unit() -> Self {
        Rect::new(Point2::origin(), Point2::new(T::one(), T::one()))
    }

    /// A rectangle spanning from the origin to (width, height)
    pub fn from_size(width: T, height: T) -> Self {
        Rect::new(Point2::origin(), Point2::new(width, height))
    }

    pub fn lower_left(&self) -> Point2<T> {
        self.lower_left
    }

    pub fn upper_right(&self) -> Point2<T> {
        self.upper_right
    }

    /// Signed extent along x (upper right minus lower left)
    pub fn width(&self) -> T {
        self.upper_right.x - self.lower_left.x
    }

    /// Signed extent along y (upper right minus lower left)
    pub fn height(&self) -> T {
        self.upper_right.y - self.lower_left.y
    }

    /// Grows the rectangle by `margin` on every side
    pub fn expand(&self, margin: T) -> Self {
        Rect::new(
            self.lower_left - Point2::new(margin, margin),
            self.upper_right + Point2::new(margin, margin),
        )
    }

    /// True if a mapping out of this rectangle would divide by zero (or by a non-finite extent)
    pub fn is_degenerate(&self) -> bool {
        let extent = Point2::new(self.width(), self.height());
        !extent.is_finite() || extent.x() == T::zero() || extent.y() == T::zero()
    }

    fn degenerate_error(&self) -> CurveError {
        CurveError::DegenerateMapping {
            width: self.width().to_f64().unwrap_or(NativeFloat::NAN),
            height: self.height().to_f64().unwrap_or(NativeFloat::NAN),
        }
    }
}

/// The affine transform between two rectangles as a value.
/// Construction validates the source rectangle, so `apply()` cannot fail.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapper<T> {
    source: Rect<T>,
    target: Rect<T>,
}

impl<T> CoordinateMapper<T>
where
    T: Float + Debug,
{
    /// Creates the mapping from `source` to `target`.
    /// Returns `CurveError::DegenerateMapping` if the source has zero width or height.
    pub fn new(source: Rect<T>, target: Rect<T>) -> Result<Self, CurveError> {
        if source.is_degenerate() {
            warn!("rejecting mapping out of degenerate rectangle {:?}", source);
            return Err(source.degenerate_error());
        }
        Ok(CoordinateMapper { source, target })
    }

    pub fn source(&self) -> Rect<T> {
        self.source
    }

    pub fn target(&self) -> Rect<T> {
        self.target
    }

    /// Maps a single point from the source into the target rectangle
    pub fn apply(&self, p: Point2<T>) -> Point2<T> {
        let oll = self.source.lower_left;
        let our = self.source.upper_right;
        let nll = self.target.lower_left;
        let nur = self.target.upper_right;

        let x = (nur.x - nll.x) * (p.x - oll.x) / (our.x - oll.x) + nll.x;
        let y = (nll.y - nur.y) * (p.y - our.y) / (oll.y - our.y) + nur.y;
        Point2::new(x, y)
    }

    /// Maps every point of `points`, keeping their order
    pub fn apply_all<I>(&self, points: I) -> Vec<Point2<T>>
    where
        I: IntoIterator<Item = Point2<T>>,
    {
        points.into_iter().map(|p| self.apply(p)).collect()
    }

    /// The mapping from target back to source.
    /// Fails if the target rectangle is degenerate.
    pub fn inverse(&self) -> Result<Self, CurveError> {
        CoordinateMapper::new(self.target, self.source)
    }
}

/// Maps `p` from the rectangle (oll, our) into the rectangle (nll, nur).
/// Returns `CurveError::DegenerateMapping` if the source rectangle has zero width or height.
pub fn map_point<T>(
    p: Point2<T>,
    oll: Point2<T>,
    our: Point2<T>,
    nll: Point2<T>,
    nur: Point2<T>,
) -> Result<Point2<T>, CurveError>
where
    T: Float + Debug,
{
    let mapper = CoordinateMapper::new(Rect::new(oll, our), Rect::new(nll, nur))?;
    Ok(mapper.apply(p))
}
