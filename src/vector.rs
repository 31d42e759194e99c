//! Vector algebra over generic points.
//!
//! These are thin named wrappers around the operator impls every [`Point`] carries,
//! for callers that prefer the functional form `add(p, q)` over `p + q`.

use super::point::Point;

/// Componentwise sum p1 + p2
#[inline]
pub fn add<P: Point>(p1: P, p2: P) -> P {
    p1 + p2
}

/// Componentwise difference p1 - p2
#[inline]
pub fn subtract<P: Point>(p1: P, p2: P) -> P {
    p1 - p2
}

/// Uniform scaling (k * p.x, k * p.y, ...)
#[inline]
pub fn scale<P: Point>(k: P::Scalar, p: P) -> P {
    p * k
}

/// Linear interpolation between p1 (t = 0) and p2 (t = 1)
#[inline]
pub fn lerp<P: Point>(p1: P, p2: P, t: P::Scalar) -> P {
    let one: P::Scalar = num_traits::one();
    p1 * (one - t) + p2 * t
}
