//! Bézier curves of arbitrary degree, evaluated directly through the Bernstein basis,
//! sampled into polylines and projected from a unit domain onto a pixel canvas.
//!
//! The core is pure and synchronous:
//! - [`vector`] and [`Point2`]: 2D point algebra
//! - [`bernstein`]: binomial coefficients and Bernstein polynomials
//! - [`Bezier`]: evaluation and fixed-resolution sampling of a control polygon
//! - [`CoordinateMapper`]: the affine remap between two rectangles
//! - [`polyline()`]: sample and map one curve in one call
//!
//! The [`scene`] and [`render`] modules are collaborators built on top of the core:
//! random curve generation from an injected `rand::Rng` and SVG document output.
//!
//! ```rust
//! use bezplot::{Bezier, CoordinateMapper, Point2, Rect};
//!
//! let curve = Bezier::new([
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 0.0),
//! ])
//! .unwrap();
//!
//! let mapper = CoordinateMapper::new(
//!     Rect::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
//!     Rect::new(Point2::new(0.0, 0.0), Point2::new(800.0, 600.0)),
//! )
//! .unwrap();
//!
//! let pixels = bezplot::polyline(curve.control_points(), 120, &mapper).unwrap();
//! assert_eq!(pixels.len(), 121);
//! ```

pub mod bernstein;
pub mod bezier;
pub mod config;
pub mod error;
pub mod mapping;
pub mod point;
pub mod point2;
pub mod polyline;
pub mod scene;
pub mod render;
pub mod vector;

pub use bernstein::{bernstein, binomial, binomial_float, BernsteinBasis};
pub use bezier::{evaluate, sample, Bezier, Samples};
pub use config::RenderConfig;
pub use error::CurveError;
pub use mapping::{map_point, CoordinateMapper, Rect};
pub use point::{Point, PointIndex, PointNorm};
pub use point2::Point2;
pub use polyline::{polyline, polylines};

/// The float type of the crate constants, scenes and the SVG canvas
pub type NativeFloat = f64;

/// Absolute tolerance used when comparing computed points
pub const EPSILON: NativeFloat = 1e-9;

/// Number of segments a curve is flattened into when no step count is given
pub const DEFAULT_STEPS: usize = 120;
