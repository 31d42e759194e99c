//! Error type for curve construction, sampling and coordinate mapping.
//!
//! Every variant is a precondition violation detected before any computation
//! starts, so callers can recover by supplying valid input.

use thiserror::Error;

use crate::NativeFloat;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs at least one control point
    #[error("cannot build a curve from an empty set of control points")]
    EmptyControlSet,

    /// Sampling needs at least one step, and steps + 1 samples must be countable
    #[error("sample count must be positive and below usize::MAX, got {steps}")]
    InvalidSampleCount { steps: usize },

    /// The source rectangle of a mapping has zero (or non-finite) extent
    #[error("degenerate source rectangle for mapping (width {width}, height {height})")]
    DegenerateMapping {
        width: NativeFloat,
        height: NativeFloat,
    },

    /// The exact binomial coefficient does not fit into a u64
    #[error("binomial coefficient C({i}, {n}) overflows u64")]
    BinomialOverflow { i: usize, n: usize },
}
