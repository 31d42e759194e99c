use core::iter::FusedIterator;
use core::slice;

use log::trace;
use tinyvec::TinyVec;

use crate::bernstein::{bernstein, cast, BernsteinBasis};
use crate::error::CurveError;
use crate::point::Point;
use crate::vector::lerp;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by its control polygon, which is never empty.
/// Points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1]
/// using the eval() (Bernstein sum) and eval_casteljau() methods.
/// Control points are stored inline up to cubic curves.
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier<P>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: TinyVec<[P; 4]>,
    /// Binomial coefficients for the curve's degree
    basis: BernsteinBasis<P::Scalar>,
}

impl<'a, P: Point> IntoIterator for &'a Bezier<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.control_points.iter()
    }
}

impl<P> Bezier<P>
where
    P: Point,
{
    /// Create a new Bezier curve from its control points. The degree is defined as degree = control_points.len() - 1.
    /// A curve needs at least one control point, the constructor returns `CurveError::EmptyControlSet` otherwise.
    pub fn new<I>(control_points: I) -> Result<Bezier<P>, CurveError>
    where
        I: IntoIterator<Item = P>,
    {
        let control_points: TinyVec<[P; 4]> = control_points.into_iter().collect();
        if control_points.is_empty() {
            return Err(CurveError::EmptyControlSet);
        }
        let basis = BernsteinBasis::new(control_points.len() - 1);
        Ok(Bezier {
            control_points,
            basis,
        })
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn start(&self) -> P {
        self.control_points[0]
    }

    pub fn end(&self) -> P {
        self.control_points[self.control_points.len() - 1]
    }

    /// Evaluate a point on the curve at 't' which should be in the interval [0,1].
    /// Direct evaluation of sum_i b(i, n, t) * p[i] with the cached basis.
    /// At t = 0 and t = 1 every weight but one is exactly zero, so the end points are reproduced exactly.
    /// Above degree 1029 some weights are computed in log space, see `BernsteinBasis::weight()`.
    pub fn eval(&self, t: P::Scalar) -> P {
        self.basis
            .weights(t)
            .zip(self.control_points.iter())
            .fold(P::default(), |acc, (w, p)| acc + *p * w)
    }

    /// Evaluate a point on the curve at 't' using De Casteljau's algorithm
    /// over a temporary copy of the control points.
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        let mut p = self.control_points.clone();
        // loop up to degree = control_points.len() - 1
        for i in 1..p.len() {
            for j in 0..p.len() - i {
                p[j] = lerp(p[j], p[j + 1], t);
            }
        }
        p[0]
    }

    /// Evaluates the curve at `steps + 1` evenly spaced parameters t = k / steps, k = 0..=steps.
    /// The first and last sample are the curve's end points.
    pub fn sample(&self, steps: usize) -> Result<Vec<P>, CurveError> {
        Ok(self.samples(steps)?.collect())
    }

    /// Lazy version of `sample()`.
    /// `steps == usize::MAX` is rejected because the sample count would not fit a usize.
    pub fn samples(&self, steps: usize) -> Result<Samples<'_, P>, CurveError> {
        if steps == 0 || steps == usize::MAX {
            return Err(CurveError::InvalidSampleCount { steps });
        }
        trace!("sampling degree {} curve in {} steps", self.degree(), steps);
        Ok(Samples {
            curve: self,
            steps,
            next: 0,
        })
    }

    /// Returns the derivative curve (hodograph) of self which has one control point less.
    /// The derivative of an nth degree Bézier curve is an (n-1)th degree Bézier curve
    /// with control points n * (p[i+1] - p[i]).
    /// A constant curve has the constant zero curve as its derivative.
    pub fn derivative(&self) -> Bezier<P> {
        let n = self.degree();
        if n == 0 {
            return Bezier {
                control_points: core::iter::once(P::default()).collect(),
                basis: BernsteinBasis::new(0),
            };
        }
        let scale: P::Scalar = cast(n);
        let control_points: TinyVec<[P; 4]> = self
            .control_points
            .windows(2)
            .map(|w| (w[1] - w[0]) * scale)
            .collect();
        Bezier {
            control_points,
            basis: BernsteinBasis::new(n - 1),
        }
    }
}

/// Iterator over the evenly spaced samples of a curve, see `Bezier::samples()`
#[derive(Clone, Debug)]
pub struct Samples<'a, P>
where
    P: Point,
{
    curve: &'a Bezier<P>,
    steps: usize,
    next: usize,
}

impl<'a, P> Iterator for Samples<'a, P>
where
    P: Point,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.next > self.steps {
            return None;
        }
        // computed from the index instead of accumulating dt, so the last t is exactly 1
        let t = cast::<P::Scalar>(self.next) / cast::<P::Scalar>(self.steps);
        self.next += 1;
        Some(self.curve.eval(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a, P: Point> ExactSizeIterator for Samples<'a, P> {}

impl<'a, P: Point> FusedIterator for Samples<'a, P> {}

/// Evaluates the curve defined by `control_points` at `t`:
/// sum_i b(i, n, t) * control_points[i] with n = control_points.len() - 1
pub fn evaluate<P: Point>(control_points: &[P], t: P::Scalar) -> Result<P, CurveError> {
    if control_points.is_empty() {
        return Err(CurveError::EmptyControlSet);
    }
    let n = control_points.len() - 1;
    Ok(control_points
        .iter()
        .enumerate()
        .fold(P::default(), |acc, (i, p)| acc + *p * bernstein(i, n, t)))
}

/// Samples the curve defined by `control_points` at `steps + 1` evenly spaced values of t in [0,1]
pub fn sample<P: Point>(control_points: &[P], steps: usize) -> Result<Vec<P>, CurveError> {
    Bezier::new(control_points.iter().copied())?.sample(steps)
}
