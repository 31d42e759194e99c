//! Binomial coefficients and the Bernstein polynomial basis.
//!
//! The Bernstein polynomial of degree n is
//! ```text
//! b(i, n, t) = C(i, n) * t^i * (1 - t)^(n - i)
//! ```
//! Coefficients are computed with the multiplicative recurrence
//! C(k + 1, n) = C(k, n) * (n - k) / (k + 1), so there is no factorial table
//! and no fixed maximum degree. The exact integer form reports an overflow
//! instead of wrapping.
//!
//! From degree 1030 on the middle coefficients exceed `f64::MAX`. Weights with
//! an infinite coefficient are evaluated in log space,
//! exp(ln C(i, n) + i ln t + (n - i) ln(1 - t)), which stays finite for t in [0, 1].

use num_traits::{Float, NumCast};
use tinyvec::TinyVec;

use crate::error::CurveError;

/// Converts a count into the scalar type, saturating to infinity if it is not representable
#[inline]
pub(crate) fn cast<T: Float>(n: usize) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::infinity)
}

/// Returns the number of ways to choose `i` out of `n` as an exact integer.
/// C(i, n) is 0 for i > n. Fails with `CurveError::BinomialOverflow` when the
/// result does not fit a u64 (first happens at n = 68).
pub fn binomial(i: usize, n: usize) -> Result<u64, CurveError> {
    if i > n {
        return Ok(0);
    }
    let overflow = CurveError::BinomialOverflow { i, n };
    // C(i, n) == C(n - i, n); the partial products only grow up to n/2
    let k = i.min(n - i);
    let mut c: u128 = 1;
    for j in 0..k {
        // exact: C(j, n) * (n - j) is always divisible by (j + 1)
        c = c
            .checked_mul((n - j) as u128)
            .ok_or_else(|| overflow.clone())?
            / (j as u128 + 1);
        if c > u64::MAX as u128 {
            return Err(overflow);
        }
    }
    u64::try_from(c).map_err(|_| overflow)
}

/// Returns C(i, n) in floating point. Uses the same recurrence as `binomial`
/// and stays exact as long as the coefficient fits the mantissa.
/// Saturates to infinity once the coefficient exceeds `T::max_value()`.
pub fn binomial_float<T: Float>(i: usize, n: usize) -> T {
    if i > n {
        return T::zero();
    }
    let k = i.min(n - i);
    let mut c = T::one();
    for j in 0..k {
        c = pascal_step(c, cast(n - j), cast(j + 1));
    }
    c
}

/// C(k + 1, n) from C(k, n). Multiplies first so integer rows stay exact and
/// divides first only where the product alone would overflow.
#[inline]
fn pascal_step<T: Float>(c: T, num: T, den: T) -> T {
    let product = c * num;
    if product.is_finite() {
        product / den
    } else {
        c / den * num
    }
}

/// Natural logarithm of C(i, n), finite for every i <= n
fn ln_binomial<T: Float>(i: usize, n: usize) -> T {
    let k = i.min(n - i);
    (0..k).fold(T::zero(), |acc, j| {
        acc + cast::<T>(n - j).ln() - cast::<T>(j + 1).ln()
    })
}

/// Evaluates the Bernstein polynomial b(i, n, t) = C(i, n) * t^i * (1 - t)^(n - i).
/// Integer powers are used so 0^0 = 1 at the endpoints t = 0 and t = 1.
/// Returns 0 for i > n.
pub fn bernstein<T: Float>(i: usize, n: usize, t: T) -> T {
    if i > n {
        return T::zero();
    }
    let c = binomial_float::<T>(i, n);
    if c.is_finite() {
        c * power(t, i) * power(T::one() - t, n - i)
    } else {
        log_weight(ln_binomial(i, n), i, n, t)
    }
}

#[inline]
fn power<T: Float>(base: T, exp: usize) -> T {
    match i32::try_from(exp) {
        Ok(exp) => base.powi(exp),
        Err(_) => base.powf(cast(exp)),
    }
}

/// exp(ln_c + i ln t + (n - i) ln(1 - t)).
/// A zero exponent contributes nothing, so ln 0 never meets a zero factor.
fn log_weight<T: Float>(ln_c: T, i: usize, n: usize, t: T) -> T {
    let ln_power = |base: T, exp: usize| {
        if exp == 0 {
            T::zero()
        } else {
            cast::<T>(exp) * base.ln()
        }
    };
    (ln_c + ln_power(t, i) + ln_power(T::one() - t, n - i)).exp()
}

/// One row of Pascal's triangle for a fixed degree, so a curve sampled many
/// times computes its coefficients only once.
/// The row is stored inline up to cubic curves and on the heap above that.
#[derive(Clone, Debug, PartialEq)]
pub struct BernsteinBasis<T>
where
    T: Float + Default,
{
    coefficients: TinyVec<[T; 4]>,
    /// ln C(i, degree), used where the coefficient itself is infinite
    ln_coefficients: TinyVec<[T; 4]>,
}

impl<T> BernsteinBasis<T>
where
    T: Float + Default,
{
    /// Builds the basis for polynomials of `degree`, i.e. degree + 1 weights
    pub fn new(degree: usize) -> Self {
        let mut coefficients: TinyVec<[T; 4]> = TinyVec::with_capacity(degree + 1);
        let mut ln_coefficients: TinyVec<[T; 4]> = TinyVec::with_capacity(degree + 1);
        let mut c = T::one();
        let mut ln_c = T::zero();
        coefficients.push(c);
        ln_coefficients.push(ln_c);
        for k in 0..degree {
            let (num, den) = (cast::<T>(degree - k), cast::<T>(k + 1));
            c = pascal_step(c, num, den);
            ln_c = ln_c + num.ln() - den.ln();
            coefficients.push(c);
            ln_coefficients.push(ln_c);
        }
        BernsteinBasis {
            coefficients,
            ln_coefficients,
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The binomial coefficient C(i, degree), infinite if it exceeds `T::max_value()`
    pub fn coefficient(&self, i: usize) -> T {
        self.coefficients.get(i).copied().unwrap_or_else(T::zero)
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// The weight of control point `i` at parameter `t`
    pub fn weight(&self, i: usize, t: T) -> T {
        let n = self.degree();
        if i > n {
            return T::zero();
        }
        let c = self.coefficients[i];
        if c.is_finite() {
            c * power(t, i) * power(T::one() - t, n - i)
        } else {
            log_weight(self.ln_coefficients[i], i, n, t)
        }
    }

    /// All degree + 1 weights at parameter `t`, in control point order
    pub fn weights(&self, t: T) -> impl Iterator<Item = T> + '_ {
        (0..self.coefficients.len()).map(move |i| self.weight(i, t))
    }
}
