//! Conversion from floating point values to integer pairs using the convergents
//! of the simple continued fraction expansion `a0 + 1/(a1 + 1/(a2 + ...))`.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>

use crate::error::ArithmeticError;
use crate::traits::{Approximation, FractionBase};
use std::mem::swap;
use tracing::{debug, trace};

/// Default tolerance between the float and its rational approximation
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default bound on the number of convergents evaluated
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Parameters of the convergent search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergentConfig {
    /// The search stops at the first convergent `n/d` with `|n/d - x| <= epsilon`
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl ConvergentConfig {
    pub const fn new(epsilon: f64, max_iterations: usize) -> Self {
        ConvergentConfig {
            epsilon,
            max_iterations,
        }
    }
}

impl Default for ConvergentConfig {
    fn default() -> Self {
        ConvergentConfig::new(DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS)
    }
}

/// Denominators of the last two convergents
#[derive(Debug, Clone, Copy)]
struct Denominators<T> {
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T: FractionBase> Denominators<T> {
    fn new() -> Self {
        Denominators {
            qm1: T::one(),
            qm2: T::zero(),
        }
    }

    /// Push a coefficient and return the new denominator, or None on overflow
    fn checked_push(&mut self, a: T) -> Option<T> {
        // q_k = a_k * q_(k-1) + q_(k-2)
        let q = a.checked_mul(&self.qm1)?.checked_add(&self.qm2)?;
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.qm1 = q.clone();
        Some(q)
    }
}

/// Find a `(numerator, denominator)` pair approximating `x`.
///
/// Integral values are returned directly with denominator one. Otherwise the convergents are
/// evaluated until one is within `config.epsilon` of `x`, the iteration bound is reached, or the
/// next convergent no longer fits into `T`. If not even the first convergent fits, the nearest
/// integer is returned instead. The result is [Approximation::Exact] only when the pair reproduces
/// `x` exactly in floating point. The denominator is always positive.
pub fn approximate<T: FractionBase>(
    x: f64,
    config: &ConvergentConfig,
) -> Result<Approximation<(T, T)>, ArithmeticError> {
    if !x.is_finite() {
        return Err(ArithmeticError::InvalidArgument("float value is not finite"));
    }
    if x.fract() == 0.0 {
        let n = T::from_f64(x.round()).ok_or(ArithmeticError::Overflow)?;
        return Ok(Approximation::Exact((n, T::one())));
    }
    if config.max_iterations == 0 {
        return Err(ArithmeticError::InvalidArgument("max_iterations is zero"));
    }

    let mut denoms = Denominators::<T>::new();
    // x ~ round(x)/1, used when no convergent fits into T
    let mut last = T::from_f64(x.round()).map(|n| (n, T::one()));
    let mut z = x;
    for step in 0..config.max_iterations {
        let rem = z - z.floor();
        if rem == 0.0 {
            break;
        }
        z = 1.0 / rem;

        let a = match T::from_f64(z.floor()) {
            Some(a) => a,
            None => break,
        };
        let q = match denoms.checked_push(a) {
            Some(q) => q,
            None => break,
        };
        let qf = match q.to_f64() {
            Some(qf) => qf,
            None => break,
        };
        let nf = (x * qf).round();
        let n = match T::from_f64(nf) {
            Some(n) => n,
            None => break,
        };

        let err = (nf / qf - x).abs();
        trace!(step, numer = nf, denom = qf, err, "convergent");
        if err <= config.epsilon {
            return Ok(if err == 0.0 {
                Approximation::Exact((n, q))
            } else {
                Approximation::Approximated((n, q))
            });
        }
        last = Some((n, q));
    }

    debug!(value = x, "convergent search stopped before reaching the tolerance");
    last.map(Approximation::Approximated)
        .ok_or(ArithmeticError::Overflow)
}
