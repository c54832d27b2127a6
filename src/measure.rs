//! Post-processing of finalized states.
//!
//! These functions consume the flattened amplitudes of either backend's
//! final state (see `Statevector::amplitudes` / `StateTensor::amplitudes`):
//!
//! - [`probabilities`] - probability distribution over the computational basis
//! - [`sample`] - draw basis-state indices from that distribution
//! - [`expectation_value`] - observable average <psi| Op |psi>

use ndarray::Array2;
use num_complex::Complex64;
use rand::Rng;

use crate::error::{Result, SimError};

/// Tolerance on the total probability mass when sampling.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

/// Probability distribution over the computational basis: the element-wise
/// squared magnitude of the amplitudes.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
/// let p = qontra::measure::probabilities(&[s, s]);
/// assert!((p[0] - 0.5).abs() < 1e-10);
/// assert!((p[1] - 0.5).abs() < 1e-10);
/// ```
pub fn probabilities(amplitudes: &[Complex64]) -> Vec<f64> {
    amplitudes.iter().map(|c| c.norm_sqr()).collect()
}

/// Draw `num_samples` independent basis-state indices from the state's
/// probability distribution.
///
/// The cumulative distribution is built once and each draw scans it with a
/// uniform variate from the caller's generator; seed the generator for
/// reproducible samples. Fails with `InvalidDistribution` when the
/// probability mass is not 1 within [`DISTRIBUTION_TOLERANCE`] (the caller
/// must supply a normalized state).
pub fn sample(
    amplitudes: &[Complex64],
    num_samples: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>> {
    let probs = probabilities(amplitudes);
    let total: f64 = probs.iter().sum();
    if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(SimError::InvalidDistribution(total));
    }

    let mut cdf = Vec::with_capacity(probs.len());
    let mut cumulative = 0.0;
    for &p in &probs {
        cumulative += p;
        cdf.push(cumulative);
    }

    let samples = (0..num_samples)
        .map(|_| {
            let r: f64 = rng.random();
            // Falls back to the last index when rounding pushes r past the
            // final cumulative value.
            cdf.iter().position(|&c| r < c).unwrap_or(cdf.len() - 1)
        })
        .collect();

    Ok(samples)
}

/// Compute <psi| Op |psi> and return its real part.
///
/// Physical observables are Hermitian, so the imaginary part is expected to
/// vanish within tolerance and is discarded. Fails with `DimensionMismatch`
/// unless the operator is square with side equal to the number of amplitudes.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
///
/// // <0| Z |0> = 1
/// let z = Array2::from_shape_vec((2, 2), vec![
///     Complex64::new(1.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(-1.0, 0.0),
/// ]).unwrap();
/// let zero = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// assert_eq!(qontra::measure::expectation_value(&zero, &z).unwrap(), 1.0);
/// ```
pub fn expectation_value(amplitudes: &[Complex64], operator: &Array2<Complex64>) -> Result<f64> {
    let dim = amplitudes.len();
    if operator.nrows() != dim || operator.ncols() != dim {
        return Err(SimError::DimensionMismatch {
            rows: operator.nrows(),
            cols: operator.ncols(),
            dim,
        });
    }

    let mut value = Complex64::new(0.0, 0.0);
    for i in 0..dim {
        let mut row_sum = Complex64::new(0.0, 0.0);
        for j in 0..dim {
            row_sum += operator[[i, j]] * amplitudes[j];
        }
        value += amplitudes[i].conj() * row_sum;
    }

    Ok(value.re)
}
