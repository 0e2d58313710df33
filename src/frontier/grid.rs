//! # Weight Grid
//!
//! $$
//! w_A^{(i)} = \frac{i}{N-1}, \quad w_B^{(i)} = 1 - w_A^{(i)}
//! $$
//!
//! Fully-invested, long-only weight sweep over two assets.

use ndarray::Array1;

use crate::error::FrontierError;

/// Generate `n_points` weight pairs `(w_a, 1 - w_a)` with `w_a` linearly
/// spaced over `[0, 1]` inclusive.
///
/// Endpoints are exactly `(0, 1)` and `(1, 0)` and `w_a` is strictly
/// increasing, so downstream consumers can rely on index alignment with the
/// ascending sweep. Fails with [`FrontierError::InvalidArgument`] when
/// `n_points < 2`, where the spacing `1/(n_points - 1)` degenerates.
pub fn generate_weight_grid(n_points: usize) -> Result<Vec<(f64, f64)>, FrontierError> {
  if n_points < 2 {
    return Err(FrontierError::InvalidArgument(format!(
      "weight grid needs at least 2 points, got {n_points}"
    )));
  }

  let sweep = Array1::linspace(0.0, 1.0, n_points);
  Ok(sweep.iter().map(|&w_a| (w_a, 1.0 - w_a)).collect())
}
