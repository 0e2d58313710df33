//! # Capital Allocation Line
//!
//! $$
//! \mathbb E[R_c] = r_f + S^\* \, \sigma_c
//! $$
//!
//! Risk/return combinations from mixing the tangency portfolio with the
//! risk-free asset.

use impl_new_derive::ImplNew;
use ndarray::Array1;

use super::types::SharpeResult;
use crate::error::FrontierError;

/// Line of achievable risk/return combinations when a risk-free asset is
/// mixed with the tangency portfolio.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct CapitalAllocationLine {
  /// Expected return at zero volatility, the risk-free rate.
  pub intercept: f64,
  /// Excess return per unit of volatility, the tangency Sharpe ratio.
  pub slope: f64,
}

impl CapitalAllocationLine {
  /// Derive the line through `(0, risk_free)` and the tangency portfolio.
  pub fn from_tangency(risk_free: f64, tangency: &SharpeResult) -> Self {
    Self {
      intercept: risk_free,
      slope: tangency.sharpe,
    }
  }

  /// Expected return of the mixed portfolio at the given volatility.
  pub fn expected_return_at(&self, volatility: f64) -> f64 {
    self.intercept + self.slope * volatility
  }

  /// Materialize `n_points` evenly spaced `(volatility, expected_return)`
  /// pairs from zero volatility up to `max_volatility` inclusive, for
  /// charting alongside a frontier sweep.
  ///
  /// Fails with [`FrontierError::InvalidArgument`] when `n_points < 2` or
  /// `max_volatility` is negative or non-finite.
  pub fn sample(
    &self,
    max_volatility: f64,
    n_points: usize,
  ) -> Result<Vec<(f64, f64)>, FrontierError> {
    if n_points < 2 {
      return Err(FrontierError::InvalidArgument(format!(
        "line sampling needs at least 2 points, got {n_points}"
      )));
    }
    if max_volatility < 0.0 || !max_volatility.is_finite() {
      return Err(FrontierError::InvalidArgument(format!(
        "max_volatility must be finite and non-negative, got {max_volatility}"
      )));
    }

    let sigmas = Array1::linspace(0.0, max_volatility, n_points);
    Ok(
      sigmas
        .iter()
        .map(|&sigma| (sigma, self.expected_return_at(sigma)))
        .collect(),
    )
  }
}
