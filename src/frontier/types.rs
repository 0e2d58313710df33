//! # Frontier Types
//!
//! $$
//! S = \frac{\mathbb E[R_p] - r_f}{\sigma_p}
//! $$
//!
//! Value objects shared by the frontier computations.

use impl_new_derive::ImplNew;

/// Expected return and volatility of one investable asset.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct AssetParams {
  /// Expected (annualized) return.
  pub expected_return: f64,
  /// Return standard deviation.
  pub std_dev: f64,
}

/// One achievable portfolio on the two-asset sweep.
///
/// Index-aligned with the weight grid that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierPoint {
  /// Weight of the first asset.
  pub weight_a: f64,
  /// Weight of the second asset, always `1 - weight_a`.
  pub weight_b: f64,
  /// Portfolio expected return at these weights.
  pub expected_return: f64,
  /// Portfolio volatility at these weights.
  pub volatility: f64,
}

/// Output of the tangency (maximum Sharpe ratio) search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SharpeResult {
  /// Grid index of the selected weight pair.
  pub index: usize,
  /// Weight of the first asset.
  pub weight_a: f64,
  /// Weight of the second asset.
  pub weight_b: f64,
  /// Portfolio expected return at the selected weights.
  pub expected_return: f64,
  /// Portfolio volatility at the selected weights.
  pub volatility: f64,
  /// Sharpe ratio `(expected_return - risk_free) / volatility`.
  pub sharpe: f64,
}
