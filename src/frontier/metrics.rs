//! # Frontier Metrics
//!
//! $$
//! \mu_p = w_A r_A + w_B r_B, \qquad
//! \sigma_p = \sqrt{w_A^2\sigma_A^2 + w_B^2\sigma_B^2 + 2 w_A w_B \sigma_A \sigma_B \rho}
//! $$
//!
//! Per-grid-point expected return and volatility sequences.

use crate::error::FrontierError;

pub(crate) fn validate_risk_inputs(
  std_a: f64,
  std_b: f64,
  rho: f64,
) -> Result<(), FrontierError> {
  if std_a < 0.0 || !std_a.is_finite() {
    return Err(FrontierError::InvalidArgument(format!(
      "standard deviation must be finite and non-negative, got std_a = {std_a}"
    )));
  }
  if std_b < 0.0 || !std_b.is_finite() {
    return Err(FrontierError::InvalidArgument(format!(
      "standard deviation must be finite and non-negative, got std_b = {std_b}"
    )));
  }
  if !(-1.0..=1.0).contains(&rho) {
    return Err(FrontierError::InvalidInput(format!(
      "correlation {rho} outside [-1, 1]"
    )));
  }

  Ok(())
}

/// Portfolio expected return per grid point, `w_a * r_a + w_b * r_b`.
///
/// Output is index-aligned with `grid`. Pure weighted averaging; every value
/// lies between `min(r_a, r_b)` and `max(r_a, r_b)` on a fully-invested grid.
pub fn portfolio_returns(grid: &[(f64, f64)], r_a: f64, r_b: f64) -> Vec<f64> {
  grid
    .iter()
    .map(|&(w_a, w_b)| w_a * r_a + w_b * r_b)
    .collect()
}

/// Portfolio volatility per grid point under correlation `rho`.
///
/// Uses the two-asset variance
/// `std_a^2 w_a^2 + std_b^2 w_b^2 + 2 w_a w_b std_a std_b rho`. The cross
/// term carries the diversification benefit or penalty with the sign of
/// `rho`. Output is index-aligned with `grid`.
///
/// Fails with [`FrontierError::InvalidArgument`] on a negative standard
/// deviation and [`FrontierError::InvalidInput`] when `rho` falls outside
/// `[-1, 1]` or a grid point's variance still computes negative; the square
/// root of a negative variance is never taken.
pub fn portfolio_volatility(
  grid: &[(f64, f64)],
  std_a: f64,
  std_b: f64,
  rho: f64,
) -> Result<Vec<f64>, FrontierError> {
  validate_risk_inputs(std_a, std_b, rho)?;

  let var_a = std_a * std_a;
  let var_b = std_b * std_b;
  let cross = std_a * std_b * rho;

  let mut out = Vec::with_capacity(grid.len());
  for &(w_a, w_b) in grid {
    let variance = var_a * w_a * w_a + var_b * w_b * w_b + 2.0 * w_a * w_b * cross;
    if variance < 0.0 {
      // rho = -1 drives the variance toward zero but never below it for
      // well-formed inputs.
      return Err(FrontierError::InvalidInput(format!(
        "negative variance {variance} at weights ({w_a}, {w_b})"
      )));
    }
    out.push(variance.sqrt());
  }

  Ok(out)
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use approx::assert_relative_eq;

  use super::*;
  use crate::frontier::grid::generate_weight_grid;

  #[test]
  fn returns_are_bounded_by_asset_returns() {
    let grid = generate_weight_grid(25).unwrap();
    let rets = portfolio_returns(&grid, 0.15, 0.07);

    assert_eq!(rets.len(), grid.len());
    for r in rets {
      assert!(r >= 0.07 - 1e-12 && r <= 0.15 + 1e-12);
    }
  }

  #[test]
  fn returns_hit_pure_assets_at_the_endpoints() {
    let grid = generate_weight_grid(11).unwrap();
    let rets = portfolio_returns(&grid, 0.15, 0.07);

    assert_abs_diff_eq!(rets[0], 0.07, epsilon = 1e-12);
    assert_abs_diff_eq!(rets[10], 0.15, epsilon = 1e-12);
  }

  #[test]
  fn volatility_matches_single_asset_at_the_endpoints() {
    let grid = generate_weight_grid(25).unwrap();
    let vols = portfolio_volatility(&grid, 0.18, 0.10, -0.3).unwrap();

    assert_abs_diff_eq!(vols[0], 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(vols[24], 0.18, epsilon = 1e-12);
  }

  #[test]
  fn volatility_matches_hand_computed_interior_point() {
    // w_a = 0.5: 0.25 * 0.0324 + 0.25 * 0.01 + 2 * 0.25 * 0.018 * -0.3
    let grid = vec![(0.5, 0.5)];
    let vols = portfolio_volatility(&grid, 0.18, 0.10, -0.3).unwrap();
    assert_relative_eq!(vols[0], 0.0079_f64.sqrt(), epsilon = 1e-12);
  }

  #[test]
  fn lower_correlation_never_raises_interior_volatility() {
    let grid = generate_weight_grid(25).unwrap();
    let rhos = [0.9, 0.5, 0.0, -0.5, -1.0];

    let mut previous: Option<Vec<f64>> = None;
    for rho in rhos {
      let vols = portfolio_volatility(&grid, 0.18, 0.10, rho).unwrap();
      if let Some(prev) = previous {
        for i in 1..grid.len() - 1 {
          assert!(vols[i] <= prev[i] + 1e-12);
        }
      }
      previous = Some(vols);
    }
  }

  #[test]
  fn perfect_negative_correlation_reaches_zero_volatility() {
    // With rho = -1 the variance is (w_a std_a - w_b std_b)^2; equal
    // volatilities put the root at the midpoint of the sweep.
    let grid = vec![(0.5, 0.5)];
    let vols = portfolio_volatility(&grid, 0.10, 0.10, -1.0).unwrap();
    assert_abs_diff_eq!(vols[0], 0.0);
  }

  #[test]
  fn out_of_range_correlation_is_rejected() {
    let grid = generate_weight_grid(25).unwrap();
    for rho in [1.5, -1.0001, f64::NAN] {
      let err = portfolio_volatility(&grid, 0.18, 0.10, rho).unwrap_err();
      assert!(matches!(err, FrontierError::InvalidInput(_)));
    }
  }

  #[test]
  fn negative_standard_deviation_is_rejected() {
    let grid = generate_weight_grid(25).unwrap();
    let err = portfolio_volatility(&grid, -0.18, 0.10, 0.0).unwrap_err();
    assert!(matches!(err, FrontierError::InvalidArgument(_)));

    let err = portfolio_volatility(&grid, 0.18, -0.10, 0.0).unwrap_err();
    assert!(matches!(err, FrontierError::InvalidArgument(_)));
  }

  #[test]
  fn volatility_is_deterministic() {
    let grid = generate_weight_grid(25).unwrap();
    let a = portfolio_volatility(&grid, 0.18, 0.10, -0.3).unwrap();
    let b = portfolio_volatility(&grid, 0.18, 0.10, -0.3).unwrap();
    assert_eq!(a, b);
  }
}
