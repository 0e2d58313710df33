//! # Tangency Search
//!
//! $$
//! w^\* = \arg\max_{w \in \text{grid}} \frac{\mu_p(w) - r_f}{\sigma_p(w)}
//! $$
//!
//! Exhaustive linear scans over the materialized weight grid. Grid search
//! trades precision for simplicity; the search space is one-dimensional and
//! the grid already exists for charting, so a closed-form solve buys nothing.

use tracing::debug;

use super::metrics::portfolio_returns;
use super::metrics::portfolio_volatility;
use super::types::AssetParams;
use super::types::FrontierPoint;
use super::types::SharpeResult;
use crate::error::FrontierError;

const MIN_VOLATILITY: f64 = 1e-15;

/// Find the grid point with the maximum Sharpe ratio
/// `(expected_return - risk_free) / volatility`.
///
/// Single pass over the grid reusing [`portfolio_returns`] and
/// [`portfolio_volatility`]. The running best is replaced on strict
/// improvement only, so ties resolve to the earliest grid index (smallest
/// `w_a`). Points with zero volatility have an undefined Sharpe ratio and
/// are skipped; the call fails with [`FrontierError::InvalidInput`] when no
/// point survives, and with [`FrontierError::InvalidArgument`] on an empty
/// grid.
pub fn max_sharpe(
  risk_free: f64,
  grid: &[(f64, f64)],
  asset_a: &AssetParams,
  asset_b: &AssetParams,
  rho: f64,
) -> Result<SharpeResult, FrontierError> {
  if grid.is_empty() {
    return Err(FrontierError::InvalidArgument(
      "weight grid is empty".to_string(),
    ));
  }

  let returns = portfolio_returns(grid, asset_a.expected_return, asset_b.expected_return);
  let volatilities = portfolio_volatility(grid, asset_a.std_dev, asset_b.std_dev, rho)?;

  let mut best: Option<SharpeResult> = None;
  for (i, (&(w_a, w_b), (&ret, &vol))) in grid
    .iter()
    .zip(returns.iter().zip(volatilities.iter()))
    .enumerate()
  {
    if vol < MIN_VOLATILITY {
      debug!(index = i, weight_a = w_a, "skipping zero-volatility grid point");
      continue;
    }

    let sharpe = (ret - risk_free) / vol;
    if best.as_ref().map_or(true, |b| sharpe > b.sharpe) {
      best = Some(SharpeResult {
        index: i,
        weight_a: w_a,
        weight_b: w_b,
        expected_return: ret,
        volatility: vol,
        sharpe,
      });
    }
  }

  match best {
    Some(result) => {
      debug!(
        index = result.index,
        weight_a = result.weight_a,
        sharpe = result.sharpe,
        "tangency point selected"
      );
      Ok(result)
    }
    None => Err(FrontierError::InvalidInput(
      "every grid point has zero volatility; Sharpe ratio is undefined".to_string(),
    )),
  }
}

/// Find the grid point with the lowest volatility.
///
/// Same scan shape as [`max_sharpe`]: strict-improvement minimum,
/// first-occurrence tie-break, [`FrontierError::InvalidArgument`] on an
/// empty grid.
pub fn min_volatility(
  grid: &[(f64, f64)],
  asset_a: &AssetParams,
  asset_b: &AssetParams,
  rho: f64,
) -> Result<FrontierPoint, FrontierError> {
  if grid.is_empty() {
    return Err(FrontierError::InvalidArgument(
      "weight grid is empty".to_string(),
    ));
  }

  let returns = portfolio_returns(grid, asset_a.expected_return, asset_b.expected_return);
  let volatilities = portfolio_volatility(grid, asset_a.std_dev, asset_b.std_dev, rho)?;

  let mut best = FrontierPoint {
    weight_a: grid[0].0,
    weight_b: grid[0].1,
    expected_return: returns[0],
    volatility: volatilities[0],
  };
  for i in 1..grid.len() {
    if volatilities[i] < best.volatility {
      best = FrontierPoint {
        weight_a: grid[i].0,
        weight_b: grid[i].1,
        expected_return: returns[i],
        volatility: volatilities[i],
      };
    }
  }

  Ok(best)
}
