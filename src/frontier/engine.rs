//! # Frontier Engine
//!
//! $$
//! \text{config} \mapsto (\mathcal{F},\, w^\*,\, \text{CAL})
//! $$
//!
//! High-level orchestration API over the frontier computations. An
//! interactive surface re-invokes the engine synchronously on every
//! parameter change; each call is a pure function of the configuration.

use tracing::debug;

use super::cal::CapitalAllocationLine;
use super::grid::generate_weight_grid;
use super::metrics::portfolio_returns;
use super::metrics::portfolio_volatility;
use super::sharpe::max_sharpe;
use super::sharpe::min_volatility;
use super::types::AssetParams;
use super::types::FrontierPoint;
use super::types::SharpeResult;
use crate::error::FrontierError;

/// Runtime configuration for [`FrontierEngine`].
///
/// Carries the recognized interactive options: grid resolution, both asset
/// parameter pairs, their correlation and the risk-free rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEngineConfig {
  /// Number of weight-grid points.
  pub n_points: usize,
  /// Parameters of the first asset.
  pub asset_a: AssetParams,
  /// Parameters of the second asset.
  pub asset_b: AssetParams,
  /// Correlation between the two assets, in `[-1, 1]`.
  pub rho: f64,
  /// Risk-free rate used by the Sharpe search and the CAL.
  pub risk_free: f64,
}

impl Default for FrontierEngineConfig {
  fn default() -> Self {
    Self {
      n_points: 25,
      asset_a: AssetParams::new(0.15, 0.18),
      asset_b: AssetParams::new(0.07, 0.10),
      rho: -0.3,
      risk_free: 0.03,
    }
  }
}

/// Full analysis bundle produced by [`FrontierEngine::analyze`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierAnalysis {
  /// Risk/return point per grid index, ascending in `weight_a`.
  pub points: Vec<FrontierPoint>,
  /// Maximum Sharpe ratio portfolio.
  pub tangency: SharpeResult,
  /// Lowest-volatility portfolio on the grid.
  pub min_volatility: FrontierPoint,
  /// Capital Allocation Line through the tangency portfolio.
  pub cal: CapitalAllocationLine,
}

/// Single entry point for frontier, tangency and capital allocation runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontierEngine {
  config: FrontierEngineConfig,
}

impl FrontierEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: FrontierEngineConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &FrontierEngineConfig {
    &self.config
  }

  /// Compute the risk/return point for every weight on the configured grid.
  pub fn frontier(&self) -> Result<Vec<FrontierPoint>, FrontierError> {
    let c = &self.config;
    let grid = generate_weight_grid(c.n_points)?;
    let returns = portfolio_returns(
      &grid,
      c.asset_a.expected_return,
      c.asset_b.expected_return,
    );
    let volatilities = portfolio_volatility(&grid, c.asset_a.std_dev, c.asset_b.std_dev, c.rho)?;

    Ok(
      grid
        .iter()
        .zip(returns.iter().zip(volatilities.iter()))
        .map(|(&(w_a, w_b), (&ret, &vol))| FrontierPoint {
          weight_a: w_a,
          weight_b: w_b,
          expected_return: ret,
          volatility: vol,
        })
        .collect(),
    )
  }

  /// Find the tangency portfolio on the configured grid.
  pub fn tangency(&self) -> Result<SharpeResult, FrontierError> {
    let c = &self.config;
    let grid = generate_weight_grid(c.n_points)?;
    max_sharpe(c.risk_free, &grid, &c.asset_a, &c.asset_b, c.rho)
  }

  /// Find the lowest-volatility portfolio on the configured grid.
  pub fn min_volatility(&self) -> Result<FrontierPoint, FrontierError> {
    let c = &self.config;
    let grid = generate_weight_grid(c.n_points)?;
    min_volatility(&grid, &c.asset_a, &c.asset_b, c.rho)
  }

  /// Derive the Capital Allocation Line through the tangency portfolio.
  pub fn capital_allocation_line(&self) -> Result<CapitalAllocationLine, FrontierError> {
    let tangency = self.tangency()?;
    Ok(CapitalAllocationLine::from_tangency(
      self.config.risk_free,
      &tangency,
    ))
  }

  /// Run the full analysis: frontier sweep, tangency portfolio, minimum
  /// volatility portfolio and CAL in one bundle.
  pub fn analyze(&self) -> Result<FrontierAnalysis, FrontierError> {
    let points = self.frontier()?;
    let tangency = self.tangency()?;
    let min_vol = self.min_volatility()?;
    let cal = CapitalAllocationLine::from_tangency(self.config.risk_free, &tangency);

    debug!(
      n_points = points.len(),
      tangency_weight_a = tangency.weight_a,
      sharpe = tangency.sharpe,
      min_volatility = min_vol.volatility,
      "frontier analysis complete"
    );

    Ok(FrontierAnalysis {
      points,
      tangency,
      min_volatility: min_vol,
      cal,
    })
  }
}
