//! # Frontier
//!
//! $$
//! \mathcal{F} = \{(\sigma_p(w), \mu_p(w)) : w \in [0,1]\}
//! $$
//!
//! Two-asset risk/return sweep, tangency search and capital allocation.

pub mod cal;
pub mod engine;
pub mod grid;
pub mod metrics;
pub mod sharpe;
pub mod types;

pub use cal::CapitalAllocationLine;
pub use engine::FrontierAnalysis;
pub use engine::FrontierEngine;
pub use engine::FrontierEngineConfig;
pub use grid::generate_weight_grid;
pub use metrics::portfolio_returns;
pub use metrics::portfolio_volatility;
pub use sharpe::max_sharpe;
pub use sharpe::min_volatility;
pub use types::AssetParams;
pub use types::FrontierPoint;
pub use types::SharpeResult;
