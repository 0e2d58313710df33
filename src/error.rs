//! # Errors
//!
//! $$
//! \text{inputs} \notin \text{domain} \implies \text{fail fast, never NaN}
//! $$
//!
//! Error taxonomy for the frontier computations.

use thiserror::Error;

/// Failure modes of the frontier computations.
///
/// `InvalidArgument` marks malformed caller input that is wrong on its own
/// (grid size, empty grid, negative volatility). `InvalidInput` marks inputs
/// that are individually well-formed but jointly leave the result undefined
/// (out-of-range correlation, negative variance, all-zero volatilities in a
/// Sharpe scan). Errors surface at the point of computation; no value is
/// clamped and no NaN or infinity is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FrontierError {
  /// Malformed or out-of-domain caller input.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  /// Well-formed inputs that jointly produce an undefined result.
  #[error("invalid input: {0}")]
  InvalidInput(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_includes_category_and_detail() {
    let err = FrontierError::InvalidArgument("n_points must be >= 2, got 1".to_string());
    assert_eq!(
      err.to_string(),
      "invalid argument: n_points must be >= 2, got 1"
    );

    let err = FrontierError::InvalidInput("correlation 1.5 outside [-1, 1]".to_string());
    assert_eq!(err.to_string(), "invalid input: correlation 1.5 outside [-1, 1]");
  }
}
