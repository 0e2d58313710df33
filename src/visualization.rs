//! # Visualization
//!
//! $$
//! (\sigma_i, \mu_i)_{i=1}^N \mapsto \text{risk/return chart}
//! $$
//!
//! Static chart assembly for frontier sweeps and capital allocation lines.
//! The interactive layer, if any, lives outside this crate; this module only
//! turns already-computed sequences into a `plotly::Plot`.

use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;
use plotly::common::DashType;
use plotly::common::Line;
use plotly::common::Mode;
use plotly::layout::Axis;
use plotly::layout::Margin;

use crate::error::FrontierError;
use crate::frontier::cal::CapitalAllocationLine;
use crate::frontier::types::FrontierPoint;

#[derive(Debug)]
struct CurveSeries {
  label: String,
  dash: DashType,
  volatilities: Vec<f64>,
  returns: Vec<f64>,
}

#[derive(Debug)]
struct MarkerSeries {
  label: String,
  volatility: f64,
  expected_return: f64,
}

/// Builder for a volatility/return chart with frontier curves, CAL lines and
/// highlighted portfolios.
#[derive(Debug)]
pub struct FrontierPlotter {
  curves: Vec<CurveSeries>,
  markers: Vec<MarkerSeries>,
  line_width: f64,
  show_legend: bool,
  title: String,
}

impl FrontierPlotter {
  pub fn new() -> Self {
    Self {
      curves: Vec::new(),
      markers: Vec::new(),
      line_width: 2.0,
      show_legend: true,
      title: String::new(),
    }
  }

  pub fn title(mut self, title: &str) -> Self {
    self.title = title.into();
    self
  }

  pub fn line_width(mut self, w: f64) -> Self {
    self.line_width = w;
    self
  }

  pub fn show_legend(mut self, show: bool) -> Self {
    self.show_legend = show;
    self
  }

  /// Register a frontier sweep as a solid curve.
  pub fn register_frontier(mut self, points: &[FrontierPoint], label: &str) -> Self {
    self.curves.push(CurveSeries {
      label: label.into(),
      dash: DashType::Solid,
      volatilities: points.iter().map(|p| p.volatility).collect(),
      returns: points.iter().map(|p| p.expected_return).collect(),
    });
    self
  }

  /// Register a capital allocation line as a dashed curve sampled from zero
  /// volatility up to `max_volatility`.
  pub fn register_cal(
    mut self,
    cal: &CapitalAllocationLine,
    max_volatility: f64,
    label: &str,
  ) -> Result<Self, FrontierError> {
    let sampled = cal.sample(max_volatility, 64)?;
    self.curves.push(CurveSeries {
      label: label.into(),
      dash: DashType::Dash,
      volatilities: sampled.iter().map(|&(sigma, _)| sigma).collect(),
      returns: sampled.iter().map(|&(_, ret)| ret).collect(),
    });
    Ok(self)
  }

  /// Register a single highlighted portfolio, e.g. the tangency point.
  pub fn register_marker(mut self, volatility: f64, expected_return: f64, label: &str) -> Self {
    self.markers.push(MarkerSeries {
      label: label.into(),
      volatility,
      expected_return,
    });
    self
  }

  pub fn plot(self) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(
      Layout::new()
        .title(self.title.as_str())
        .auto_size(true)
        .margin(Margin::new().left(64).right(24).top(64).bottom(48))
        .x_axis(Axis::new().title("volatility"))
        .y_axis(Axis::new().title("expected return")),
    );

    for curve in &self.curves {
      let trace = Scatter::new(curve.volatilities.clone(), curve.returns.clone())
        .mode(Mode::Lines)
        .line(Line::new().width(self.line_width).dash(curve.dash.clone()))
        .name(curve.label.as_str())
        .show_legend(self.show_legend);
      plot.add_trace(trace);
    }

    for marker in &self.markers {
      let trace = Scatter::new(vec![marker.volatility], vec![marker.expected_return])
        .mode(Mode::Markers)
        .name(marker.label.as_str())
        .show_legend(self.show_legend);
      plot.add_trace(trace);
    }

    plot
  }

  pub fn show(self) {
    self.plot().show();
  }
}

impl Default for FrontierPlotter {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use anyhow::Result;

  use super::*;
  use crate::frontier::engine::FrontierEngine;

  #[test]
  fn plot_carries_one_trace_per_registered_series() -> Result<()> {
    let analysis = FrontierEngine::default().analyze()?;
    let max_vol = analysis
      .points
      .iter()
      .fold(0.0f64, |acc, p| acc.max(p.volatility));

    let plot = FrontierPlotter::new()
      .title("Two-asset frontier")
      .register_frontier(&analysis.points, "frontier")
      .register_cal(&analysis.cal, max_vol, "CAL")?
      .register_marker(
        analysis.tangency.volatility,
        analysis.tangency.expected_return,
        "tangency",
      )
      .register_marker(
        analysis.min_volatility.volatility,
        analysis.min_volatility.expected_return,
        "min volatility",
      )
      .plot();

    assert_eq!(plot.data().len(), 4);
    Ok(())
  }

  #[test]
  fn cal_registration_rejects_degenerate_range() {
    let cal = CapitalAllocationLine::new(0.03, 0.9);
    let err = FrontierPlotter::new()
      .register_cal(&cal, -1.0, "CAL")
      .unwrap_err();
    assert!(matches!(err, FrontierError::InvalidArgument(_)));
  }
}
