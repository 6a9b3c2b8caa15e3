//! Renderer-agnostic description of the Solow diagram.
//!
//! Both front ends draw from the same [`ChartSpec`]: the browser host gets it
//! as a serialized object, the terminal UI maps it onto its own widgets.

use crate::curves::CurveSet;
use crate::grid::CapitalGrid;
use crate::steady_state::SteadyState;
use serde::{Deserialize, Serialize};

pub const CHART_TITLE: &str = "Curvas do Modelo de Solow";
pub const X_AXIS_LABEL: &str = "Estoque de Capital por Trabalhador (k)";
pub const Y_AXIS_LABEL: &str = "Produto por Trabalhador (y)";
pub const STEADY_STATE_GUIDE_LABEL: &str = "k* (Estado Estacionário)";
pub const STEADY_STATE_POINT_LABEL: &str = "Ponto de Estado Estacionário";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Output,
    Investment,
    RequiredInvestment,
    Consumption,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::Output,
        SeriesKind::Investment,
        SeriesKind::RequiredInvestment,
        SeriesKind::Consumption,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Output => "Produto por Trabalhador (y)",
            SeriesKind::Investment => "Investimento Efetivo (sy)",
            SeriesKind::RequiredInvestment => "Investimento Necessário (n+d)k",
            SeriesKind::Consumption => "Consumo por Trabalhador (c)",
        }
    }

    pub fn color(self) -> SeriesColor {
        match self {
            SeriesKind::Output => SeriesColor::Blue,
            SeriesKind::Investment => SeriesColor::Green,
            SeriesKind::RequiredInvestment => SeriesColor::Red,
            SeriesKind::Consumption => SeriesColor::Orange,
        }
    }

    fn values(self, curves: &CurveSet) -> &[f64] {
        match self {
            SeriesKind::Output => &curves.output,
            SeriesKind::Investment => &curves.investment,
            SeriesKind::RequiredInvestment => &curves.required_investment,
            SeriesKind::Consumption => &curves.consumption,
        }
    }
}

/// Named colours; each renderer maps them onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Orange,
    Gray,
    Black,
}

impl SeriesColor {
    pub fn hex(self) -> &'static str {
        match self {
            SeriesColor::Blue => "#1f77b4",
            SeriesColor::Green => "#2ca02c",
            SeriesColor::Red => "#d62728",
            SeriesColor::Orange => "#ff7f0e",
            SeriesColor::Gray => "#7f7f7f",
            SeriesColor::Black => "#000000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub kind: SeriesKind,
    pub label: String,
    pub color: SeriesColor,
    pub style: LineStyle,
    pub line_width: f64,
    /// `(k, value)` pairs in grid order.
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalGuide {
    pub x: f64,
    pub label: String,
    pub color: SeriesColor,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub series: Vec<Series>,
    /// `None` when `k*` lies outside `x_bounds`.
    pub steady_state_guide: Option<VerticalGuide>,
    /// `None` when `k*` lies outside `x_bounds`.
    pub steady_state_marker: Option<Marker>,
    pub show_grid: bool,
}

impl ChartSpec {
    pub fn build(grid: &CapitalGrid, curves: &CurveSet, steady_state: &SteadyState) -> Self {
        let k_vals = grid.values();
        let series = SeriesKind::ALL
            .iter()
            .map(|&kind| Series {
                kind,
                label: kind.label().to_string(),
                color: kind.color(),
                style: LineStyle::Solid,
                line_width: 2.0,
                points: k_vals
                    .iter()
                    .copied()
                    .zip(kind.values(curves).iter().copied())
                    .collect(),
            })
            .collect();

        let [x_min, x_max] = grid.bounds();
        let in_range = steady_state.k_star.is_finite()
            && steady_state.k_star >= x_min
            && steady_state.k_star <= x_max;
        let mut y_max = curves.max_value();
        // An off-range steady state must not stretch the axis.
        if in_range && steady_state.y_star.is_finite() {
            y_max = y_max.max(steady_state.y_star);
        }
        if y_max <= 0.0 {
            y_max = 1.0;
        }

        let (steady_state_guide, steady_state_marker) = if in_range {
            (
                Some(VerticalGuide {
                    x: steady_state.k_star,
                    label: STEADY_STATE_GUIDE_LABEL.to_string(),
                    color: SeriesColor::Gray,
                    style: LineStyle::Dashed,
                }),
                Some(Marker {
                    x: steady_state.k_star,
                    y: steady_state.y_star,
                    label: STEADY_STATE_POINT_LABEL.to_string(),
                    color: SeriesColor::Black,
                }),
            )
        } else {
            (None, None)
        };

        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            x_bounds: [x_min, x_max],
            y_bounds: [0.0, y_max],
            series,
            steady_state_guide,
            steady_state_marker,
            show_grid: true,
        }
    }

    pub fn series(&self, kind: SeriesKind) -> Option<&Series> {
        self.series.iter().find(|series| series.kind == kind)
    }

    /// Whether the steady state falls inside the plotted capital range.
    pub fn steady_state_visible(&self) -> bool {
        self.steady_state_guide.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::update_curves;
    use crate::params::Parameters;
    use crate::steady_state::find_steady_state;

    fn default_chart(params: Parameters) -> ChartSpec {
        let grid = CapitalGrid::default();
        let curves = update_curves(grid.values(), &params);
        let state = find_steady_state(&params);
        ChartSpec::build(&grid, &curves, &state)
    }

    #[test]
    fn chart_carries_the_four_labelled_series() {
        let chart = default_chart(Parameters::default());
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Produto por Trabalhador (y)",
                "Investimento Efetivo (sy)",
                "Investimento Necessário (n+d)k",
                "Consumo por Trabalhador (c)",
            ]
        );
        for series in &chart.series {
            assert_eq!(series.points.len(), 200, "{}", series.label);
        }
        assert_eq!(
            chart.series(SeriesKind::Consumption).map(|s| s.color),
            Some(SeriesColor::Orange)
        );
    }

    #[test]
    fn guide_and_marker_sit_on_the_steady_state() {
        let params = Parameters::default();
        let chart = default_chart(params);
        let state = find_steady_state(&params);
        let guide = chart.steady_state_guide.as_ref().expect("k* is on the chart");
        let marker = chart.steady_state_marker.as_ref().expect("k* is on the chart");
        assert_eq!(guide.x, state.k_star);
        assert_eq!(guide.style, LineStyle::Dashed);
        assert_eq!(marker.x, state.k_star);
        assert_eq!(marker.y, state.y_star);
        assert!(chart.steady_state_visible());
    }

    #[test]
    fn bounds_cover_every_point() {
        let chart = default_chart(Parameters::new(0.8, 0.001, 0.001, 0.9));
        assert_eq!(chart.x_bounds, [0.005, 100.0]);
        for series in &chart.series {
            for &(_, y) in &series.points {
                assert!(y <= chart.y_bounds[1], "{} exceeds y bound", series.label);
            }
        }
        // k* = 400^10 lies far beyond the plotted range and must not stretch it.
        assert!(!chart.steady_state_visible());
        assert!(chart.y_bounds[1] < 100.0, "y bound {}", chart.y_bounds[1]);
    }

    #[test]
    fn serialized_shape_uses_snake_case_tags() {
        let chart = default_chart(Parameters::default());
        let value = serde_json::to_value(&chart).expect("chart serializes");
        assert_eq!(value["series"][2]["kind"], "required_investment");
        assert_eq!(value["steady_state_guide"]["style"], "dashed");
        assert_eq!(value["title"], CHART_TITLE);
    }

    #[test]
    fn off_range_steady_state_serializes_without_guide_or_marker() {
        let chart = default_chart(Parameters::new(0.8, 0.001, 0.001, 0.9));
        assert!(chart.steady_state_guide.is_none());
        assert!(chart.steady_state_marker.is_none());
        let value = serde_json::to_value(&chart).expect("chart serializes");
        assert!(value["steady_state_guide"].is_null());
        assert!(value["steady_state_marker"].is_null());
        assert_eq!(value["series"].as_array().map(Vec::len), Some(4));
    }
}
