use crate::chart::ChartSpec;
use crate::curves::{update_curves, CurveSet};
use crate::grid::CapitalGrid;
use crate::params::Parameters;
use crate::steady_state::{solve_steady_state, SteadyStateAnalysis};
use crate::summary::{stability_line, summary_lines};
use anyhow::Result;
use serde::Serialize;

/// Everything a presentation layer needs for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSnapshot {
    pub params: Parameters,
    pub curves: CurveSet,
    pub steady_state: SteadyStateAnalysis,
    pub chart: ChartSpec,
    pub summary: Vec<String>,
    pub stability: String,
}

impl ModelSnapshot {
    /// Recomputes the whole diagram from scratch.
    pub fn compute(params: Parameters, grid: &CapitalGrid) -> Result<Self> {
        let steady_state = solve_steady_state(&params)?;
        let curves = update_curves(grid.values(), &params);
        let chart = ChartSpec::build(grid, &curves, &steady_state.state);
        let summary = summary_lines(&params, &steady_state.state);
        let stability = stability_line(&steady_state);
        Ok(Self {
            params,
            curves,
            steady_state,
            chart,
            summary,
            stability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_internally_consistent() {
        let grid = CapitalGrid::default();
        let snapshot =
            ModelSnapshot::compute(Parameters::default(), &grid).expect("defaults are valid");
        assert_eq!(snapshot.curves.len(), grid.len());
        let marker = snapshot
            .chart
            .steady_state_marker
            .as_ref()
            .expect("default k* is on the chart");
        assert_eq!(marker.x, snapshot.steady_state.state.k_star);
        assert_eq!(snapshot.summary.len(), 3);
        assert!(snapshot.stability.starts_with("λ = "));
    }

    #[test]
    fn snapshot_fails_for_invalid_parameters() {
        let grid = CapitalGrid::default();
        assert!(ModelSnapshot::compute(Parameters::new(0.0, 0.02, 0.02, 0.3), &grid).is_err());
    }
}
