use crate::params::Parameters;
use crate::production::produce_all;
use serde::{Deserialize, Serialize};

/// The four per-worker curves of the Solow diagram, co-indexed with the
/// capital grid they were evaluated on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    /// `y = f(k)`
    pub output: Vec<f64>,
    /// `s * y`
    pub investment: Vec<f64>,
    /// `(n + d) * k`
    pub required_investment: Vec<f64>,
    /// `y - s * y`
    pub consumption: Vec<f64>,
}

impl CurveSet {
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Largest value across all four curves, ignoring non-finite entries.
    pub fn max_value(&self) -> f64 {
        [
            &self.output,
            &self.investment,
            &self.required_investment,
            &self.consumption,
        ]
        .into_iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
    }
}

/// Evaluates every curve at each point of `k_vals`.
pub fn update_curves(k_vals: &[f64], params: &Parameters) -> CurveSet {
    let break_even = params.break_even_rate();
    let output = produce_all(k_vals, params.alpha);
    let investment: Vec<f64> = output.iter().map(|&y| params.s * y).collect();
    let consumption = output
        .iter()
        .zip(&investment)
        .map(|(&y, &sy)| y - sy)
        .collect();
    CurveSet {
        required_investment: k_vals.iter().map(|&k| break_even * k).collect(),
        output,
        investment,
        consumption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CapitalGrid;

    #[test]
    fn curves_are_co_indexed_with_the_grid() {
        let grid = CapitalGrid::default();
        let params = Parameters::default();
        let curves = update_curves(grid.values(), &params);
        assert_eq!(curves.output.len(), grid.len());
        assert_eq!(curves.investment.len(), grid.len());
        assert_eq!(curves.required_investment.len(), grid.len());
        assert_eq!(curves.consumption.len(), grid.len());
    }

    #[test]
    fn consumption_is_output_minus_investment_exactly() {
        let grid = CapitalGrid::default();
        for params in [
            Parameters::default(),
            Parameters::new(0.8, 0.1, 0.1, 0.9),
            Parameters::new(0.01, 0.001, 0.001, 0.1),
        ] {
            let curves = update_curves(grid.values(), &params);
            for i in 0..curves.len() {
                assert_eq!(
                    curves.consumption[i],
                    curves.output[i] - curves.investment[i],
                    "index {i} for {params:?}"
                );
            }
        }
    }

    #[test]
    fn pointwise_values_match_formulas() {
        let params = Parameters::new(0.25, 0.03, 0.05, 0.5);
        let curves = update_curves(&[4.0, 0.0, 16.0], &params);
        assert_eq!(curves.output, vec![2.0, 0.0, 4.0]);
        assert_eq!(curves.investment, vec![0.5, 0.0, 1.0]);
        let expected_required = [0.32, 0.0, 1.28];
        for (got, want) in curves.required_investment.iter().zip(expected_required) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn empty_grid_yields_empty_curves() {
        let curves = update_curves(&[], &Parameters::default());
        assert!(curves.is_empty());
        assert_eq!(curves.max_value(), 0.0);
    }

    #[test]
    fn max_value_covers_every_curve() {
        let params = Parameters::new(0.3, 0.1, 0.1, 0.1);
        let curves = update_curves(&[0.0, 100.0], &params);
        // Required investment (0.2 * 100) dominates output (100^0.1).
        assert!((curves.max_value() - 20.0).abs() < 1e-12);
    }
}
