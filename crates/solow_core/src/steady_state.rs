//! Closed-form steady state of the Solow model and its local stability.
//!
//! The equilibrium solves `s * k^alpha = (n + d) * k` directly, so no Newton
//! iteration is involved. Stability comes from linearising the accumulation
//! law at `k*` with dual numbers.

use crate::autodiff::{accumulation_slope, lift};
use crate::params::Parameters;
use crate::production::{marginal_product_of_capital, marginal_product_of_labor, produce};
use crate::traits::{AccumulationLaw, Scalar};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Equilibrium values per worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    pub k_star: f64,
    pub y_star: f64,
    pub c_star: f64,
    pub w_star: f64,
    pub r_star: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Unstable,
    /// Zero slope; the linearisation says nothing.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyStateAnalysis {
    pub state: SteadyState,
    /// `s * f(k*) - (n + d) * k*`, zero up to rounding.
    pub residual: f64,
    /// Slope of `dk/dt` at `k*`.
    pub eigenvalue: f64,
    pub stability: Stability,
    /// Time for a deviation from `k*` to halve under the linearised law.
    /// `None` unless the equilibrium is stable.
    pub half_life: Option<f64>,
}

/// `dk/dt = s * f(k) - (n + d) * k`.
#[derive(Debug, Clone, Copy)]
pub struct SolowSystem {
    pub params: Parameters,
}

impl SolowSystem {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }
}

impl<T: Scalar> AccumulationLaw<T> for SolowSystem {
    fn net_investment(&self, k: T) -> T {
        let s: T = lift(self.params.s);
        let alpha: T = lift(self.params.alpha);
        let break_even: T = lift(self.params.break_even_rate());
        s * produce(k, alpha) - break_even * k
    }
}

/// Evaluates the analytic fixed point. Parameters are not checked:
/// `n + d = 0` or `alpha = 1` produce whatever IEEE arithmetic gives.
pub fn find_steady_state(params: &Parameters) -> SteadyState {
    let Parameters { s, alpha, .. } = *params;
    let k_star = (s / params.break_even_rate()).powf(1.0 / (1.0 - alpha));
    let y_star = produce(k_star, alpha);
    SteadyState {
        k_star,
        y_star,
        c_star: y_star - s * y_star,
        w_star: marginal_product_of_labor(k_star, alpha),
        r_star: marginal_product_of_capital(k_star, alpha),
    }
}

/// Validated steady state plus its linear stability.
pub fn solve_steady_state(params: &Parameters) -> Result<SteadyStateAnalysis> {
    params
        .validate()
        .context("Cannot compute steady state for these parameters.")?;

    let state = find_steady_state(params);
    if !state.k_star.is_finite() || state.k_star <= 0.0 {
        bail!(
            "Steady-state capital is not a positive finite number (k* = {}).",
            state.k_star
        );
    }

    let system = SolowSystem::new(*params);
    let residual = AccumulationLaw::<f64>::net_investment(&system, state.k_star);
    let eigenvalue = accumulation_slope::<SolowSystem>(&system, state.k_star);
    let stability = classify(eigenvalue);
    let half_life = match stability {
        Stability::Stable => Some(std::f64::consts::LN_2 / eigenvalue.abs()),
        _ => None,
    };

    Ok(SteadyStateAnalysis {
        state,
        residual,
        eigenvalue,
        stability,
        half_life,
    })
}

fn classify(eigenvalue: f64) -> Stability {
    if eigenvalue < 0.0 {
        Stability::Stable
    } else if eigenvalue > 0.0 {
        Stability::Unstable
    } else {
        Stability::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn default_parameters_match_closed_form() {
        let state = find_steady_state(&Parameters::default());
        let k_expected = 7.5_f64.powf(1.0 / 0.7);
        assert!(rel_close(state.k_star, k_expected, 1e-12));
        assert!((state.k_star - 17.786).abs() < 1e-3, "k* = {}", state.k_star);
        assert!((state.y_star - 2.3715).abs() < 1e-4, "y* = {}", state.y_star);
        assert!(rel_close(state.c_star, 0.7 * state.y_star, 1e-12));
        assert!(rel_close(state.w_star, 0.7 * state.y_star, 1e-12));
        assert!((state.r_star - 0.04).abs() < 1e-12, "r* = {}", state.r_star);
    }

    #[test]
    fn unit_ratio_gives_unit_capital() {
        let state = find_steady_state(&Parameters::new(0.1, 0.05, 0.05, 0.5));
        assert!((state.k_star - 1.0).abs() < 1e-12);
        assert!((state.y_star - 1.0).abs() < 1e-12);
        assert!((state.c_star - 0.9).abs() < 1e-12);
    }

    #[test]
    fn investment_balances_break_even_at_the_steady_state() {
        for params in [
            Parameters::default(),
            Parameters::new(0.8, 0.001, 0.001, 0.9),
            Parameters::new(0.01, 0.1, 0.1, 0.1),
            Parameters::new(0.45, 0.037, 0.012, 0.62),
        ] {
            let state = find_steady_state(&params);
            let required = params.break_even_rate() * state.k_star;
            let effective = params.s * state.y_star;
            assert!(
                rel_close(required, effective, 1e-9),
                "{params:?}: (n+d)k* = {required}, s y* = {effective}"
            );
        }
    }

    #[test]
    fn factor_payments_sum_to_output() {
        for params in [
            Parameters::default(),
            Parameters::new(0.6, 0.01, 0.03, 0.75),
            Parameters::new(0.05, 0.08, 0.02, 0.2),
        ] {
            let state = find_steady_state(&params);
            let paid = state.w_star + state.r_star * state.k_star;
            assert!(rel_close(paid, state.y_star, 1e-9), "{params:?}");
        }
    }

    #[test]
    fn capital_rises_strictly_with_savings() {
        let mut previous = 0.0;
        for i in 1..=80 {
            let s = f64::from(i) * 0.01;
            let k = find_steady_state(&Parameters::new(s, 0.02, 0.02, 0.3)).k_star;
            assert!(k > previous, "k*({s}) = {k} did not exceed {previous}");
            previous = k;
        }
    }

    #[test]
    fn unguarded_solver_propagates_ieee_results() {
        let state = find_steady_state(&Parameters::new(0.3, 0.0, 0.0, 0.3));
        assert!(state.k_star.is_infinite());
    }

    #[test]
    fn analysis_reports_stable_eigenvalue() {
        let params = Parameters::default();
        let analysis = solve_steady_state(&params).expect("default parameters are valid");
        let expected = params.break_even_rate() * (params.alpha - 1.0);
        assert!(
            (analysis.eigenvalue - expected).abs() < 1e-12,
            "eigenvalue {} vs {expected}",
            analysis.eigenvalue
        );
        assert_eq!(analysis.stability, Stability::Stable);
        assert!(analysis.residual.abs() < 1e-9, "residual {}", analysis.residual);
        let half_life = analysis.half_life.expect("stable equilibria have a half-life");
        assert!((half_life - std::f64::consts::LN_2 / 0.028).abs() < 1e-9);
    }

    #[test]
    fn analysis_rejects_degenerate_parameters() {
        let err = solve_steady_state(&Parameters::new(0.3, 0.02, 0.02, 1.0))
            .expect_err("alpha = 1 should be rejected");
        let message = format!("{err:#}");
        assert!(message.contains("alpha"), "unexpected error: {message}");

        assert!(solve_steady_state(&Parameters::new(0.3, 0.0, 0.0, 0.3)).is_err());
    }
}
