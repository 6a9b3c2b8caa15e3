//! Text shown next to the chart.

use crate::params::Parameters;
use crate::steady_state::{Stability, SteadyState, SteadyStateAnalysis};

pub const PAGE_TITLE: &str = "Modelo de Solow Simples";
pub const PAGE_INTRO: &str = "Ajuste os parâmetros abaixo para visualizar os efeitos no modelo.";
pub const SUMMARY_HEADING: &str = "🔍 Parâmetros e Estado Estacionário";

/// Parameter line followed by the two equilibrium lines.
pub fn summary_lines(params: &Parameters, state: &SteadyState) -> Vec<String> {
    vec![
        format!(
            "s = {:.2} | n = {:.3} | d = {:.3} | alpha = {:.2}",
            params.s, params.n, params.d, params.alpha
        ),
        format!(
            "k* = {:.3} | y* = {:.3} | c* = {:.3}",
            state.k_star, state.y_star, state.c_star
        ),
        format!("w* = {:.3} | r* = {:.3}", state.w_star, state.r_star),
    ]
}

pub fn stability_line(analysis: &SteadyStateAnalysis) -> String {
    let verdict = match analysis.stability {
        Stability::Stable => "estável",
        Stability::Unstable => "instável",
        Stability::Neutral => "neutro",
    };
    match analysis.half_life {
        Some(half_life) => format!(
            "λ = {:.4} ({verdict}) | meia-vida = {:.1}",
            analysis.eigenvalue, half_life
        ),
        None => format!("λ = {:.4} ({verdict})", analysis.eigenvalue),
    }
}
