//! Stateless entry points mirroring the core formulas one to one.

use crate::shared::{js_error, serialize};
use js_sys::Float64Array;
use solow_core::grid::CapitalGrid;
use solow_core::production::produce as core_produce;
use solow_core::steady_state::{
    find_steady_state as core_find_steady_state, solve_steady_state as core_solve_steady_state,
};
use solow_core::{update_curves as core_update_curves, Parameters, PARAMETER_SPECS};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn produce(k: f64, alpha: f64) -> f64 {
    core_produce(k, alpha)
}

#[wasm_bindgen]
pub fn update_curves(
    k_vals: Vec<f64>,
    s: f64,
    n: f64,
    d: f64,
    alpha: f64,
) -> Result<JsValue, JsValue> {
    let curves = core_update_curves(&k_vals, &Parameters::new(s, n, d, alpha));
    serialize(&curves)
}

/// Raw closed form; degenerate inputs come back as `Infinity`/`NaN`.
#[wasm_bindgen]
pub fn find_steady_state(s: f64, n: f64, d: f64, alpha: f64) -> Result<JsValue, JsValue> {
    serialize(&core_find_steady_state(&Parameters::new(s, n, d, alpha)))
}

#[wasm_bindgen]
pub fn solve_steady_state(s: f64, n: f64, d: f64, alpha: f64) -> Result<JsValue, JsValue> {
    let analysis = core_solve_steady_state(&Parameters::new(s, n, d, alpha))
        .map_err(|e| js_error("Steady state failed", &e))?;
    serialize(&analysis)
}

#[wasm_bindgen]
pub fn parameter_specs() -> Result<JsValue, JsValue> {
    serialize(&PARAMETER_SPECS)
}

#[wasm_bindgen]
pub fn default_capital_grid() -> Float64Array {
    Float64Array::from(CapitalGrid::default().values())
}
