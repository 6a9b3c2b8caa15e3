//! Stateful session wrapper driven by the browser sliders.

use crate::shared::{js_error, parse_kind, serialize};
use js_sys::Float64Array;
use serde_wasm_bindgen::from_value;
use solow_core::{Parameters, Session};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSolowSession {
    session: Session,
}

fn parameters_from_js(value: JsValue) -> Result<Parameters, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Parameters::default());
    }
    let raw: Parameters = from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid parameters object: {}", e)))?;
    raw.clamped().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl WasmSolowSession {
    /// `initial` may be `undefined` or a partial `{ s, n, d, alpha }` object;
    /// missing fields take their slider defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(initial: JsValue) -> Result<WasmSolowSession, JsValue> {
        console_error_panic_hook::set_once();

        let params = parameters_from_js(initial)?;
        let session = Session::new(params).map_err(|e| js_error("Session setup failed", &e))?;
        Ok(WasmSolowSession { session })
    }

    /// Moves one slider and returns the recomputed snapshot.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<JsValue, JsValue> {
        let kind = parse_kind(name).map_err(|e| JsValue::from_str(&e))?;
        let snapshot = self
            .session
            .set_parameter(kind, value)
            .map_err(|e| js_error("Recompute failed", &e))?;
        serialize(snapshot)
    }

    pub fn set_parameters(&mut self, params: JsValue) -> Result<JsValue, JsValue> {
        let params = parameters_from_js(params)?;
        let snapshot = self
            .session
            .set_parameters(params)
            .map_err(|e| js_error("Recompute failed", &e))?;
        serialize(snapshot)
    }

    pub fn nudge(&mut self, name: &str, steps: i32) -> Result<JsValue, JsValue> {
        let kind = parse_kind(name).map_err(|e| JsValue::from_str(&e))?;
        let snapshot = self
            .session
            .nudge(kind, steps)
            .map_err(|e| js_error("Recompute failed", &e))?;
        serialize(snapshot)
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self
            .session
            .reset()
            .map_err(|e| js_error("Recompute failed", &e))?;
        serialize(snapshot)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(self.session.snapshot())
    }

    pub fn chart(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.snapshot().chart)
    }

    pub fn steady_state(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.snapshot().steady_state)
    }

    pub fn parameters(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.params())
    }

    pub fn summary_lines(&self) -> Vec<String> {
        self.session.snapshot().summary.clone()
    }

    pub fn capital_grid(&self) -> Float64Array {
        Float64Array::from(self.session.grid().values())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::WasmSolowSession;
    use serde_wasm_bindgen::{from_value, to_value};
    use solow_core::{Parameters, SteadyStateAnalysis};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[derive(serde::Serialize)]
    struct SavingsOnly {
        s: f64,
    }

    #[wasm_bindgen_test]
    fn undefined_initial_parameters_use_defaults() {
        let session = WasmSolowSession::new(JsValue::UNDEFINED).expect("session");
        let params: Parameters = from_value(session.parameters().expect("params")).expect("decode");
        assert_eq!(params, Parameters::default());
        assert_eq!(session.capital_grid().length(), 200);
        assert_eq!(session.summary_lines().len(), 3);
    }

    #[wasm_bindgen_test]
    fn set_parameter_returns_recomputed_steady_state() {
        let mut session = WasmSolowSession::new(JsValue::UNDEFINED).expect("session");
        session.set_parameter("s", 0.1).expect("valid update");
        session.set_parameter("n", 0.05).expect("valid update");
        session.set_parameter("d", 0.05).expect("valid update");
        session.set_parameter("alpha", 0.5).expect("valid update");
        let analysis: SteadyStateAnalysis =
            from_value(session.steady_state().expect("steady state")).expect("decode");
        assert!((analysis.state.k_star - 1.0).abs() < 1e-12);
        assert!((analysis.state.c_star - 0.9).abs() < 1e-12);
    }

    #[wasm_bindgen_test]
    fn unknown_parameter_names_are_rejected() {
        let mut session = WasmSolowSession::new(JsValue::UNDEFINED).expect("session");
        let message = session
            .set_parameter("beta", 0.5)
            .err()
            .and_then(|err| err.as_string())
            .unwrap_or_default();
        assert!(message.contains("unknown parameter"), "{message}");
    }

    #[wasm_bindgen_test]
    fn partial_initial_object_is_clamped() {
        let initial = to_value(&SavingsOnly { s: 0.95 }).expect("encode");
        let session = WasmSolowSession::new(initial).expect("session");
        let params: Parameters = from_value(session.parameters().expect("params")).expect("decode");
        assert_eq!(params.s, 0.8);
        assert_eq!(params.alpha, 0.3);
    }
}
