//! Conversions shared by the exported entry points.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use solow_core::ParameterKind;
use wasm_bindgen::JsValue;

pub(crate) fn parse_kind(name: &str) -> Result<ParameterKind, String> {
    ParameterKind::from_name(name).map_err(|e| e.to_string())
}

/// Flattens an error chain into one line for the JS side.
pub(crate) fn describe(context: &str, err: &anyhow::Error) -> String {
    format!("{}: {:#}", context, err)
}

pub(crate) fn js_error(context: &str, err: &anyhow::Error) -> JsValue {
    JsValue::from_str(&describe(context, err))
}

pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use solow_core::Parameters;

    #[test]
    fn parse_kind_reports_unknown_names() {
        assert_eq!(parse_kind("alpha"), Ok(ParameterKind::CapitalShare));
        let message = parse_kind("rho").expect_err("rho is not a parameter");
        assert!(message.contains("unknown parameter: rho"), "{message}");
    }

    #[test]
    fn describe_keeps_the_whole_error_chain() {
        let err = Parameters::new(0.3, 0.0, 0.0, 0.3)
            .validate()
            .context("Cannot compute steady state for these parameters.")
            .expect_err("degenerate parameters");
        let message = describe("Recompute failed", &err);
        assert!(message.starts_with("Recompute failed: Cannot compute"), "{message}");
        assert!(message.contains("n + d must be positive"), "{message}");
    }
}
