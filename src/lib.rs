//! Pedal Generator Simulator.
//!
//! Turns pedal cadence, resistance, duration, body weight and battery capacity
//! into energy, average power, battery charge and calorie figures. The
//! formulas live in [`metrics`]; the remaining modules support the Yew front
//! end in `main.rs` and the `seo_assets` binary.

use log::debug;
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod metrics;
pub mod seo;
pub mod theme;
pub mod utils;

pub use metrics::{compute, Metrics, PedalInput};

/// JavaScript entry point for the metrics formulas.
///
/// Takes a camelCase input object (`rpm`, `durationSec`, `weightKg`,
/// `resistance`, `batteryCapacityWh`), validates it against the form bounds and
/// returns the camelCase metrics object.
///
/// # Errors
/// Returns a string describing the first invalid field, or the deserialization
/// failure when the object has the wrong shape.
#[wasm_bindgen(js_name = computeMetrics)]
pub fn compute_metrics_js(input_js: JsValue) -> Result<JsValue, JsValue> {
    let input: PedalInput = serde_wasm_bindgen::from_value(input_js)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize input: {}", e)))?;

    input
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let metrics = compute(&input);
    debug!("computeMetrics({:?}) -> {:?}", input, metrics);
    serde_wasm_bindgen::to_value(&metrics).map_err(|e| JsValue::from_str(&e.to_string()))
}
