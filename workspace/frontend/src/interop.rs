use serde::Serialize;
use wasm_bindgen::JsValue;

/// Converts option/data literals into plain JS objects (not `Map`s), which
/// is what Leaflet and Plotly expect.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|e| {
            log::error!("Failed to convert value for JS: {}", e);
            JsValue::UNDEFINED
        })
}
