use crate::bbox::bounding_box;
use crate::convert::feature;
use geojson::JsonObject;
use serde_json::json;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Converts a WKT string to a GeoJSON Feature object, carrying `properties`
/// through verbatim. Returns `null` when the string holds no usable geometry;
/// a malformed WKT string is not an error.
#[wasm_bindgen]
pub fn wkt_to_feature(wkt: &str, properties: JsValue) -> Result<JsValue, JsValue> {
    let properties: Option<JsonObject> = if properties.is_null() || properties.is_undefined() {
        None
    } else {
        let props = serde_wasm_bindgen::from_value(properties)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse properties: {}", e)))?;
        Some(props)
    };

    match feature(wkt, properties) {
        Some(f) => serde_wasm_bindgen::to_value(&f)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize feature: {}", e))),
        None => Ok(JsValue::NULL),
    }
}

/// Bounding box of a WKT string as `{north, south, east, west}`, or `null`
/// when it holds no valid coordinates.
#[wasm_bindgen]
pub fn wkt_bounding_box(wkt: &str) -> Result<JsValue, JsValue> {
    match bounding_box(wkt) {
        Some(b) => {
            let value = json!({
                "north": b.north,
                "south": b.south,
                "east": b.east,
                "west": b.west,
            });
            serde_wasm_bindgen::to_value(&value)
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize bbox: {}", e)))
        }
        None => Ok(JsValue::NULL),
    }
}
