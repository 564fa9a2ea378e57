use rglib::{DecodedIui, IuiListResult};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

fn decode_iui_internal(iui: &str) -> DecodedIui {
    rglib::decode_iui(iui)
}

fn decode_iui_list_internal(iui_list: &str, separator: Option<String>) -> IuiListResult {
    rglib::decode_iui_list(iui_list, separator.as_deref())
}

/// `sul` arrives as a JS number; fractional parts are floored first.
fn expected_nodes_internal(product: &str, sul: f64) -> Result<i64, String> {
    if !sul.is_finite() {
        return Err(format!("sul must be a finite number, got {sul}"));
    }
    Ok(rglib::expected_nodes(product, sul.floor() as i64))
}

/// Plain JS objects (not `Map`s) so callers can read `.valid` directly.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = decodeIUI)]
pub fn decode_iui(iui: &str) -> Result<JsValue, JsValue> {
    to_js(&decode_iui_internal(iui))
}

#[wasm_bindgen(js_name = isValidIUI)]
pub fn is_valid_iui(iui: &str) -> bool {
    rglib::is_valid_iui(iui)
}

#[wasm_bindgen(js_name = cleanIUI)]
pub fn clean_iui(iui: &str) -> String {
    rglib::clean_iui(iui)
}

#[wasm_bindgen(js_name = decodeIUIList)]
pub fn decode_iui_list(iui_list: &str, separator: Option<String>) -> Result<JsValue, JsValue> {
    to_js(&decode_iui_list_internal(iui_list, separator))
}

#[wasm_bindgen(js_name = hasValidIUI)]
pub fn has_valid_iui(iui_list: &str, separator: Option<String>) -> bool {
    rglib::has_valid_iui(iui_list, separator.as_deref())
}

#[wasm_bindgen(js_name = expectedNodes)]
pub fn expected_nodes(product: &str, sul: f64) -> Result<f64, JsValue> {
    expected_nodes_internal(product, sul)
        .map(|nodes| nodes as f64)
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = supportPartNumber)]
pub fn support_part_number(product: &str) -> String {
    rglib::support_part_number(product)
}

#[wasm_bindgen]
pub fn version() -> String {
    rglib::version().to_owned()
}
