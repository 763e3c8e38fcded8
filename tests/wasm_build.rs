//! WASM build test
//!
//! This module tests that the WASM module can be built and the decode
//! bindings work from JavaScript.

use vmf_decoder::api::{decode_vmf, decode_vmf_to_json, decode_vmf_with_settings};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SIMPLE: &str = include_str!("fixtures/simple.vmf");
const NOT_JSON: &str = include_str!("fixtures/notJson.vmf");

#[wasm_bindgen_test]
fn test_decode_vmf_returns_object() {
    let result = decode_vmf(SIMPLE);
    assert!(result.is_ok());
    assert!(result.unwrap().is_object());
}

#[wasm_bindgen_test]
fn test_decode_vmf_rejects_non_json() {
    let err = decode_vmf(NOT_JSON).unwrap_err();
    let msg = err.as_string().unwrap_or_default();
    assert!(msg.contains("Json"), "unexpected error: {}", msg);
}

#[wasm_bindgen_test]
fn test_decode_vmf_to_json() {
    let json = decode_vmf_to_json(SIMPLE).unwrap();
    assert!(json.contains("\"notes\""));
    assert!(json.contains("\"tick_value\": \"1/1\""));
}

#[wasm_bindgen_test]
fn test_decode_vmf_with_default_settings() {
    let settings = serde_wasm_bindgen::to_value(&vmf_decoder::DecodeSettings::default()).unwrap();
    assert!(decode_vmf_with_settings(SIMPLE, settings).is_ok());
}

#[wasm_bindgen_test]
fn test_decode_vmf_with_bad_settings() {
    let result = decode_vmf_with_settings(SIMPLE, JsValue::from_str("strict"));
    assert!(result.is_err());
}
