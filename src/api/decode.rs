//! Decode operations for the WASM API
//!
//! - `decodeVmf`: VMF source text → score object
//! - `decodeVmfWithSettings`: same, with caller-supplied [`DecodeSettings`]
//! - `decodeVmfToJson`: VMF source text → pretty-printed score JSON

use wasm_bindgen::prelude::*;
use crate::api::helpers::{decode_error, deserialize, serialize};
use crate::converters::vmf::{self, DecodeError, DecodeSettings};
use crate::models::Score;
use crate::{wasm_info, wasm_log};

/// Decode VMF source text into a JavaScript score object
#[wasm_bindgen(js_name = decodeVmf)]
pub fn decode_vmf(source: &str) -> Result<JsValue, JsValue> {
    wasm_info!("decodeVmf called ({} bytes)", source.len());

    let score = vmf::decode_str(source).map_err(decode_error)?;
    wasm_log!("  Decoded {} note(s)", score.notes().len());

    serialize(&score, "Score serialization error")
}

/// Decode VMF source text with explicit settings
///
/// # Parameters
/// - `source`: VMF document text
/// - `settings_js`: object shaped like `DecodeSettings`
///   (`{ default_tempo_bpm, default_key_signature, event_kind_policy }`)
#[wasm_bindgen(js_name = decodeVmfWithSettings)]
pub fn decode_vmf_with_settings(source: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("decodeVmfWithSettings called ({} bytes)", source.len());

    let settings: DecodeSettings = deserialize(settings_js, "Invalid decode settings")?;
    let document: serde_json::Value = serde_json::from_str(source)
        .map_err(|e| decode_error(DecodeError::from(e)))?;
    let score = vmf::decode_with_settings(&document, &settings).map_err(decode_error)?;
    wasm_log!("  Decoded {} note(s)", score.notes().len());

    serialize(&score, "Score serialization error")
}

/// Decode VMF source text and return the score as pretty-printed JSON
#[wasm_bindgen(js_name = decodeVmfToJson)]
pub fn decode_vmf_to_json(source: &str) -> Result<String, JsValue> {
    wasm_info!("decodeVmfToJson called ({} bytes)", source.len());

    let score = vmf::decode_str(source).map_err(decode_error)?;
    let json = score_to_json(&score).map_err(decode_error)?;
    wasm_info!("  Score JSON generated: {} bytes", json.len());

    Ok(json)
}

/// Pretty-printed JSON form of a score, as returned by `decodeVmfToJson`
pub fn score_to_json(score: &Score) -> Result<String, DecodeError> {
    Ok(serde_json::to_string_pretty(score)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SOURCE: &str = r#"{
        "header": {
            "tick_value": "1/2",
            "number_of_parts": 1,
            "number_of_voices": 1,
            "time_signature": { "0": "3/4" },
            "key_signature": { "0": -3 },
            "tempo": {}
        },
        "body": [[[1, 2, 5, 3, 4]], [[2, 2, 5, 3, 4]], [[1, -2, 0, 10, 3]]]
    }"#;

    #[test]
    fn test_score_to_json_shape() {
        let score = vmf::decode_str(SOURCE).unwrap();
        let json: Value = serde_json::from_str(&score_to_json(&score).unwrap()).unwrap();

        let header = &json["header"];
        assert_eq!(header["tick_value"], "1/2");
        assert_eq!(header["number_of_parts"], 1);
        assert_eq!(header["time_signatures"][0]["upper"], 3);
        assert_eq!(header["time_signatures"][0]["lower"], 4);
        assert_eq!(header["key_signatures"][0]["key_signature"], -3);
        assert_eq!(header["metronome_markings"][0]["quarter_bpm"], 100);

        let notes = json["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0]["dynamic"], 2);
        assert_eq!(notes[0]["articulation"], 5);
        assert_eq!(notes[0]["pitch_class"], 3);
        assert_eq!(notes[0]["duration"], 2);
        assert_eq!(notes[1]["offset"], 2);
        assert_eq!(notes[1]["dynamic"], -2);
    }
}
