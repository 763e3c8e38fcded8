//! Header decoding: tick value, part/voice counts and the measure maps

use super::access::{parse_measure, AccessError, JsonObject};
use super::settings::DecodeSettings;
use super::{DecodeError, Result};
use crate::models::{
    parse_tick_value, KeySignature, KeySignatureInstance, MetronomeMarking, ScoreHeader,
    TimeSignature,
};

/// Decode the object stored under `"header"`
pub fn decode_header(header: &JsonObject<'_>, settings: &DecodeSettings) -> Result<ScoreHeader> {
    let tick_value_str = header.get_string("tick_value")?;
    let tick_value = parse_tick_value(tick_value_str).map_err(|e| AccessError::InvalidValue {
        path: format!("{}.tick_value", header.path()),
        reason: e.to_string(),
    })?;
    let number_of_parts = header.get_i32("number_of_parts")?;
    let number_of_voices = header.get_i32("number_of_voices")?;

    if number_of_parts > 1 || number_of_voices > 1 {
        log::warn!(
            "VMF header declares {} part(s) and {} voice(s); only the first part is decoded",
            number_of_parts,
            number_of_voices
        );
    }

    let time_signatures = decode_time_signatures(&header.get_object("time_signature")?)?;
    let key_signatures = decode_key_signatures(&header.get_object("key_signature")?, settings)?;
    let metronome_markings = decode_tempi(&header.get_object("tempo")?, settings)?;

    log::debug!(
        "Decoded VMF header: tick value {}, {} time signature(s), {} key signature(s), {} tempo marking(s)",
        tick_value,
        time_signatures.len(),
        key_signatures.len(),
        metronome_markings.len()
    );

    Ok(ScoreHeader::new(
        tick_value,
        number_of_parts,
        number_of_voices,
        time_signatures,
        key_signatures,
        metronome_markings,
    ))
}

fn decode_time_signatures(map: &JsonObject<'_>) -> Result<Vec<TimeSignature>> {
    if map.is_empty() {
        return Err(DecodeError::MissingTimeSignature);
    }

    let mut time_signatures = Vec::with_capacity(map.number_of_keys());
    for key in map.keys() {
        let measure = parse_measure(key, map.path())?;
        let ratio = map.get_string(key)?;
        let time_signature =
            TimeSignature::parse(measure, ratio).map_err(|e| AccessError::InvalidValue {
                path: format!("{}.{}", map.path(), key),
                reason: e.to_string(),
            })?;
        time_signatures.push(time_signature);
    }
    Ok(time_signatures)
}

fn decode_key_signatures(
    map: &JsonObject<'_>,
    settings: &DecodeSettings,
) -> Result<Vec<KeySignatureInstance>> {
    if map.is_empty() {
        return Ok(vec![KeySignatureInstance::new(
            0,
            settings.default_key_signature,
        )]);
    }

    let mut key_signatures = Vec::with_capacity(map.number_of_keys());
    for key in map.keys() {
        let measure = parse_measure(key, map.path())?;
        let key_signature = KeySignature::from_code(map.get_int(key)?)?;
        key_signatures.push(KeySignatureInstance::new(measure, key_signature));
    }
    Ok(key_signatures)
}

fn decode_tempi(map: &JsonObject<'_>, settings: &DecodeSettings) -> Result<Vec<MetronomeMarking>> {
    if map.is_empty() {
        return Ok(vec![MetronomeMarking::new(0, settings.default_tempo_bpm)]);
    }

    let mut tempi = Vec::with_capacity(map.number_of_keys());
    for key in map.keys() {
        let measure = parse_measure(key, map.path())?;
        tempi.push(MetronomeMarking::new(measure, map.get_i32(key)?));
    }
    Ok(tempi)
}
