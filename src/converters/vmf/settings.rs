//! Decoder configuration

use super::defaults::{DEFAULT_KEY_SIGNATURE, DEFAULT_TEMPO_BPM};
use crate::models::KeySignature;
use serde::{Deserialize, Serialize};

/// What to do with a tick whose event kind is not rest, attack or sustain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventKindPolicy {
    /// Skip the tick without touching the decoder state
    #[default]
    Ignore,

    /// Abort the decode with `DecodeError::UnknownEventKind`
    Reject,
}

/// Configuration options for decoding
///
/// Missing fields take their default, so a partial settings object is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeSettings {
    /// Tempo synthesized at measure 0 when the header has none
    pub default_tempo_bpm: i32,

    /// Key synthesized at measure 0 when the header has none
    pub default_key_signature: KeySignature,

    pub event_kind_policy: EventKindPolicy,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            default_tempo_bpm: DEFAULT_TEMPO_BPM,
            default_key_signature: DEFAULT_KEY_SIGNATURE,
            event_kind_policy: EventKindPolicy::Ignore,
        }
    }
}

impl DecodeSettings {
    /// Default settings, but unknown event kinds are an error
    pub fn strict() -> Self {
        Self {
            event_kind_policy: EventKindPolicy::Reject,
            ..Self::default()
        }
    }
}
