//! Default values applied when a VMF header leaves a map empty

use crate::models::KeySignature;

/// Tempo assumed at measure 0 when the header has no `tempo` entries
pub const DEFAULT_TEMPO_BPM: i32 = 100;

/// Key assumed at measure 0 when the header has no `key_signature` entries
pub const DEFAULT_KEY_SIGNATURE: KeySignature = KeySignature::CMajorAMinor;

/// Tick event kinds as stored in slot 0 of a part tuple
pub const EVENT_REST: i64 = 0;
pub const EVENT_ATTACK: i64 = 1;
pub const EVENT_SUSTAIN: i64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_TEMPO_BPM, 100);
        assert_eq!(DEFAULT_KEY_SIGNATURE.code(), 0);
        assert_eq!((EVENT_REST, EVENT_ATTACK, EVENT_SUSTAIN), (0, 1, 2));
    }
}
