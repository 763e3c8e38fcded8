//! The twelve chromatic pitch classes
//!
//! VMF stores a pitch class as its semitone distance above C (0-11).
//! Sharps are used for the black keys; the format carries no enharmonic
//! spelling information.

use super::code_table::{CodeError, CodeTable};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum PitchClass {
    C = 0,
    Cs = 1,
    D = 2,
    Ds = 3,
    E = 4,
    F = 5,
    Fs = 6,
    G = 7,
    Gs = 8,
    A = 9,
    As = 10,
    B = 11,
}

fn in_range(code: i64) -> bool {
    (0..=11).contains(&code)
}

pub static PITCH_CLASSES: CodeTable<PitchClass> = CodeTable::new(
    "pitch class",
    "0 to 11 inclusive",
    in_range,
    &[
        (0, PitchClass::C),
        (1, PitchClass::Cs),
        (2, PitchClass::D),
        (3, PitchClass::Ds),
        (4, PitchClass::E),
        (5, PitchClass::F),
        (6, PitchClass::Fs),
        (7, PitchClass::G),
        (8, PitchClass::Gs),
        (9, PitchClass::A),
        (10, PitchClass::As),
        (11, PitchClass::B),
    ],
);

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    pub fn from_code(code: i64) -> Result<Self, CodeError> {
        PITCH_CLASSES.lookup(code)
    }

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_codes() {
        for code in 0..=11 {
            let pc = PitchClass::from_code(code).unwrap();
            assert_eq!(i64::from(pc.code()), code);
            assert_eq!(PITCH_CLASSES.code_of(pc), Some(pc.code()));
        }
    }

    #[test]
    fn test_table_matches_all() {
        assert_eq!(PITCH_CLASSES.len(), PitchClass::ALL.len());
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.code() as usize, i);
        }
    }

    #[test]
    fn test_out_of_range() {
        for code in [-1, 12, 100, i64::MIN, i64::MAX] {
            assert!(
                matches!(PitchClass::from_code(code), Err(CodeError::OutOfRange { .. })),
                "code {} should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PitchClass::C.to_string(), "C");
        assert_eq!(PitchClass::Fs.to_string(), "F#");
        assert_eq!(PitchClass::from_code(10).unwrap(), PitchClass::As);
    }
}
