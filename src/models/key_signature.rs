//! Key signatures as major/minor pairs
//!
//! The VMF code is the signed accidental count: positive for sharps,
//! negative for flats, 0 for C major / A minor. A key signature never
//! carries sharps and flats at the same time.

use super::code_table::{CodeError, CodeTable};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum KeySignature {
    CFlatMajorAFlatMinor = -7,
    GFlatMajorEFlatMinor = -6,
    DFlatMajorBFlatMinor = -5,
    AFlatMajorFMinor = -4,
    EFlatMajorCMinor = -3,
    BFlatMajorGMinor = -2,
    FMajorDMinor = -1,
    #[default]
    CMajorAMinor = 0,
    GMajorEMinor = 1,
    DMajorBMinor = 2,
    AMajorFSharpMinor = 3,
    EMajorCSharpMinor = 4,
    BMajorGSharpMinor = 5,
    FSharpMajorDSharpMinor = 6,
    CSharpMajorASharpMinor = 7,
}

fn in_range(code: i64) -> bool {
    (-7..=7).contains(&code)
}

pub static KEY_SIGNATURES: CodeTable<KeySignature> = CodeTable::new(
    "key signature",
    "-7 to 7 inclusive",
    in_range,
    &[
        (-7, KeySignature::CFlatMajorAFlatMinor),
        (-6, KeySignature::GFlatMajorEFlatMinor),
        (-5, KeySignature::DFlatMajorBFlatMinor),
        (-4, KeySignature::AFlatMajorFMinor),
        (-3, KeySignature::EFlatMajorCMinor),
        (-2, KeySignature::BFlatMajorGMinor),
        (-1, KeySignature::FMajorDMinor),
        (0, KeySignature::CMajorAMinor),
        (1, KeySignature::GMajorEMinor),
        (2, KeySignature::DMajorBMinor),
        (3, KeySignature::AMajorFSharpMinor),
        (4, KeySignature::EMajorCSharpMinor),
        (5, KeySignature::BMajorGSharpMinor),
        (6, KeySignature::FSharpMajorDSharpMinor),
        (7, KeySignature::CSharpMajorASharpMinor),
    ],
);

impl KeySignature {
    pub fn from_code(code: i64) -> Result<Self, CodeError> {
        KEY_SIGNATURES.lookup(code)
    }

    /// Build from an accidental count; at most one of the two may be nonzero
    pub fn from_accidentals(sharps: u8, flats: u8) -> Result<Self, CodeError> {
        if sharps != 0 && flats != 0 {
            return Err(CodeError::ConflictingAccidentals { sharps, flats });
        }
        Self::from_code(i64::from(sharps) - i64::from(flats))
    }

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn sharps(self) -> u8 {
        self.code().max(0).unsigned_abs()
    }

    pub fn flats(self) -> u8 {
        self.code().min(0).unsigned_abs()
    }

    /// Major and minor tonic names, e.g. `("E♭", "C")`
    pub fn tonics(&self) -> (&'static str, &'static str) {
        match self {
            KeySignature::CFlatMajorAFlatMinor => ("C♭", "A♭"),
            KeySignature::GFlatMajorEFlatMinor => ("G♭", "E♭"),
            KeySignature::DFlatMajorBFlatMinor => ("D♭", "B♭"),
            KeySignature::AFlatMajorFMinor => ("A♭", "F"),
            KeySignature::EFlatMajorCMinor => ("E♭", "C"),
            KeySignature::BFlatMajorGMinor => ("B♭", "G"),
            KeySignature::FMajorDMinor => ("F", "D"),
            KeySignature::CMajorAMinor => ("C", "A"),
            KeySignature::GMajorEMinor => ("G", "E"),
            KeySignature::DMajorBMinor => ("D", "B"),
            KeySignature::AMajorFSharpMinor => ("A", "F♯"),
            KeySignature::EMajorCSharpMinor => ("E", "C♯"),
            KeySignature::BMajorGSharpMinor => ("B", "G♯"),
            KeySignature::FSharpMajorDSharpMinor => ("F♯", "D♯"),
            KeySignature::CSharpMajorASharpMinor => ("C♯", "A♯"),
        }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = self.tonics();
        write!(f, "{} major / {} minor", major, minor)
    }
}
