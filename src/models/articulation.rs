//! Articulation attached to a note
//!
//! Codes 1 and 2 are unassigned and rejected like any other out-of-range code.

use super::code_table::{CodeError, CodeTable};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Articulation {
    #[default]
    None = 0,
    Staccato = 3,
    Staccatissimo = 4,
    StrongAccent = 5,
    Accent = 6,
    Tenuto = 7,
}

fn in_range(code: i64) -> bool {
    code == 0 || (3..=7).contains(&code)
}

pub static ARTICULATIONS: CodeTable<Articulation> = CodeTable::new(
    "articulation",
    "0 or 3 to 7 inclusive",
    in_range,
    &[
        (0, Articulation::None),
        (3, Articulation::Staccato),
        (4, Articulation::Staccatissimo),
        (5, Articulation::StrongAccent),
        (6, Articulation::Accent),
        (7, Articulation::Tenuto),
    ],
);

impl Articulation {
    pub const ALL: [Articulation; 6] = [
        Articulation::None,
        Articulation::Staccato,
        Articulation::Staccatissimo,
        Articulation::StrongAccent,
        Articulation::Accent,
        Articulation::Tenuto,
    ];

    pub fn from_code(code: i64) -> Result<Self, CodeError> {
        ARTICULATIONS.lookup(code)
    }

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Articulation::None => "none",
            Articulation::Staccato => "staccato",
            Articulation::Staccatissimo => "staccatissimo",
            Articulation::StrongAccent => "strong accent",
            Articulation::Accent => "accent",
            Articulation::Tenuto => "tenuto",
        }
    }
}

impl fmt::Display for Articulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
