//! Dynamic level of a note, pppp through ffff
//!
//! Codes are symmetric around zero: negative values are the soft dynamics,
//! positive values the loud ones. There is no zero level, MP and MF sit at
//! -1 and +1.

use super::code_table::{CodeError, CodeTable};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Dynamic {
    Pppp = -5,
    Ppp = -4,
    Pp = -3,
    P = -2,
    Mp = -1,
    Mf = 1,
    F = 2,
    Ff = 3,
    Fff = 4,
    Ffff = 5,
}

fn in_range(code: i64) -> bool {
    code != 0 && (-5..=5).contains(&code)
}

pub static DYNAMICS: CodeTable<Dynamic> = CodeTable::new(
    "dynamic",
    "-5 to 5, excluding 0",
    in_range,
    &[
        (-5, Dynamic::Pppp),
        (-4, Dynamic::Ppp),
        (-3, Dynamic::Pp),
        (-2, Dynamic::P),
        (-1, Dynamic::Mp),
        (1, Dynamic::Mf),
        (2, Dynamic::F),
        (3, Dynamic::Ff),
        (4, Dynamic::Fff),
        (5, Dynamic::Ffff),
    ],
);

impl Dynamic {
    pub const ALL: [Dynamic; 10] = [
        Dynamic::Pppp,
        Dynamic::Ppp,
        Dynamic::Pp,
        Dynamic::P,
        Dynamic::Mp,
        Dynamic::Mf,
        Dynamic::F,
        Dynamic::Ff,
        Dynamic::Fff,
        Dynamic::Ffff,
    ];

    pub fn from_code(code: i64) -> Result<Self, CodeError> {
        DYNAMICS.lookup(code)
    }

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn is_soft(self) -> bool {
        self.code() < 0
    }

    /// Conventional marking as printed in a score
    pub fn as_str(&self) -> &'static str {
        match self {
            Dynamic::Pppp => "pppp",
            Dynamic::Ppp => "ppp",
            Dynamic::Pp => "pp",
            Dynamic::P => "p",
            Dynamic::Mp => "mp",
            Dynamic::Mf => "mf",
            Dynamic::F => "f",
            Dynamic::Ff => "ff",
            Dynamic::Fff => "fff",
            Dynamic::Ffff => "ffff",
        }
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
