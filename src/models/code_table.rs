//! Fixed lookup tables between VMF integer codes and symbolic values
//!
//! Every enumeration in the format (pitch class, dynamic, articulation,
//! key signature) is stored in the file as a small signed integer. Each
//! enumeration owns one `static` [`CodeTable`] built from its full list of
//! variants, so lookups never allocate and the tables can be shared by any
//! number of concurrent decodes.

use thiserror::Error;

/// Failure to map a VMF code onto a symbolic value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The code lies outside the table's legal interval
    #[error("{table} code {code} is out of range (expected {expected})")]
    OutOfRange {
        table: &'static str,
        code: i64,
        expected: &'static str,
    },

    /// The code is in range but no symbol is registered for it
    #[error("{table} code {code} is not registered")]
    NotFound { table: &'static str, code: i64 },

    /// A key signature cannot carry both sharps and flats
    #[error("key signature cannot have both sharps ({sharps}) and flats ({flats})")]
    ConflictingAccidentals { sharps: u8, flats: u8 },
}

/// A closed code ↔ symbol mapping with range validation
pub struct CodeTable<T: 'static> {
    name: &'static str,
    expected: &'static str,
    in_range: fn(i64) -> bool,
    entries: &'static [(i8, T)],
}

impl<T: Copy + PartialEq + 'static> CodeTable<T> {
    pub const fn new(
        name: &'static str,
        expected: &'static str,
        in_range: fn(i64) -> bool,
        entries: &'static [(i8, T)],
    ) -> Self {
        Self {
            name,
            expected,
            in_range,
            entries,
        }
    }

    /// Resolve a code to its symbol
    pub fn lookup(&self, code: i64) -> Result<T, CodeError> {
        if !(self.in_range)(code) {
            return Err(CodeError::OutOfRange {
                table: self.name,
                code,
                expected: self.expected,
            });
        }

        self.entries
            .iter()
            .find(|(c, _)| i64::from(*c) == code)
            .map(|(_, symbol)| *symbol)
            .ok_or(CodeError::NotFound {
                table: self.name,
                code,
            })
    }

    /// Reverse lookup, symbol to code
    pub fn code_of(&self, symbol: T) -> Option<i8> {
        self.entries
            .iter()
            .find(|(_, s)| *s == symbol)
            .map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
