//! VMF (Vector Music Format) → score decoder
//!
//! A VMF document is a JSON object with a `"header"` describing the score
//! (tick value, part/voice counts, time signature, key signature and tempo
//! maps) and a `"body"` holding one entry per tick. Decoding runs the header
//! decoder, then the tick-stream decoder, and either returns a complete
//! [`Score`] or fails as a whole.

pub mod access;
mod body;
pub mod defaults;
mod header;
pub mod settings;


pub use access::AccessError;
pub use body::TickStream;
pub use settings::{DecodeSettings, EventKindPolicy};

use crate::models::{CodeError, Score};
use access::JsonObject;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed VMF header: {0}")]
    MalformedHeader(#[from] AccessError),

    #[error("a minimum of one time signature is required")]
    MissingTimeSignature,

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("malformed VMF body at tick {tick}: {source}")]
    MalformedBody {
        tick: usize,
        #[source]
        source: AccessError,
    },

    #[error("malformed VMF body: {0}")]
    InvalidBody(#[source] AccessError),

    #[error("unknown event kind {kind} at tick {tick}")]
    UnknownEventKind { tick: usize, kind: i64 },

    #[error("VMF document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read VMF file: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat failure classification, one entry per caller-visible error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedHeader,
    MissingTimeSignature,
    OutOfRange,
    NotFound,
    MalformedBody,
    UnknownEventKind,
    Json,
    Io,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::MalformedHeader(_) => ErrorKind::MalformedHeader,
            DecodeError::MissingTimeSignature => ErrorKind::MissingTimeSignature,
            DecodeError::Code(CodeError::NotFound { .. }) => ErrorKind::NotFound,
            DecodeError::Code(_) => ErrorKind::OutOfRange,
            DecodeError::MalformedBody { .. } | DecodeError::InvalidBody(_) => {
                ErrorKind::MalformedBody
            }
            DecodeError::UnknownEventKind { .. } => ErrorKind::UnknownEventKind,
            DecodeError::Json(_) => ErrorKind::Json,
            DecodeError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decode a parsed VMF document with default settings
pub fn decode(document: &Value) -> Result<Score> {
    decode_with_settings(document, &DecodeSettings::default())
}

pub fn decode_with_settings(document: &Value, settings: &DecodeSettings) -> Result<Score> {
    let root = JsonObject::root(document)?;

    let header = header::decode_header(&root.get_object("header")?, settings)?;

    let ticks = root.get_array("body").map_err(DecodeError::InvalidBody)?;
    let notes = body::decode_body(&ticks, settings)?;

    log::info!(
        "Decoded VMF score: {} note(s), tick value {}",
        notes.len(),
        header.tick_value()
    );

    Ok(Score::new(header, notes))
}

/// Parse VMF source text and decode it
pub fn decode_str(source: &str) -> Result<Score> {
    let document: Value = serde_json::from_str(source)?;
    decode(&document)
}

/// Read a VMF file from disk and decode it
pub fn decode_file(path: impl AsRef<Path>) -> Result<Score> {
    let path = path.as_ref();
    log::debug!("Reading VMF file {}", path.display());
    let source = std::fs::read_to_string(path)?;
    decode_str(&source)
}
