//! VMF Decoder WASM API
//!
//! This module provides the JavaScript-facing API for the decoder.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and error conversion
//! - `decode`: Decoding entry points (`decodeVmf`, `decodeVmfToJson`, ...)

pub mod helpers;
pub mod decode;

pub use decode::{decode_vmf, decode_vmf_to_json, decode_vmf_with_settings, score_to_json};
