//! Format converters
//!
//! This module contains decoders from serialized music formats into the
//! score model.

pub mod vmf;

// Re-export for convenience
pub use vmf::{
    decode as decode_vmf,
    decode_file as decode_vmf_file,
    decode_str as decode_vmf_str,
    DecodeError as VmfDecodeError,
    DecodeSettings as VmfDecodeSettings,
};
