//! VMF Decoder WASM Module
//!
//! Decodes Vector Music Format documents (a JSON tick timeline plus a score
//! header) into a monophonic [`Score`]. Usable natively as an `rlib` and from
//! JavaScript through the `api` bindings.

pub mod models;
pub mod converters;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use converters::vmf::{
    decode, decode_file, decode_str, decode_with_settings, DecodeError, DecodeSettings,
    ErrorKind, EventKindPolicy,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger may already be installed by the host page
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("VMF decoder WASM module initialized");
}
