//! Models module for the VMF decoder
//!
//! This module contains the code tables and the score records
//! produced by decoding a VMF document.

pub mod articulation;
pub mod code_table;
pub mod dynamic;
pub mod key_signature;
pub mod markings;
pub mod note;
pub mod pitch_class;
pub mod score;
pub mod serde_helpers;
pub mod tick_value;

// Re-export commonly used types
pub use articulation::Articulation;
pub use code_table::{CodeError, CodeTable};
pub use dynamic::Dynamic;
pub use key_signature::KeySignature;
pub use markings::{KeySignatureInstance, MetronomeMarking, TimeSignature, TimeSignatureError};
pub use note::Note;
pub use pitch_class::PitchClass;
pub use score::{Score, ScoreHeader};
pub use tick_value::{parse_tick_value, TickValue, TickValueError};
