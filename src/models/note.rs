//! A single decoded note

use super::articulation::Articulation;
use super::code_table::CodeError;
use super::dynamic::Dynamic;
use super::pitch_class::PitchClass;
use serde::Serialize;

/// A note in a monophonic VMF melody
///
/// `offset` is the number of ticks between the previous note's attack and
/// this one's (or between the start of the piece and the first attack).
/// `duration` is always at least one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    dynamic: Dynamic,
    articulation: Articulation,
    pitch_class: PitchClass,
    octave: i32,
    duration: u32,
    offset: u32,
}

impl Note {
    pub fn new(
        dynamic: Dynamic,
        articulation: Articulation,
        pitch_class: PitchClass,
        octave: i32,
        offset: u32,
    ) -> Self {
        Self {
            dynamic,
            articulation,
            pitch_class,
            octave,
            duration: 1,
            offset,
        }
    }

    /// Build a note straight from its VMF codes
    pub fn from_codes(
        dynamic: i64,
        articulation: i64,
        pitch_class: i64,
        octave: i32,
        offset: u32,
    ) -> Result<Self, CodeError> {
        Ok(Self::new(
            Dynamic::from_code(dynamic)?,
            Articulation::from_code(articulation)?,
            PitchClass::from_code(pitch_class)?,
            octave,
            offset,
        ))
    }

    /// Same note with an explicit duration (clamped to one tick minimum)
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration.max(1);
        self
    }

    pub fn dynamic(&self) -> Dynamic {
        self.dynamic
    }

    pub fn articulation(&self) -> Articulation {
        self.articulation
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Sustain for one more tick. Only the tick-stream decoder calls this,
    /// and only while the note is still the one being built.
    pub(crate) fn extend_duration(&mut self) {
        self.duration = self.duration.saturating_add(1);
    }
}
