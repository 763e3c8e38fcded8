//! Decoded score: global header plus the note sequence

use super::markings::{KeySignatureInstance, MetronomeMarking, TimeSignature};
use super::note::Note;
use super::serde_helpers::serialize_tick_value;
use super::tick_value::TickValue;
use num_rational::Ratio;
use serde::Serialize;
use uuid::Uuid;

/// Global metadata of a VMF score
///
/// Every header gets a fresh random `id` when it is built. The id is not part
/// of equality, so decoding the same file twice gives equal headers.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreHeader {
    id: Uuid,
    name: String,
    #[serde(serialize_with = "serialize_tick_value")]
    tick_value: TickValue,
    number_of_parts: i32,
    number_of_voices: i32,
    time_signatures: Vec<TimeSignature>,
    key_signatures: Vec<KeySignatureInstance>,
    metronome_markings: Vec<MetronomeMarking>,
}

impl ScoreHeader {
    pub fn new(
        tick_value: TickValue,
        number_of_parts: i32,
        number_of_voices: i32,
        time_signatures: Vec<TimeSignature>,
        key_signatures: Vec<KeySignatureInstance>,
        metronome_markings: Vec<MetronomeMarking>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            tick_value,
            number_of_parts,
            number_of_voices,
            time_signatures,
            key_signatures,
            metronome_markings,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tick_value(&self) -> TickValue {
        self.tick_value
    }

    pub fn number_of_parts(&self) -> i32 {
        self.number_of_parts
    }

    pub fn number_of_voices(&self) -> i32 {
        self.number_of_voices
    }

    pub fn time_signatures(&self) -> &[TimeSignature] {
        &self.time_signatures
    }

    pub fn key_signatures(&self) -> &[KeySignatureInstance] {
        &self.key_signatures
    }

    pub fn metronome_markings(&self) -> &[MetronomeMarking] {
        &self.metronome_markings
    }
}

impl PartialEq for ScoreHeader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.tick_value == other.tick_value
            && self.number_of_parts == other.number_of_parts
            && self.number_of_voices == other.number_of_voices
            && self.time_signatures == other.time_signatures
            && self.key_signatures == other.key_signatures
            && self.metronome_markings == other.metronome_markings
    }
}

impl Eq for ScoreHeader {}

/// A decoded monophonic score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    header: ScoreHeader,
    notes: Vec<Note>,
}

impl Score {
    pub fn new(header: ScoreHeader, notes: Vec<Note>) -> Self {
        Self { header, notes }
    }

    pub fn header(&self) -> &ScoreHeader {
        &self.header
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Absolute attack tick of every note, paired with the note
    pub fn onsets(&self) -> impl Iterator<Item = (u64, &Note)> + '_ {
        self.notes.iter().scan(0u64, |tick, note| {
            *tick += u64::from(note.offset());
            Some((*tick, note))
        })
    }

    /// Tick at which the last note stops sounding
    pub fn total_ticks(&self) -> u64 {
        self.onsets()
            .last()
            .map(|(start, note)| start + u64::from(note.duration()))
            .unwrap_or(0)
    }

    /// Length of the melody in quarter notes, exactly
    ///
    /// `None` when the reduced result does not fit a 64-bit ratio.
    pub fn length_in_quarters(&self) -> Option<TickValue> {
        let ticks = i128::from(self.total_ticks());
        let tick_value = self.header.tick_value;
        // Widened so the product cannot overflow before reduction
        let exact = Ratio::<i128>::new(
            i128::from(*tick_value.numer()) * ticks,
            i128::from(*tick_value.denom()),
        );

        let numer = i64::try_from(*exact.numer()).ok().filter(|&n| n != i64::MIN)?;
        let denom = i64::try_from(*exact.denom()).ok()?;
        Some(TickValue::new(numer, denom))
    }
}
