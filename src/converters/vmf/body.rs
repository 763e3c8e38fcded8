//! Tick-stream decoding
//!
//! The VMF body is a dense timeline: one entry per tick, each entry holding
//! one `[event, dynamic, articulation, pitch class, octave]` tuple per part.
//! [`TickStream`] folds that timeline into discrete notes. Only part 0 is
//! read.

use super::access::{AccessError, JsonArray};
use super::defaults::{EVENT_ATTACK, EVENT_REST, EVENT_SUSTAIN};
use super::settings::{DecodeSettings, EventKindPolicy};
use super::{DecodeError, Result};
use crate::models::{Articulation, Dynamic, Note, PitchClass};

const SLOT_EVENT: usize = 0;
const SLOT_DYNAMIC: usize = 1;
const SLOT_ARTICULATION: usize = 2;
const SLOT_PITCH_CLASS: usize = 3;
const SLOT_OCTAVE: usize = 4;

/// Note-building state machine
///
/// `offset` counts the ticks since the last attack. The note being built is
/// held outside the finished list so it is the only one that can still grow.
#[derive(Debug)]
pub struct TickStream {
    policy: EventKindPolicy,
    current: Option<Note>,
    offset: u32,
    notes: Vec<Note>,
}

impl TickStream {
    pub fn new(policy: EventKindPolicy) -> Self {
        Self {
            policy,
            current: None,
            offset: 0,
            notes: Vec::new(),
        }
    }

    /// Advance by one tick
    ///
    /// `attack` builds the new note when this tick starts one; it receives the
    /// offset the note should carry.
    pub fn step<F>(&mut self, tick: usize, kind: i64, attack: F) -> Result<()>
    where
        F: FnOnce(u32) -> Result<Note>,
    {
        let known = matches!(kind, EVENT_REST | EVENT_ATTACK | EVENT_SUSTAIN);
        if !known && self.policy == EventKindPolicy::Reject {
            return Err(DecodeError::UnknownEventKind { tick, kind });
        }

        // The first tick always attacks, whatever its event kind says
        if kind == EVENT_ATTACK || self.current.is_none() {
            let note = attack(self.offset)?;
            if let Some(finished) = self.current.replace(note) {
                self.notes.push(finished);
            }
            self.offset = 1;
            return Ok(());
        }

        match kind {
            EVENT_SUSTAIN => {
                if let Some(note) = self.current.as_mut() {
                    note.extend_duration();
                }
                self.offset = self.offset.saturating_add(1);
            }
            EVENT_REST => {
                self.offset = self.offset.saturating_add(1);
            }
            _ => {
                log::warn!("Ignoring unknown VMF event kind {} at tick {}", kind, tick);
            }
        }
        Ok(())
    }

    /// Notes finished so far, excluding the one still being built
    #[cfg(test)]
    fn finished(&self) -> &[Note] {
        &self.notes
    }

    /// Close the stream; trailing rest ticks are dropped
    pub fn finish(mut self) -> Vec<Note> {
        if let Some(last) = self.current.take() {
            self.notes.push(last);
        }
        self.notes
    }
}

/// Decode the array stored under `"body"` into notes
pub fn decode_body(body: &JsonArray<'_>, settings: &DecodeSettings) -> Result<Vec<Note>> {
    let mut stream = TickStream::new(settings.event_kind_policy);

    for tick in 0..body.len() {
        let malformed = |source: AccessError| DecodeError::MalformedBody { tick, source };

        let part = body
            .get_array(tick)
            .and_then(|entry| entry.get_array(0))
            .map_err(malformed)?;
        let kind = part.get_int(SLOT_EVENT).map_err(malformed)?;

        stream.step(tick, kind, |offset| attack_note(&part, tick, offset))?;
    }

    let notes = stream.finish();
    log::debug!("Decoded {} note(s) from {} tick(s)", notes.len(), body.len());
    Ok(notes)
}

fn attack_note(part: &JsonArray<'_>, tick: usize, offset: u32) -> Result<Note> {
    let malformed = |source: AccessError| DecodeError::MalformedBody { tick, source };

    let dynamic = Dynamic::from_code(part.get_int(SLOT_DYNAMIC).map_err(malformed)?)?;
    let articulation =
        Articulation::from_code(part.get_int(SLOT_ARTICULATION).map_err(malformed)?)?;
    let pitch_class = PitchClass::from_code(part.get_int(SLOT_PITCH_CLASS).map_err(malformed)?)?;
    let octave = part.get_i32(SLOT_OCTAVE).map_err(malformed)?;

    Ok(Note::new(dynamic, articulation, pitch_class, octave, offset))
}
