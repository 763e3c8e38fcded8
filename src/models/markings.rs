//! Measure-anchored header markings: time signatures, key signatures, tempi

use super::key_signature::KeySignature;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSignatureError {
    #[error("time signature \"{0}\" is not of the form N/M")]
    MissingSlash(String),
    #[error("time signature \"{0}\" has a non-integer part")]
    NotAnInteger(String),
}

/// Time signature starting at `measure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSignature {
    measure: u32,
    upper: u32,
    lower: u32,
}

impl TimeSignature {
    pub fn new(measure: u32, upper: u32, lower: u32) -> Self {
        Self {
            measure,
            upper,
            lower,
        }
    }

    /// Parse the `"N/M"` form used in VMF headers, splitting on the first `/`
    pub fn parse(measure: u32, ratio: &str) -> Result<Self, TimeSignatureError> {
        let (upper, lower) = ratio
            .split_once('/')
            .ok_or_else(|| TimeSignatureError::MissingSlash(ratio.to_string()))?;
        let parse = |s: &str| {
            s.trim()
                .parse::<u32>()
                .map_err(|_| TimeSignatureError::NotAnInteger(ratio.to_string()))
        };
        Ok(Self::new(measure, parse(upper)?, parse(lower)?))
    }

    pub fn measure(&self) -> u32 {
        self.measure
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.upper, self.lower)
    }
}

/// Key signature in effect from `measure` onwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeySignatureInstance {
    measure: u32,
    key_signature: KeySignature,
}

impl KeySignatureInstance {
    pub fn new(measure: u32, key_signature: KeySignature) -> Self {
        Self {
            measure,
            key_signature,
        }
    }

    pub fn measure(&self) -> u32 {
        self.measure
    }

    pub fn key_signature(&self) -> KeySignature {
        self.key_signature
    }
}

/// Quarter-note tempo starting at `measure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MetronomeMarking {
    measure: u32,
    quarter_bpm: i32,
}

impl MetronomeMarking {
    pub fn new(measure: u32, quarter_bpm: i32) -> Self {
        Self {
            measure,
            quarter_bpm,
        }
    }

    pub fn measure(&self) -> u32 {
        self.measure
    }

    pub fn quarter_bpm(&self) -> i32 {
        self.quarter_bpm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_signature() {
        let ts = TimeSignature::parse(0, "2/4").unwrap();
        assert_eq!(ts, TimeSignature::new(0, 2, 4));
        assert_eq!(ts.to_string(), "2/4");

        let ts = TimeSignature::parse(12, "6/8").unwrap();
        assert_eq!(ts.measure(), 12);
        assert_eq!(ts.upper(), 6);
        assert_eq!(ts.lower(), 8);
    }

    #[test]
    fn test_parse_time_signature_errors() {
        assert_eq!(
            TimeSignature::parse(0, "44"),
            Err(TimeSignatureError::MissingSlash("44".to_string()))
        );
        assert_eq!(
            TimeSignature::parse(0, "3/x"),
            Err(TimeSignatureError::NotAnInteger("3/x".to_string()))
        );
        // Only the first slash splits
        assert!(TimeSignature::parse(0, "3/4/4").is_err());
        assert!(TimeSignature::parse(0, "-3/4").is_err());
    }

    #[test]
    fn test_time_signature_equality() {
        assert_ne!(TimeSignature::new(0, 3, 4), TimeSignature::new(1, 3, 4));
        assert_ne!(TimeSignature::new(0, 3, 4), TimeSignature::new(0, 3, 8));
    }

    #[test]
    fn test_key_signature_instance() {
        let ks = KeySignatureInstance::new(4, KeySignature::DMajorBMinor);
        assert_eq!(ks.measure(), 4);
        assert_eq!(ks.key_signature().sharps(), 2);
        assert_ne!(ks, KeySignatureInstance::new(4, KeySignature::GMajorEMinor));
    }

    #[test]
    fn test_metronome_marking() {
        let mm = MetronomeMarking::new(0, 120);
        assert_eq!(mm.quarter_bpm(), 120);
        assert_eq!(mm, MetronomeMarking::new(0, 120));
        assert_ne!(mm, MetronomeMarking::new(1, 120));
    }
}
