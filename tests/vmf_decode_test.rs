// Test decoding of the VMF fixture files through the public API

use std::io::Write;
use std::path::PathBuf;

use vmf_decoder::models::{
    Articulation, Dynamic, KeySignature, KeySignatureInstance, MetronomeMarking, Note, PitchClass,
    TickValue, TimeSignature,
};
use vmf_decoder::{decode_file, decode_str, DecodeError, ErrorKind, Score};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.vmf", name))
}

fn decode_fixture(name: &str) -> Result<Score, DecodeError> {
    decode_file(fixture(name))
}

fn mp_quarter(pitch_class: PitchClass, offset: u32) -> Note {
    Note::new(Dynamic::Mp, Articulation::None, pitch_class, 4, offset)
}

#[test]
fn test_simple_header() {
    let score = decode_fixture("simple").expect("simple fixture should decode");
    let header = score.header();

    assert_eq!(header.tick_value(), TickValue::from_integer(1));
    assert_eq!(header.number_of_parts(), 1);
    assert_eq!(header.number_of_voices(), 1);
    assert_eq!(header.time_signatures(), &[TimeSignature::new(0, 2, 4)]);
    assert_eq!(
        header.key_signatures(),
        &[KeySignatureInstance::new(0, KeySignature::CMajorAMinor)]
    );
    assert_eq!(header.metronome_markings(), &[MetronomeMarking::new(0, 120)]);
}

#[test]
fn test_simple_notes() {
    let score = decode_fixture("simple").unwrap();

    let expected = vec![
        mp_quarter(PitchClass::C, 0),
        mp_quarter(PitchClass::E, 1),
        mp_quarter(PitchClass::G, 1),
        mp_quarter(PitchClass::E, 1),
    ];
    assert_eq!(score.notes(), expected.as_slice());
    assert_eq!(score.total_ticks(), 4);
}

#[test]
fn test_sustained_notes() {
    let score = decode_fixture("sustained").unwrap();

    let pitches: Vec<PitchClass> = score.notes().iter().map(|n| n.pitch_class()).collect();
    assert_eq!(pitches, vec![PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::E]);

    let offsets: Vec<u32> = score.notes().iter().map(|n| n.offset()).collect();
    assert_eq!(offsets, vec![0, 2, 2, 2]);
    assert!(score.notes().iter().all(|n| n.duration() == 2));
    assert_eq!(score.total_ticks(), 8);
}

#[test]
fn test_rest_counts_toward_offset() {
    let score = decode_fixture("rest").unwrap();

    let expected = vec![
        mp_quarter(PitchClass::C, 0),
        mp_quarter(PitchClass::G, 2),
        mp_quarter(PitchClass::E, 1),
    ];
    assert_eq!(score.notes(), expected.as_slice());

    let onsets: Vec<u64> = score.onsets().map(|(tick, _)| tick).collect();
    assert_eq!(onsets, vec![0, 2, 3]);
}

#[test]
fn test_no_key_signature_defaults_to_c_major() {
    let score = decode_fixture("noKeySignature").unwrap();
    assert_eq!(
        score.header().key_signatures(),
        &[KeySignatureInstance::new(0, KeySignature::CMajorAMinor)]
    );
    assert_eq!(score.notes().len(), 4);
}

#[test]
fn test_no_tempo_defaults_to_100_bpm() {
    let score = decode_fixture("noTempo").unwrap();
    assert_eq!(score.header().metronome_markings(), &[MetronomeMarking::new(0, 100)]);
}

#[test]
fn test_no_time_signatures_fails() {
    let err = decode_fixture("noTimeSignatures").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingTimeSignature);
}

#[test]
fn test_missing_header_fails() {
    let err = decode_fixture("missingHeader").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedHeader);
}

#[test]
fn test_missing_header_value_fails() {
    let err = decode_fixture("missingHeaderValue").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedHeader);
    assert!(err.to_string().contains("header.number_of_voices"));
}

#[test]
fn test_not_json_fails() {
    let err = decode_fixture("notJson").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Json);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = decode_fixture("doesNotExist").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_decode_file_matches_decode_str() {
    let source = std::fs::read_to_string(fixture("rest")).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    let from_file = decode_file(file.path()).unwrap();
    let from_str = decode_str(&source).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn test_each_decode_gets_a_fresh_id() {
    let first = decode_fixture("simple").unwrap();
    let second = decode_fixture("simple").unwrap();
    assert_ne!(first.header().id(), second.header().id());
    assert_eq!(first, second);
}
