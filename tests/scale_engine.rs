//! Integration tests for the scale engine: scale notes, relative modes,
//! labels and fretboard placement.

use fretlib::tables::SCALES;
use fretlib::{
    build_diagram, compute_scale, degree_and_chord_labels, find_tuning, layout, DisplayMode,
    FretError, FretboardRequest, Instrument, Notation, PitchClass, RelativeMode,
};
use pretty_assertions::assert_eq;

fn pcs(indices: &[i64]) -> Vec<PitchClass> {
    indices.iter().map(|&i| PitchClass::new(i).unwrap()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// computeScale
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn scale_length_and_root_hold_for_every_scale_and_root() {
    for scale in SCALES {
        for root in PitchClass::all() {
            let result = compute_scale(root, scale.key, RelativeMode::None).unwrap();
            assert_eq!(result.notes.len(), scale.intervals.len(), "{}", scale.key);
            assert_eq!(result.notes[0], root, "{} on {root}", scale.key);
            assert!(result.notes.iter().all(|pc| pc.index() < 12));
        }
    }
}

#[test]
fn a_minor_pentatonic_notes() {
    let result = compute_scale(PitchClass::A, "minorPent", RelativeMode::None).unwrap();
    assert_eq!(result.notes, pcs(&[9, 0, 2, 4, 7]));
}

#[test]
fn relative_minor_is_the_same_shape_on_the_shifted_root() {
    for root in PitchClass::all() {
        let shifted = compute_scale(root, "ionian", RelativeMode::RelativeMinor).unwrap();
        let direct = compute_scale(root.transpose(9), "ionian", RelativeMode::None).unwrap();
        assert_eq!(shifted, direct);
    }
}

#[test]
fn relative_major_moves_up_three_semitones() {
    let result = compute_scale(PitchClass::C, "aeolian", RelativeMode::RelativeMajor).unwrap();
    assert_eq!(result.root, PitchClass::D_SHARP);
    assert_eq!(result.notes[0], PitchClass::D_SHARP);
}

#[test]
fn unknown_scale_key_is_reported() {
    let err = compute_scale(PitchClass::C, "hungarianMinor", RelativeMode::None).unwrap_err();
    assert!(matches!(err, FretError::InvalidScaleKey(ref k) if k == "hungarianMinor"));
    assert_eq!(err.to_string(), r#"unknown scale key "hungarianMinor""#);
}

// ═══════════════════════════════════════════════════════════════════════
// degreeAndChordLabels
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn chromatic_scale_only_labels_seven_degrees() {
    let labels = degree_and_chord_labels(PitchClass::C, "chromatic").unwrap();
    assert_eq!(labels.len(), 12);

    let with_degree = PitchClass::all().filter(|&pc| labels.degree(pc).is_some()).count();
    assert_eq!(with_degree, 7);

    // Positions 8-12 still carry a chord, using the default major quality
    // unless their offset is in the table.
    assert_eq!(labels.degree(PitchClass::G), None);
    assert_eq!(labels.chord(PitchClass::G), Some("G"));
    assert_eq!(labels.chord(PitchClass::A), Some("Am"));
    assert_eq!(labels.chord(PitchClass::G_SHARP), Some("G#"));
    assert_eq!(labels.chord(PitchClass::B), Some("Bdim"));
}

#[test]
fn labels_use_offset_not_position() {
    // Minor pentatonic offsets 0,3,5,7,10: offset 3 and 10 fall back to major.
    let labels = degree_and_chord_labels(PitchClass::A, "minorPent").unwrap();
    assert_eq!(labels.degree(PitchClass::C), Some("II"));
    assert_eq!(labels.chord(PitchClass::C), Some("C"));
    assert_eq!(labels.chord(PitchClass::D), Some("D"));
    assert_eq!(labels.chord(PitchClass::G), Some("G"));
}

// ═══════════════════════════════════════════════════════════════════════
// layout
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn a_minor_pentatonic_on_standard_guitar() {
    let tuning = find_tuning(Instrument::Guitar, "standard").unwrap();
    let scale = compute_scale(PitchClass::A, "minorPent", RelativeMode::None).unwrap();
    let labels = degree_and_chord_labels(PitchClass::A, "minorPent").unwrap();
    let board = layout(tuning.open_strings, 12, &scale, &labels, DisplayMode::Plain, Notation::Standard)
        .unwrap();

    // Rows are highest string first: E B G D A E.
    let opens: Vec<PitchClass> = board.strings.iter().map(|s| s.open).collect();
    assert_eq!(opens, pcs(&[4, 11, 7, 2, 9, 4]));

    let a_string = board.string_by_tuning_index(1).unwrap();
    assert_eq!(a_string.open, PitchClass::A);
    let open_a = &a_string.cells[0];
    assert!(open_a.in_scale);
    assert!(open_a.is_root);
    assert_eq!(open_a.text.as_deref(), Some("A"));

    let low_e = board.string_by_tuning_index(0).unwrap();
    let fifth = &low_e.cells[5];
    assert_eq!(fifth.pitch_class, PitchClass::A);
    assert!(fifth.is_root);

    // Open low E is in A minor pentatonic, F at fret 1 is not.
    assert!(low_e.cells[0].in_scale);
    assert!(!low_e.cells[0].is_root);
    assert!(!low_e.cells[1].in_scale);
    assert_eq!(low_e.cells[1].text, None);
}

#[test]
fn relative_major_highlights_the_shifted_root() {
    let request = FretboardRequest::from_json(
        r#"{"root": "C", "scale": "aeolian", "relative": "relativeMajor"}"#,
    )
    .unwrap();
    let diagram = build_diagram(&request).unwrap();

    assert!(diagram.board.root_cells().count() > 0);
    assert!(diagram.board.root_cells().all(|c| c.pitch_class == PitchClass::D_SHARP));
    assert!(diagram
        .board
        .strings
        .iter()
        .flat_map(|s| s.cells.iter())
        .filter(|c| c.pitch_class == PitchClass::C)
        .all(|c| !c.is_root));
}

#[test]
fn layout_is_repeatable() {
    let request = FretboardRequest::from_json(
        r#"{"instrument": "bass", "tuning": "5string", "root": "E", "scale": "blues", "showChords": true}"#,
    )
    .unwrap();
    let first = build_diagram(&request).unwrap();
    let second = build_diagram(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn notation_only_changes_text() {
    let standard = build_diagram(
        &FretboardRequest::from_json(r#"{"root": "C#", "scale": "dorian"}"#).unwrap(),
    )
    .unwrap();
    let latin = build_diagram(
        &FretboardRequest::from_json(r#"{"root": "C#", "scale": "dorian", "notation": "latin"}"#)
            .unwrap(),
    )
    .unwrap();

    for (s_row, l_row) in standard.board.strings.iter().zip(&latin.board.strings) {
        for (s, l) in s_row.cells.iter().zip(&l_row.cells) {
            assert_eq!(s.in_scale, l.in_scale);
            assert_eq!(s.is_root, l.is_root);
            if s.pitch_class == PitchClass::C_SHARP {
                assert_eq!(s.text.as_deref(), Some("C#"));
                assert_eq!(l.text.as_deref(), Some("Do#"));
            }
        }
    }
}

#[test]
fn full_profile_lays_out_25_frets() {
    let request = FretboardRequest::from_json(r#"{"instrument": "bass", "profile": "full"}"#).unwrap();
    let diagram = build_diagram(&request).unwrap();
    assert_eq!(diagram.board.fret_count, 25);
    assert_eq!(diagram.board.string_count(), 4);
    assert!(diagram.board.strings.iter().all(|s| s.cells.len() == 25));
    // Fret 12 repeats the open string.
    for string in &diagram.board.strings {
        assert_eq!(string.cells[12].pitch_class, string.open);
        assert_eq!(string.cells[24].pitch_class, string.open);
    }
}

#[test]
fn degree_display_on_the_board() {
    let request = FretboardRequest::from_json(
        r#"{"root": "G", "scale": "mixolydian", "showDegrees": true, "showChords": true}"#,
    )
    .unwrap();
    let diagram = build_diagram(&request).unwrap();
    assert_eq!(diagram.display, DisplayMode::Degree);

    // G string (tuning index 3), open: the root.
    let g_string = diagram.board.string_by_tuning_index(3).unwrap();
    assert_eq!(g_string.cells[0].text.as_deref(), Some("I"));
    // F natural, the flat seventh, two frets below the octave.
    assert_eq!(g_string.cells[10].text.as_deref(), Some("VII"));
}

#[test]
fn chord_list_uses_the_literal_root() {
    let request = FretboardRequest::from_json(
        r#"{"root": "C", "scale": "ionian", "relative": "minor", "showChords": true}"#,
    )
    .unwrap();
    let diagram = build_diagram(&request).unwrap();
    let list = diagram.chord_list.expect("compact profile with chords shows the list");
    assert_eq!(list[0].to_string(), "I: C");
    assert_eq!(list[5].to_string(), "VI: Am");
    assert_eq!(diagram.scale.root, PitchClass::A);
}
