//! Scale engine: scale notes, degree/chord labels and fretboard placement.
//!
//! All functions are pure. A redraw calls them again from scratch; nothing
//! is cached between calls.

use std::collections::BTreeMap;

use crate::error::{FretError, Result};
use crate::model::*;
use crate::tables::{find_scale, DEGREE_NAMES};

/// Highest fret count a board may be laid out with.
pub const MAX_FRET_COUNT: usize = 25;

/// Boards need at least the open-string column and at most `MAX_FRET_COUNT`.
pub fn validate_fret_count(fret_count: usize) -> Result<()> {
    if (1..=MAX_FRET_COUNT).contains(&fret_count) {
        Ok(())
    } else {
        Err(FretError::InvalidFretCount(fret_count))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Scale notes
// ═══════════════════════════════════════════════════════════════════════

/// Root actually used to build the scale once the relative mode is applied.
pub fn effective_root(root: PitchClass, relative: RelativeMode) -> PitchClass {
    root.transpose(relative.offset())
}

/// Apply `scale`'s intervals to the effective root, keeping interval order.
pub fn scale_notes(root: PitchClass, scale: &ScaleDefinition, relative: RelativeMode) -> ScaleResult {
    let root = effective_root(root, relative);
    let notes = scale
        .intervals
        .iter()
        .map(|&offset| root.transpose(offset))
        .collect();
    ScaleResult { root, notes }
}

/// Look up `scale_key` and build its notes. Unknown keys are an error.
pub fn compute_scale(root: PitchClass, scale_key: &str, relative: RelativeMode) -> Result<ScaleResult> {
    let scale = find_scale(scale_key)?;
    Ok(scale_notes(root, scale, relative))
}

// ═══════════════════════════════════════════════════════════════════════
// Degrees and chords
// ═══════════════════════════════════════════════════════════════════════

/// Triad quality for a semitone offset, read off the major-scale
/// harmonization. Applied as-is to every scale type.
pub fn chord_quality(offset: u8) -> ChordQuality {
    match offset {
        0 | 5 | 7 => ChordQuality::Major,
        2 | 4 | 9 => ChordQuality::Minor,
        11 => ChordQuality::Diminished,
        _ => ChordQuality::Major,
    }
}

fn note_label(root: PitchClass, position: usize, offset: u8) -> NoteLabel {
    let pitch_class = root.transpose(offset);
    let quality = chord_quality(offset);
    NoteLabel {
        pitch_class,
        degree: DEGREE_NAMES.get(position).map(|d| d.to_string()),
        quality,
        chord: format!("{}{}", pitch_class.name(Notation::Standard), quality.suffix()),
    }
}

/// Degree and chord labels for each note of `scale` built on the literal `root`.
pub fn scale_labels(root: PitchClass, scale: &ScaleDefinition) -> ScaleLabels {
    let mut labels = BTreeMap::new();
    for (position, &offset) in scale.intervals.iter().enumerate() {
        let label = note_label(root, position, offset);
        labels.insert(label.pitch_class, label);
    }
    ScaleLabels { labels }
}

pub fn degree_and_chord_labels(root: PitchClass, scale_key: &str) -> Result<ScaleLabels> {
    let scale = find_scale(scale_key)?;
    Ok(scale_labels(root, scale))
}

/// Entries for the chords-per-degree panel, in interval order.
pub fn chord_list(root: PitchClass, scale: &ScaleDefinition) -> Vec<ChordEntry> {
    scale
        .intervals
        .iter()
        .enumerate()
        .map(|(position, &offset)| {
            let label = note_label(root, position, offset);
            ChordEntry { degree: label.degree, chord: label.chord }
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Fretboard layout
// ═══════════════════════════════════════════════════════════════════════

fn cell_text(
    pc: PitchClass,
    labels: &ScaleLabels,
    display: DisplayMode,
    notation: Notation,
) -> String {
    if display == DisplayMode::Degree {
        if let Some(degree) = labels.degree(pc) {
            return degree.to_string();
        }
    }
    if display == DisplayMode::Chord {
        if let Some(chord) = labels.chord(pc) {
            return chord.to_string();
        }
    }
    pc.name(notation).to_string()
}

/// Project `scale` onto a tuning (open strings, lowest first).
///
/// Rows come out highest string first, the way a diagram is drawn. Each row
/// has `fret_count` cells starting at the open string. Root cells are those
/// matching the scale's effective root.
pub fn layout(
    tuning: &[PitchClass],
    fret_count: usize,
    scale: &ScaleResult,
    labels: &ScaleLabels,
    display: DisplayMode,
    notation: Notation,
) -> Result<Fretboard> {
    validate_fret_count(fret_count)?;

    let strings = tuning
        .iter()
        .enumerate()
        .rev()
        .map(|(tuning_index, &open)| {
            let cells = (0..fret_count)
                .map(|fret| {
                    let pitch_class = open.transpose((fret % 12) as u8);
                    let in_scale = scale.contains(pitch_class);
                    FretboardCell {
                        fret: fret as u8,
                        pitch_class,
                        in_scale,
                        is_root: in_scale && pitch_class == scale.root,
                        text: in_scale.then(|| cell_text(pitch_class, labels, display, notation)),
                    }
                })
                .collect();
            FretboardString { tuning_index, open, cells }
        })
        .collect();

    Ok(Fretboard { fret_count, strings })
}
