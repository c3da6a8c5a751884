//! Static lookup tables: note names, degree names, scales and tunings.
//!
//! Loaded once as plain statics and never mutated. Order matters: selectors
//! list scales and tunings in table order.

use serde::Serialize;

use crate::error::{FretError, Result};
use crate::model::{Instrument, Notation, PitchClass, ScaleDefinition, TuningDefinition};
use crate::model::PitchClass as P;

pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const LATIN_NOTE_NAMES: [&str; 12] = [
    "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

pub const DEGREE_NAMES: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

// ── Scales ──────────────────────────────────────────────────────────

pub static SCALES: &[ScaleDefinition] = &[
    ScaleDefinition { key: "ionian", display_name: "Jónico (Mayor)", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    ScaleDefinition { key: "dorian", display_name: "Dórico", intervals: &[0, 2, 3, 5, 7, 9, 10] },
    ScaleDefinition { key: "phrygian", display_name: "Frigio", intervals: &[0, 1, 3, 5, 7, 8, 10] },
    ScaleDefinition { key: "lydian", display_name: "Lidio", intervals: &[0, 2, 4, 6, 7, 9, 11] },
    ScaleDefinition { key: "mixolydian", display_name: "Mixolidio", intervals: &[0, 2, 4, 5, 7, 9, 10] },
    ScaleDefinition { key: "aeolian", display_name: "Eólico (Menor Natural)", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    ScaleDefinition { key: "locrian", display_name: "Locrio", intervals: &[0, 1, 3, 5, 6, 8, 10] },
    ScaleDefinition { key: "harmonicMinor", display_name: "Menor Armónica", intervals: &[0, 2, 3, 5, 7, 8, 11] },
    ScaleDefinition { key: "melodicMinor", display_name: "Menor Melódica", intervals: &[0, 2, 3, 5, 7, 9, 11] },
    ScaleDefinition { key: "majorPent", display_name: "Pentatónica Mayor", intervals: &[0, 2, 4, 7, 9] },
    ScaleDefinition { key: "minorPent", display_name: "Pentatónica Menor", intervals: &[0, 3, 5, 7, 10] },
    ScaleDefinition { key: "blues", display_name: "Escala de Blues", intervals: &[0, 3, 5, 6, 7, 10] },
    ScaleDefinition { key: "chromatic", display_name: "Cromática", intervals: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
];

// ── Tunings (lowest string first) ───────────────────────────────────

pub static TUNINGS: &[TuningDefinition] = &[
    TuningDefinition {
        instrument: Instrument::Guitar,
        key: "standard",
        label: "Afinación estándar",
        open_strings: &[P::E, P::A, P::D, P::G, P::B, P::E],
    },
    TuningDefinition {
        instrument: Instrument::Guitar,
        key: "dropD",
        label: "Drop D",
        open_strings: &[P::D, P::A, P::D, P::G, P::B, P::E],
    },
    TuningDefinition {
        instrument: Instrument::Bass,
        key: "standard",
        label: "Afinación estándar",
        open_strings: &[P::E, P::A, P::D, P::G],
    },
    TuningDefinition {
        instrument: Instrument::Bass,
        key: "dropD",
        label: "Drop D",
        open_strings: &[P::D, P::A, P::D, P::G],
    },
    TuningDefinition {
        instrument: Instrument::Bass,
        key: "5string",
        label: "5 cuerdas",
        open_strings: &[P::B, P::E, P::A, P::D, P::G],
    },
];

// ── Fret markers ────────────────────────────────────────────────────

const MARKER_FRETS: [usize; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];
const DOUBLE_MARKER_FRETS: [usize; 2] = [12, 24];

/// Inlay drawn above a fret column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FretMarker {
    Single,
    Double,
}

impl FretMarker {
    pub const fn symbol(self) -> &'static str {
        match self {
            FretMarker::Single => "•",
            FretMarker::Double => "••",
        }
    }
}

pub fn fret_marker(fret: usize) -> Option<FretMarker> {
    if DOUBLE_MARKER_FRETS.contains(&fret) {
        Some(FretMarker::Double)
    } else if MARKER_FRETS.contains(&fret) {
        Some(FretMarker::Single)
    } else {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Lookups
// ═══════════════════════════════════════════════════════════════════════

pub fn find_scale(key: &str) -> Result<&'static ScaleDefinition> {
    SCALES
        .iter()
        .find(|s| s.key == key)
        .ok_or_else(|| FretError::InvalidScaleKey(key.to_string()))
}

pub fn find_tuning(instrument: Instrument, key: &str) -> Result<&'static TuningDefinition> {
    TUNINGS
        .iter()
        .find(|t| t.instrument == instrument && t.key == key)
        .ok_or_else(|| FretError::InvalidTuningKey {
            instrument: instrument.as_str().to_string(),
            tuning: key.to_string(),
        })
}

pub fn tunings_for(instrument: Instrument) -> impl Iterator<Item = &'static TuningDefinition> {
    TUNINGS.iter().filter(move |t| t.instrument == instrument)
}

// ═══════════════════════════════════════════════════════════════════════
// Selector catalog
// ═══════════════════════════════════════════════════════════════════════

/// Option lists for the root, scale and tuning selectors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub roots: Vec<RootOption>,
    pub scales: Vec<ScaleOption>,
    pub instruments: Vec<InstrumentOption>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootOption {
    pub pitch_class: PitchClass,
    pub name: &'static str,
    pub latin_name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOption {
    pub key: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentOption {
    pub instrument: Instrument,
    pub tunings: Vec<TuningOption>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningOption {
    pub key: &'static str,
    pub text: String,
}

pub fn catalog() -> Catalog {
    let roots = PitchClass::all()
        .map(|pc| RootOption {
            pitch_class: pc,
            name: pc.name(Notation::Standard),
            latin_name: pc.name(Notation::Latin),
        })
        .collect();

    let scales = SCALES
        .iter()
        .map(|s| ScaleOption { key: s.key, display_name: s.display_name })
        .collect();

    let instruments = Instrument::ALL
        .iter()
        .map(|&instrument| InstrumentOption {
            instrument,
            tunings: tunings_for(instrument)
                .map(|t| TuningOption { key: t.key, text: t.selector_text() })
                .collect(),
        })
        .collect();

    Catalog { roots, scales, instruments }
}
