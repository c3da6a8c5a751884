//! Data model for scales, tunings and computed fretboard diagrams.
//!
//! Static definitions (`ScaleDefinition`, `TuningDefinition`) borrow from the
//! tables in [`crate::tables`]. Everything else is recomputed on each request
//! and serializes to JSON for the FFI layer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FretError, Result};
use crate::tables::{LATIN_NOTE_NAMES, NOTE_NAMES};

// ═══════════════════════════════════════════════════════════════════════
// Pitch classes and notation
// ═══════════════════════════════════════════════════════════════════════

/// One of the 12 equal-tempered tones, without octave. Always in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// Build a pitch class from its chromatic index. Values outside 0..=11
    /// are rejected rather than wrapped.
    pub fn new(index: i64) -> Result<Self> {
        if (0..12).contains(&index) {
            Ok(PitchClass(index as u8))
        } else {
            Err(FretError::InvalidPitchClass(index))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Move up by `semitones`, wrapping modulo 12.
    pub const fn transpose(self, semitones: u8) -> Self {
        PitchClass((self.0 + semitones % 12) % 12)
    }

    /// Display spelling in the given notation ("C#" / "Do#").
    pub fn name(self, notation: Notation) -> &'static str {
        match notation {
            Notation::Standard => NOTE_NAMES[self.0 as usize],
            Notation::Latin => LATIN_NOTE_NAMES[self.0 as usize],
        }
    }

    /// Parse a note name in either notation, ignoring case and surrounding
    /// whitespace ("a", "La", "sol#").
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        NOTE_NAMES
            .iter()
            .zip(LATIN_NOTE_NAMES.iter())
            .position(|(std, latin)| {
                std.eq_ignore_ascii_case(wanted) || latin.eq_ignore_ascii_case(wanted)
            })
            .map(|i| PitchClass(i as u8))
            .ok_or_else(|| FretError::InvalidNoteName(name.to_string()))
    }

    /// All twelve pitch classes in chromatic order starting at C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl TryFrom<i64> for PitchClass {
    type Error = FretError;

    fn try_from(index: i64) -> Result<Self> {
        PitchClass::new(index)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> u8 {
        pc.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Notation::Standard))
    }
}

/// Note-name spelling used for plain note labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Sharp-based letter names (C, C#, D, ...)
    #[default]
    Standard,
    /// Solfège names (Do, Do#, Re, ...)
    Latin,
}

impl FromStr for Notation {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(FretError::from)
    }
}

/// Relative major/minor transposition applied before building the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeMode {
    #[default]
    None,
    /// Root moves up 9 semitones (the relative minor of a major root).
    #[serde(alias = "minor")]
    RelativeMinor,
    /// Root moves up 3 semitones (the relative major of a minor root).
    #[serde(alias = "major")]
    RelativeMajor,
}

impl RelativeMode {
    /// Semitone offset applied to the requested root.
    pub const fn offset(self) -> u8 {
        match self {
            RelativeMode::None => 0,
            RelativeMode::RelativeMinor => 9,
            RelativeMode::RelativeMajor => 3,
        }
    }
}

impl FromStr for RelativeMode {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(FretError::from)
    }
}

/// What text a populated fretboard cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Note name in the active notation
    #[default]
    Plain,
    /// Roman-numeral scale degree
    Degree,
    /// Triad name on that degree
    Chord,
}

impl DisplayMode {
    /// Map the two UI toggles onto a single mode. Degrees win when both are on.
    pub fn from_toggles(show_degrees: bool, show_chords: bool) -> Self {
        if show_degrees {
            DisplayMode::Degree
        } else if show_chords {
            DisplayMode::Chord
        } else {
            DisplayMode::Plain
        }
    }
}

/// Triad quality assigned to a scale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Suffix appended to the root name ("", "m", "dim").
    pub const fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    #[default]
    Guitar,
    Bass,
}

impl Instrument {
    pub const ALL: [Instrument; 2] = [Instrument::Guitar, Instrument::Bass];

    pub const fn as_str(self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::Bass => "bass",
        }
    }
}

impl FromStr for Instrument {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guitar" => Ok(Instrument::Guitar),
            "bass" => Ok(Instrument::Bass),
            _ => Err(FretError::InvalidInstrument(s.to_string())),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Static definitions
// ═══════════════════════════════════════════════════════════════════════

/// A named scale: strictly ascending semitone offsets from the root, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDefinition {
    /// Lookup key (e.g., "minorPent")
    pub key: &'static str,
    /// Name shown in selectors (e.g., "Pentatónica Menor")
    pub display_name: &'static str,
    pub intervals: &'static [u8],
}

/// Open-string pitch classes for one instrument tuning, lowest string first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningDefinition {
    pub instrument: Instrument,
    /// Lookup key (e.g., "dropD")
    pub key: &'static str,
    /// Human label without the string names (e.g., "Drop D")
    pub label: &'static str,
    pub open_strings: &'static [PitchClass],
}

impl TuningDefinition {
    pub fn string_count(&self) -> usize {
        self.open_strings.len()
    }

    /// Selector text, e.g. "Afinación estándar (E A D G B E)".
    pub fn selector_text(&self) -> String {
        let names: Vec<&str> = self
            .open_strings
            .iter()
            .map(|pc| pc.name(Notation::Standard))
            .collect();
        format!("{} ({})", self.label, names.join(" "))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Computed results
// ═══════════════════════════════════════════════════════════════════════

/// The pitch classes of a requested scale, in interval order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleResult {
    /// Effective root: the requested root moved by the relative mode.
    pub root: PitchClass,
    pub notes: Vec<PitchClass>,
}

impl ScaleResult {
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Degree and triad annotation for one scale note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLabel {
    pub pitch_class: PitchClass,
    /// Roman numeral; only the first seven scale positions get one.
    pub degree: Option<String>,
    pub quality: ChordQuality,
    /// Standard note name plus quality suffix (e.g., "Dm")
    pub chord: String,
}

/// Labels keyed by pitch class. A later scale position overwrites an earlier
/// one that lands on the same pitch class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleLabels {
    pub labels: BTreeMap<PitchClass, NoteLabel>,
}

impl ScaleLabels {
    pub fn get(&self, pc: PitchClass) -> Option<&NoteLabel> {
        self.labels.get(&pc)
    }

    pub fn degree(&self, pc: PitchClass) -> Option<&str> {
        self.get(pc).and_then(|l| l.degree.as_deref())
    }

    pub fn chord(&self, pc: PitchClass) -> Option<&str> {
        self.get(pc).map(|l| l.chord.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One (string, fret) position. Cells outside the scale carry no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardCell {
    pub fret: u8,
    /// Pitch class sounded at this fret
    pub pitch_class: PitchClass,
    pub in_scale: bool,
    pub is_root: bool,
    /// Display text; `None` for cells outside the scale
    pub text: Option<String>,
}

/// A row of the diagram: one string and its cells from fret 0 upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardString {
    /// Position of this string in the tuning table (0 = lowest)
    pub tuning_index: usize,
    pub open: PitchClass,
    pub cells: Vec<FretboardCell>,
}

/// Computed grid, highest string first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fretboard {
    pub fret_count: usize,
    pub strings: Vec<FretboardString>,
}

impl Fretboard {
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Fret numbers for the header row (0 up to `fret_count - 1`).
    pub fn fret_numbers(&self) -> impl Iterator<Item = usize> {
        0..self.fret_count
    }

    pub fn cell(&self, row: usize, fret: usize) -> Option<&FretboardCell> {
        self.strings.get(row).and_then(|s| s.cells.get(fret))
    }

    /// The row for a string given its tuning-table index.
    pub fn string_by_tuning_index(&self, tuning_index: usize) -> Option<&FretboardString> {
        self.strings.iter().find(|s| s.tuning_index == tuning_index)
    }

    /// Every cell flagged as root.
    pub fn root_cells(&self) -> impl Iterator<Item = &FretboardCell> {
        self.strings
            .iter()
            .flat_map(|s| s.cells.iter())
            .filter(|c| c.is_root)
    }
}

/// Entry in the "chords per degree" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEntry {
    pub degree: Option<String>,
    pub chord: String,
}

impl fmt::Display for ChordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.degree {
            Some(degree) => write!(f, "{degree}: {}", self.chord),
            None => f.write_str(&self.chord),
        }
    }
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    /// e.g., "A Pentatónica Menor"
    pub title: String,
    pub instrument: Instrument,
    pub tuning: String,
    pub notation: Notation,
    pub display: DisplayMode,
    pub scale: ScaleResult,
    pub labels: ScaleLabels,
    pub board: Fretboard,
    pub chord_list: Option<Vec<ChordEntry>>,
}
