//! Request and board configuration.
//!
//! A `FretboardRequest` is what the UI layer sends across the FFI boundary as
//! JSON. Every field has a default, so `{}` draws C major on a standard-tuned
//! guitar. `resolve` validates the whole request up front; nothing downstream
//! sees an unknown key.

use serde::{Deserialize, Serialize};

use std::str::FromStr;

use crate::engine::{chord_list, layout, scale_labels, scale_notes, validate_fret_count};
use crate::error::{FretError, Result};
use crate::model::{
    Diagram, DisplayMode, Instrument, Notation, PitchClass, RelativeMode, ScaleDefinition,
    TuningDefinition,
};
use crate::tables::{find_scale, find_tuning};

// ═══════════════════════════════════════════════════════════════════════
// Board configuration
// ═══════════════════════════════════════════════════════════════════════

/// Preset board shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FretProfile {
    /// 12 frets with the chords-per-degree panel
    #[default]
    Compact,
    /// 25 frets, board only
    Full,
}

impl FretProfile {
    pub const fn fret_count(self) -> usize {
        match self {
            FretProfile::Compact => 12,
            FretProfile::Full => 25,
        }
    }

    pub const fn shows_chord_list(self) -> bool {
        matches!(self, FretProfile::Compact)
    }
}

/// Board shape after applying overrides to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub fret_count: usize,
    pub show_chord_list: bool,
}

impl BoardConfig {
    pub fn from_profile(profile: FretProfile) -> Self {
        Self {
            fret_count: profile.fret_count(),
            show_chord_list: profile.shows_chord_list(),
        }
    }

    pub fn validate(self) -> Result<Self> {
        validate_fret_count(self.fret_count)?;
        Ok(self)
    }
}

impl FromStr for FretProfile {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(FretError::from)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::from_profile(FretProfile::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Wire request
// ═══════════════════════════════════════════════════════════════════════

/// Root as sent by the caller: a note name in either notation, or a raw
/// pitch-class index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RootInput {
    Index(i64),
    Name(String),
}

impl RootInput {
    pub fn pitch_class(&self) -> Result<PitchClass> {
        match self {
            RootInput::Index(i) => PitchClass::new(*i),
            RootInput::Name(name) => PitchClass::from_name(name),
        }
    }
}

impl Default for RootInput {
    fn default() -> Self {
        RootInput::Name("C".to_string())
    }
}

/// User-selected parameters for one redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FretboardRequest {
    pub instrument: Instrument,
    pub tuning: String,
    pub root: RootInput,
    pub scale: String,
    pub relative: RelativeMode,
    pub notation: Notation,
    pub show_degrees: bool,
    pub show_chords: bool,
    pub profile: FretProfile,
    /// Overrides the profile's fret count
    pub fret_count: Option<usize>,
    /// Overrides the profile's chord-list flag
    pub show_chord_list: Option<bool>,
}

impl Default for FretboardRequest {
    fn default() -> Self {
        Self {
            instrument: Instrument::default(),
            tuning: "standard".to_string(),
            root: RootInput::default(),
            scale: "ionian".to_string(),
            relative: RelativeMode::None,
            notation: Notation::Standard,
            show_degrees: false,
            show_chords: false,
            profile: FretProfile::Compact,
            fret_count: None,
            show_chord_list: None,
        }
    }
}

impl FretboardRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_toggles(self.show_degrees, self.show_chords)
    }

    pub fn board_config(&self) -> Result<BoardConfig> {
        let mut config = BoardConfig::from_profile(self.profile);
        if let Some(n) = self.fret_count {
            config.fret_count = n;
        }
        if let Some(show) = self.show_chord_list {
            config.show_chord_list = show;
        }
        config.validate()
    }

    /// Check every field against the static tables.
    pub fn resolve(&self) -> Result<ResolvedRequest> {
        let scale = ScaleRequest {
            root: self.root.pitch_class()?,
            scale: find_scale(&self.scale)?,
            relative: self.relative,
            notation: self.notation,
            display: self.display_mode(),
        };
        let tuning = find_tuning(self.instrument, &self.tuning)?;
        let config = self.board_config()?;

        Ok(ResolvedRequest {
            scale,
            tuning,
            config,
            chord_list: config.show_chord_list && self.show_chords,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Validated request
// ═══════════════════════════════════════════════════════════════════════

/// Scale parameters after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRequest {
    /// Root as selected, before any relative transposition
    pub root: PitchClass,
    pub scale: &'static ScaleDefinition,
    pub relative: RelativeMode,
    pub notation: Notation,
    pub display: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub scale: ScaleRequest,
    pub tuning: &'static TuningDefinition,
    pub config: BoardConfig,
    /// Whether the chords-per-degree panel is produced
    pub chord_list: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// Full pipeline
// ═══════════════════════════════════════════════════════════════════════

/// Validate a request and compute everything a renderer needs.
pub fn build_diagram(request: &FretboardRequest) -> Result<Diagram> {
    let resolved = request.resolve()?;
    let sr = resolved.scale;

    let scale = scale_notes(sr.root, sr.scale, sr.relative);
    let labels = scale_labels(sr.root, sr.scale);
    let board = layout(
        resolved.tuning.open_strings,
        resolved.config.fret_count,
        &scale,
        &labels,
        sr.display,
        sr.notation,
    )?;
    let chord_list = resolved.chord_list.then(|| chord_list(sr.root, sr.scale));

    Ok(Diagram {
        title: format!("{} {}", scale.root.name(sr.notation), sr.scale.display_name),
        instrument: resolved.tuning.instrument,
        tuning: resolved.tuning.key.to_string(),
        notation: sr.notation,
        display: sr.display,
        scale,
        labels,
        board,
        chord_list,
    })
}
