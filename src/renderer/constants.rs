//! Shared constants for the fretboard renderer (all in SVG user units).

// ── Page & margins ──────────────────────────────────────────────────
pub(super) const PAGE_MARGIN: f64 = 20.0;
pub(super) const TITLE_HEIGHT: f64 = 30.0;

// ── Header rows ─────────────────────────────────────────────────────
pub(super) const FRET_NUMBER_ROW_HEIGHT: f64 = 20.0;
pub(super) const MARKER_ROW_HEIGHT: f64 = 20.0;

// ── Board grid ──────────────────────────────────────────────────────
pub(super) const CELL_WIDTH: f64 = 60.0;
pub(super) const CELL_HEIGHT: f64 = 50.0;
pub(super) const FRET_LINE_WIDTH: f64 = 1.5;
pub(super) const NUT_WIDTH: f64 = 5.0;
pub(super) const STRING_BASE_WIDTH: f64 = 1.0;
pub(super) const STRING_WIDTH_STEP: f64 = 0.35; // extra width per step toward the lowest string

// ── Notes ───────────────────────────────────────────────────────────
pub(super) const NOTE_RADIUS: f64 = 17.0;
pub(super) const NOTE_FONT_SIZE: f64 = 13.0;

// ── Chord list ──────────────────────────────────────────────────────
pub(super) const CHORD_LIST_GAP: f64 = 16.0; // space between board and panel
pub(super) const CHORD_LINE_HEIGHT: f64 = 20.0;
pub(super) const CHORD_CHAR_WIDTH: f64 = 8.0; // rough advance for wrapping
pub(super) const CHORD_ENTRY_SPACING: f64 = 16.0;
pub(super) const CHORD_LIST_HEADING: &str = "Acordes por grado:";

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "white";
pub(super) const BOARD_COLOR: &str = "#f3e2c7";
pub(super) const FRET_COLOR: &str = "#8a8a8a";
pub(super) const NUT_COLOR: &str = "#3a3a3a";
pub(super) const STRING_COLOR: &str = "#5a5a5a";
pub(super) const NOTE_COLOR: &str = "#2f6fb0";
pub(super) const ROOT_COLOR: &str = "#c9302c";
pub(super) const NOTE_TEXT_COLOR: &str = "white";
pub(super) const HEADER_COLOR: &str = "#1a1a1a";
pub(super) const LABEL_COLOR: &str = "#555555";
