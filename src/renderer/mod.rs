//! Diagram renderers — turn a computed `Diagram` into displayable output.
//!
//! The engine never draws anything. Renderers only read the `Diagram`, so a
//! host can swap the SVG renderer for the plain-text one (or its own) without
//! touching the computation.

mod constants;
mod svg_builder;
mod text;

use crate::model::*;
use crate::tables::fret_marker;
use constants::*;
use svg_builder::SvgBuilder;

pub use text::{render_diagram_to_text, TextRenderer};

/// Anything that can draw a diagram.
pub trait DiagramRenderer {
    fn render(&self, diagram: &Diagram) -> String;
}

/// Self-contained SVG output, one cell per string/fret position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl DiagramRenderer for SvgRenderer {
    fn render(&self, diagram: &Diagram) -> String {
        render_diagram_to_svg(diagram)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a diagram into a complete SVG string.
///
/// Layout top to bottom: title, fret numbers, inlay markers, the board
/// (highest string first) and, when present, the chords-per-degree panel.
pub fn render_diagram_to_svg(diagram: &Diagram) -> String {
    let board = &diagram.board;
    let board_width = board.fret_count as f64 * CELL_WIDTH;
    let board_height = board.string_count() as f64 * CELL_HEIGHT;
    let width = board_width + 2.0 * PAGE_MARGIN;

    let chord_lines = diagram
        .chord_list
        .as_deref()
        .map(|entries| chord_list_lines(entries, board_width))
        .unwrap_or_default();
    let chord_list_height = if diagram.chord_list.is_some() {
        CHORD_LIST_GAP + CHORD_LINE_HEIGHT * (1 + chord_lines.len()) as f64
    } else {
        0.0
    };

    let numbers_top = PAGE_MARGIN + TITLE_HEIGHT;
    let markers_top = numbers_top + FRET_NUMBER_ROW_HEIGHT;
    let board_top = markers_top + MARKER_ROW_HEIGHT;
    let height = board_top + board_height + chord_list_height + PAGE_MARGIN;

    let mut svg = SvgBuilder::new(width, height);
    svg.rect(0.0, 0.0, width, height, BACKGROUND_COLOR);

    svg.text(PAGE_MARGIN, PAGE_MARGIN + 18.0, &diagram.title, 18.0, "bold", HEADER_COLOR, "start");
    render_fret_numbers(&mut svg, board, numbers_top);
    render_markers(&mut svg, board, markers_top);
    render_board(&mut svg, board, board_top);
    render_notes(&mut svg, board, board_top);

    if diagram.chord_list.is_some() {
        render_chord_list(&mut svg, &chord_lines, board_top + board_height + CHORD_LIST_GAP);
    }

    svg.build()
}

// ═══════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════

fn column_center(fret: usize) -> f64 {
    PAGE_MARGIN + fret as f64 * CELL_WIDTH + CELL_WIDTH / 2.0
}

fn row_center(board_top: f64, row: usize) -> f64 {
    board_top + row as f64 * CELL_HEIGHT + CELL_HEIGHT / 2.0
}

fn render_fret_numbers(svg: &mut SvgBuilder, board: &Fretboard, top: f64) {
    for fret in board.fret_numbers() {
        svg.text(column_center(fret), top + 14.0, &fret.to_string(), 12.0, "normal", LABEL_COLOR, "middle");
    }
}

fn render_markers(svg: &mut SvgBuilder, board: &Fretboard, top: f64) {
    for fret in board.fret_numbers() {
        if let Some(marker) = fret_marker(fret) {
            svg.text(column_center(fret), top + 14.0, marker.symbol(), 14.0, "normal", LABEL_COLOR, "middle");
        }
    }
}

fn render_board(svg: &mut SvgBuilder, board: &Fretboard, top: f64) {
    let left = PAGE_MARGIN;
    let width = board.fret_count as f64 * CELL_WIDTH;
    let height = board.string_count() as f64 * CELL_HEIGHT;
    let bottom = top + height;

    svg.rect(left, top, width, height, BOARD_COLOR);

    // Fret lines on every column boundary; the nut sits after the open-string column.
    for boundary in 0..=board.fret_count {
        let x = left + boundary as f64 * CELL_WIDTH;
        if boundary == 1 {
            svg.line(x, top, x, bottom, NUT_COLOR, NUT_WIDTH);
        } else {
            svg.line(x, top, x, bottom, FRET_COLOR, FRET_LINE_WIDTH);
        }
    }

    let lowest = board.string_count().saturating_sub(1);
    for (row, string) in board.strings.iter().enumerate() {
        let y = row_center(top, row);
        let gauge = STRING_BASE_WIDTH + (lowest - string.tuning_index.min(lowest)) as f64 * STRING_WIDTH_STEP;
        svg.line(left, y, left + width, y, STRING_COLOR, gauge);
    }
}

fn render_notes(svg: &mut SvgBuilder, board: &Fretboard, top: f64) {
    for (row, string) in board.strings.iter().enumerate() {
        let cy = row_center(top, row);
        for cell in string.cells.iter().filter(|c| c.in_scale) {
            let cx = column_center(cell.fret as usize);
            let (fill, class) = if cell.is_root {
                (ROOT_COLOR, "note root")
            } else {
                (NOTE_COLOR, "note")
            };
            svg.circle(cx, cy, NOTE_RADIUS, fill, class);
            if let Some(ref text) = cell.text {
                svg.text(cx, cy + NOTE_FONT_SIZE / 3.0, text, NOTE_FONT_SIZE, "bold", NOTE_TEXT_COLOR, "middle");
            }
        }
    }
}

/// Pack panel entries into lines no wider than `max_width`. Each entry is
/// paired with its x offset from the panel's left edge.
fn chord_list_lines(entries: &[ChordEntry], max_width: f64) -> Vec<Vec<(f64, String)>> {
    let mut lines: Vec<Vec<(f64, String)>> = Vec::new();
    let mut current: Vec<(f64, String)> = Vec::new();
    let mut x = 0.0;

    for entry in entries {
        let label = entry.to_string();
        let w = label.chars().count() as f64 * CHORD_CHAR_WIDTH;
        if !current.is_empty() && x + w > max_width {
            lines.push(std::mem::take(&mut current));
            x = 0.0;
        }
        current.push((x, label));
        x += w + CHORD_ENTRY_SPACING;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn render_chord_list(svg: &mut SvgBuilder, lines: &[Vec<(f64, String)>], top: f64) {
    let mut y = top + 14.0;
    svg.text(PAGE_MARGIN, y, CHORD_LIST_HEADING, 14.0, "bold", HEADER_COLOR, "start");
    for line in lines {
        y += CHORD_LINE_HEIGHT;
        for (x, label) in line {
            svg.text(PAGE_MARGIN + x, y, label, 13.0, "normal", HEADER_COLOR, "start");
        }
    }
}
