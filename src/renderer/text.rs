//! Plain-text renderer for terminals and logs.
//!
//! ```text
//! A Pentatónica Menor
//!         0       1       2       3    ...
//!                                 •
//! E   |   E   |       |       |   G   | ...
//! ```
//! Root notes are bracketed.

use std::fmt::Write;

use super::constants::CHORD_LIST_HEADING;
use super::DiagramRenderer;
use crate::model::*;
use crate::tables::fret_marker;

// Seven characters of cell text plus the bar; "[Sol#]" and "C#dim" both fit.
const CELL: usize = 8;
const LABEL: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl DiagramRenderer for TextRenderer {
    fn render(&self, diagram: &Diagram) -> String {
        render_diagram_to_text(diagram)
    }
}

pub fn render_diagram_to_text(diagram: &Diagram) -> String {
    let board = &diagram.board;
    let mut out = String::new();

    let _ = writeln!(out, "{}", diagram.title);

    out.push_str(&" ".repeat(LABEL + 1));
    for fret in board.fret_numbers() {
        let _ = write!(out, "{:^w$}", fret, w = CELL);
    }
    out.push('\n');

    let mut markers = " ".repeat(LABEL + 1);
    for fret in board.fret_numbers() {
        let symbol = fret_marker(fret).map(|m| m.symbol()).unwrap_or("");
        let _ = write!(markers, "{:^w$}", symbol, w = CELL);
    }
    out.push_str(markers.trim_end());
    out.push('\n');

    for string in &board.strings {
        let _ = write!(out, "{:<w$}|", string.open.name(diagram.notation), w = LABEL);
        for cell in &string.cells {
            let text = match (&cell.text, cell.is_root) {
                (Some(t), true) => format!("[{t}]"),
                (Some(t), false) => t.clone(),
                (None, _) => String::new(),
            };
            let _ = write!(out, "{:^w$}|", text, w = CELL - 1);
        }
        out.push('\n');
    }

    if let Some(ref entries) = diagram.chord_list {
        let joined: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        let _ = writeln!(out, "{CHORD_LIST_HEADING} {}", joined.join("  "));
    }

    out
}
