//! Tab body — header row of fret numbers plus one row per string.
//!
//! Rows are emitted column by column. When a column is occupied, the
//! trailing glyph of the column before it is swapped for the pre-fingered
//! glyph, so a marking's left neighbour always connects to it.

use tracing::trace;

use super::constants::*;
use super::numerals::Numerals;
use crate::config::ChordConfig;
use crate::model::{Fretboard, StringState};

/// One emitted column: the fret glyph and the connector after it.
struct Cell<'a> {
    glyph: &'a str,
    trail: &'a str,
}

pub(super) fn render_tab(config: &ChordConfig, board: &Fretboard, numerals: &Numerals) -> Vec<String> {
    let label_width = board
        .strings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(board.strings.len() + 1);
    lines.push(header(config, board.neck_length, label_width, numerals));

    // Last configured string prints first.
    for string in board.strings.iter().rev() {
        let row = format!(
            "{:>label_width$}{LABEL_GAP}{}",
            string.name,
            row_cells(config, string, board.neck_length)
        );
        trace!(string = %string.name, row = %row, "rendered row");
        lines.push(row);
    }
    lines
}

fn header(config: &ChordConfig, neck_length: u32, label_width: usize, numerals: &Numerals) -> String {
    let mut line = config.pad_fret_numbers.repeat(label_width);
    line.push_str(LABEL_GAP);
    for fret in 1..=neck_length {
        line.push_str(&format!(
            "{:<width$}",
            numerals.spell(fret),
            width = FRET_COLUMN_WIDTH
        ));
    }
    line
}

/// Glyph occupying `fret`, including the synthesized column-1 marker.
fn glyph_at<'a>(config: &'a ChordConfig, string: &'a StringState, fret: u32) -> Option<&'a str> {
    if string.muted {
        return (fret == 1).then_some(config.muted_string.as_str());
    }
    match string.frets.get(&fret) {
        Some(finger) => Some(finger.as_str()),
        None if fret == 1 => Some(config.empty_string.as_str()),
        None => None,
    }
}

fn row_cells(config: &ChordConfig, string: &StringState, neck_length: u32) -> String {
    let mut cells: Vec<Cell> = Vec::new();
    for fret in 1..=neck_length {
        match glyph_at(config, string, fret) {
            Some(glyph) => {
                if let Some(prev) = cells.last_mut() {
                    prev.trail = config.pre_fingered.as_str();
                }
                cells.push(Cell {
                    glyph,
                    trail: config.fingered.as_str(),
                });
            }
            None => cells.push(Cell {
                glyph: config.empty.as_str(),
                trail: config.normal.as_str(),
            }),
        }
    }

    let mut out = String::new();
    for cell in &cells {
        out.push_str(cell.glyph);
        out.push_str(cell.trail);
    }
    out
}
