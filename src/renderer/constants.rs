//! Shared constants for the diagram renderer (all in characters).

// ── Neck ────────────────────────────────────────────────────────────
pub(crate) const MIN_NECK_LENGTH: u32 = 5; // width when nothing is fretted
pub(crate) const MAX_NECK_LENGTH: u32 = 99; // two-digit fret numbers keep columns aligned

// ── Header ──────────────────────────────────────────────────────────
pub(super) const FRET_COLUMN_WIDTH: usize = 3; // each header number is left-aligned in this
pub(super) const LABEL_GAP: &str = " "; // between string label and cells
