//! Data model shared by the resolver and the renderer.
//!
//! A `Fretboard` is built fresh for each render call by `resolve` and only
//! read afterwards; a `Diagram` is the finished text.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved state of one string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringState {
    /// Display name (from the configured string list)
    pub name: String,
    /// Whether the string is not to be played
    pub muted: bool,
    /// Fret number → finger glyph. Empty whenever `muted` is set.
    pub frets: BTreeMap<u32, String>,
}

impl StringState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Lowest occupied fret and its glyph, if any.
    pub fn lowest_fret(&self) -> Option<(u32, &str)> {
        self.frets
            .iter()
            .next()
            .map(|(fret, glyph)| (*fret, glyph.as_str()))
    }
}

/// Per-string occupancy plus the finalized neck length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fretboard {
    /// Strings in configured order
    pub strings: Vec<StringState>,
    /// Number of fret columns to render (always >= 1)
    pub neck_length: u32,
}

/// A rendered chord diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    /// Chord name line
    pub name: String,
    /// One-line summary; empty when hidden
    pub brief: String,
    /// Header row followed by one row per string
    pub tab: Vec<String>,
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.brief)?;
        for line in &self.tab {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
