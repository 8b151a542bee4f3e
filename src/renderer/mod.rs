//! Diagram renderer — turns a resolved Fretboard into text.
//!
//! Produces the chord name, the optional one-line brief display and the
//! column-aligned tab. Every glyph comes from the configuration, so the
//! same layout serves plain ASCII and braille output alike. Rendering only
//! reads the fretboard; calling it twice gives identical text.

pub(crate) mod constants;
mod numerals;
mod brief;
mod tab;

use crate::config::ChordConfig;
use crate::error::ChordError;
use crate::model::{Diagram, Fretboard};
use brief::render_brief;
use numerals::Numerals;
use tab::render_tab;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a resolved fretboard into a `Diagram`.
///
/// `config` must be the one the fretboard was resolved with: `resolve` has
/// already run `ChordConfig::validate` on it, so rendering cannot fail. The
/// brief line is left empty when `hide_brief` is set.
pub fn render(config: &ChordConfig, board: &Fretboard) -> Diagram {
    let numerals = Numerals::new(config);

    let brief = if config.hide_brief {
        String::new()
    } else {
        render_brief(config, board, &numerals)
    };

    Diagram {
        name: config.name.clone(),
        brief,
        tab: render_tab(config, board, &numerals),
    }
}

/// Spell `n` with the configured number sign and numeral alphabet.
pub fn transliterate(config: &ChordConfig, n: u32) -> Result<String, ChordError> {
    config.validate()?;
    Ok(Numerals::new(config).spell(n))
}
