//! Marking resolver — validates markings and builds the per-string
//! occupancy map plus the final neck length.

use tracing::debug;

use crate::config::ChordConfig;
use crate::error::ChordError;
use crate::model::{Fretboard, StringState};
use crate::parser::parse_marking;
use crate::renderer::constants::{MAX_NECK_LENGTH, MIN_NECK_LENGTH};

/// Resolve raw marking tokens into a fresh `Fretboard`.
///
/// Markings apply in input order: a later marking on the same string and
/// fret replaces the earlier glyph. Stops at the first invalid token.
pub fn resolve<S: AsRef<str>>(
    config: &ChordConfig,
    markings: &[S],
) -> Result<Fretboard, ChordError> {
    config.validate()?;

    let auto_size = config.length == 0;
    let mut neck_length = config.length;
    let mut strings: Vec<StringState> = config
        .strings
        .iter()
        .map(|name| StringState::new(name.as_str()))
        .collect();

    for token in markings {
        let token = token.as_ref();
        let marking = parse_marking(token, config)?;
        let state = &mut strings[marking.string_index()];

        let Some(fret) = marking.fret else {
            debug!(token, string = %state.name, "muting string");
            state.muted = true;
            state.frets.clear();
            continue;
        };

        if fret == 0 {
            return Err(ChordError::FretZero);
        }
        let limit = if auto_size { MAX_NECK_LENGTH } else { neck_length };
        if fret > limit {
            return Err(ChordError::FretOutOfRange { fret, length: limit });
        }
        if auto_size {
            neck_length = neck_length.max(fret);
        }

        if state.muted {
            debug!(token, string = %state.name, "string is muted, marking not recorded");
            continue;
        }

        let glyph = match marking.finger {
            Some(id) => config.fingers[id].clone(),
            None => config.any_finger.clone(),
        };
        debug!(token, string = %state.name, fret, glyph = %glyph, "marking resolved");
        state.frets.insert(fret, glyph);
    }

    if neck_length == 0 {
        neck_length = MIN_NECK_LENGTH;
    }

    Ok(Fretboard {
        strings,
        neck_length,
    })
}
