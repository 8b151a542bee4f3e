//! Brief display — one token per string, in configured order.

use super::numerals::Numerals;
use crate::config::ChordConfig;
use crate::model::Fretboard;

pub(super) fn render_brief(config: &ChordConfig, board: &Fretboard, numerals: &Numerals) -> String {
    let tokens: Vec<String> = board
        .strings
        .iter()
        .map(|s| {
            if s.muted {
                return config.muted_string.clone();
            }
            match s.lowest_fret() {
                Some((fret, finger)) if config.extended_brief => {
                    format!("{}{}{finger}", numerals.spell(fret), config.delimiter)
                }
                Some((fret, _)) => numerals.spell(fret),
                None => config.empty_string.clone(),
            }
        })
        .collect();
    tokens.join(&config.separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;

    fn brief(config: &ChordConfig, markings: &[&str]) -> String {
        let board = resolve(config, markings).unwrap();
        render_brief(config, &board, &Numerals::new(config))
    }

    #[test]
    fn picks_lowest_fret_per_string() {
        let config = ChordConfig::default();
        assert_eq!(
            brief(&config, &["1.5.1", "1.2.3", "4", "6.1"]),
            "#b-;x-;x-==-;x-#a"
        );
    }

    #[test]
    fn extended_mode_appends_finger() {
        let config = ChordConfig {
            extended_brief: true,
            ..ChordConfig::default()
        };
        assert_eq!(
            brief(&config, &["1.3.2", "2.2"]),
            "#c4#b-#b4#x-;x-;x-;x-;x"
        );
    }
}
