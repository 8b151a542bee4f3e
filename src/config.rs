//! Rendering configuration — instrument model and every display glyph.
//!
//! A `ChordConfig` is an immutable value threaded into `resolve` and
//! `render`. Front-ends build it either field by field, from JSON, or
//! through the flat name/value surface (`set` / `get`).

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::renderer::constants::MAX_NECK_LENGTH;

/// Named options with the defaults of the braille chord template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChordConfig {
    /// Chord name printed above the diagram
    pub name: String,
    /// Neck length in frets; 0 sizes the neck from the markings
    pub length: u32,
    pub hide_brief: bool,
    /// Append the finger name to each fret number in the brief display
    pub extended_brief: bool,
    /// Between fret number and finger name in the extended brief display
    pub delimiter: String,
    /// Prefix for every transliterated number
    pub number_sign: String,
    /// Ten characters standing for the digits 0–9
    pub numbers: String,
    /// Between strings in the brief display
    pub separator: String,
    /// Finger names; the index is the finger id
    pub fingers: Vec<String>,
    /// Printed when a marking gives a fret but no finger
    pub any_finger: String,
    /// String names; the index (1-based in markings) is the string id
    pub strings: Vec<String>,
    /// Repeated before the header's fret numbers
    pub pad_fret_numbers: String,
    pub empty: String,
    pub fingered: String,
    pub normal: String,
    pub pre_fingered: String,
    pub empty_string: String,
    pub muted_string: String,
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            name: ",blank ,*ord ,template".to_string(),
            length: 0,
            hide_brief: false,
            extended_brief: false,
            delimiter: "4".to_string(),
            number_sign: "#".to_string(),
            numbers: "jabcdefghi".to_string(),
            separator: "-".to_string(),
            fingers: split_list("#j,#a,#b,#c,#d"),
            any_finger: "#x".to_string(),
            strings: split_list(";e,;a,;d,;g,;b,;e"),
            pad_fret_numbers: " ".to_string(),
            empty: "33".to_string(),
            fingered: "_".to_string(),
            normal: "=".to_string(),
            pre_fingered: "l".to_string(),
            empty_string: ";x".to_string(),
            muted_string: "==".to_string(),
        }
    }
}

/// A value on the flat option surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

const OPTION_NAMES: &[&str] = &[
    "name",
    "length",
    "hide-brief",
    "extended-brief",
    "delimiter",
    "number-sign",
    "numbers",
    "separator",
    "fingers",
    "any-finger",
    "strings",
    "pad-fret-numbers",
    "empty",
    "fingered",
    "normal",
    "pre-fingered",
    "empty-string",
    "muted-string",
];

impl ChordConfig {
    /// Every recognized option name, in display order.
    pub fn option_names() -> &'static [&'static str] {
        OPTION_NAMES
    }

    pub fn from_json(json: &str) -> Result<Self, ChordError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ChordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of strings on the instrument.
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Check the invariants the renderer relies on.
    pub fn validate(&self) -> Result<(), ChordError> {
        let n = self.numbers.chars().count();
        if n != 10 {
            return Err(ChordError::InvalidNumerals(n));
        }
        if self.length > MAX_NECK_LENGTH {
            return Err(ChordError::NeckTooLong {
                length: self.length,
                max: MAX_NECK_LENGTH,
            });
        }
        Ok(())
    }

    /// Set one option by name.
    ///
    /// List options accept either a `List` or a comma-separated `Text`.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), ChordError> {
        match name {
            "length" => self.length = expect_length(name, value)?,
            "hide-brief" => self.hide_brief = expect_flag(name, value)?,
            "extended-brief" => self.extended_brief = expect_flag(name, value)?,
            "fingers" => self.fingers = expect_list(name, value)?,
            "strings" => self.strings = expect_list(name, value)?,
            _ => {
                let slot = self
                    .text_slot(name)
                    .ok_or_else(|| ChordError::UnknownOption(name.to_string()))?;
                *slot = expect_text(name, value)?;
            }
        }
        Ok(())
    }

    /// Read one option by name.
    pub fn get(&self, name: &str) -> Option<OptionValue> {
        let value = match name {
            "length" => OptionValue::Integer(i64::from(self.length)),
            "hide-brief" => OptionValue::Flag(self.hide_brief),
            "extended-brief" => OptionValue::Flag(self.extended_brief),
            "fingers" => OptionValue::List(self.fingers.clone()),
            "strings" => OptionValue::List(self.strings.clone()),
            "name" => OptionValue::Text(self.name.clone()),
            "delimiter" => OptionValue::Text(self.delimiter.clone()),
            "number-sign" => OptionValue::Text(self.number_sign.clone()),
            "numbers" => OptionValue::Text(self.numbers.clone()),
            "separator" => OptionValue::Text(self.separator.clone()),
            "any-finger" => OptionValue::Text(self.any_finger.clone()),
            "pad-fret-numbers" => OptionValue::Text(self.pad_fret_numbers.clone()),
            "empty" => OptionValue::Text(self.empty.clone()),
            "fingered" => OptionValue::Text(self.fingered.clone()),
            "normal" => OptionValue::Text(self.normal.clone()),
            "pre-fingered" => OptionValue::Text(self.pre_fingered.clone()),
            "empty-string" => OptionValue::Text(self.empty_string.clone()),
            "muted-string" => OptionValue::Text(self.muted_string.clone()),
            _ => return None,
        };
        Some(value)
    }

    fn text_slot(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "name" => &mut self.name,
            "delimiter" => &mut self.delimiter,
            "number-sign" => &mut self.number_sign,
            "numbers" => &mut self.numbers,
            "separator" => &mut self.separator,
            "any-finger" => &mut self.any_finger,
            "pad-fret-numbers" => &mut self.pad_fret_numbers,
            "empty" => &mut self.empty,
            "fingered" => &mut self.fingered,
            "normal" => &mut self.normal,
            "pre-fingered" => &mut self.pre_fingered,
            "empty-string" => &mut self.empty_string,
            "muted-string" => &mut self.muted_string,
            _ => return None,
        };
        Some(slot)
    }
}

/// Split a comma-separated option value the way the command line gives it.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(String::from).collect()
}

fn type_error(name: &str, expected: &'static str) -> ChordError {
    ChordError::OptionType {
        name: name.to_string(),
        expected,
    }
}

fn expect_text(name: &str, value: OptionValue) -> Result<String, ChordError> {
    match value {
        OptionValue::Text(s) => Ok(s),
        _ => Err(type_error(name, "a string")),
    }
}

fn expect_flag(name: &str, value: OptionValue) -> Result<bool, ChordError> {
    match value {
        OptionValue::Flag(b) => Ok(b),
        _ => Err(type_error(name, "a flag")),
    }
}

fn expect_length(name: &str, value: OptionValue) -> Result<u32, ChordError> {
    let n = match value {
        OptionValue::Integer(n) => n,
        OptionValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| type_error(name, "an integer"))?,
        _ => return Err(type_error(name, "an integer")),
    };
    // Anything below 1 means auto-size, as on the command line.
    if n < 1 {
        return Ok(0);
    }
    u32::try_from(n).map_err(|_| type_error(name, "an integer"))
}

fn expect_list(name: &str, value: OptionValue) -> Result<Vec<String>, ChordError> {
    match value {
        OptionValue::List(items) => Ok(items),
        OptionValue::Text(s) => Ok(split_list(&s)),
        _ => Err(type_error(name, "a list of strings")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_six_string_guitar() {
        let config = ChordConfig::default();
        assert_eq!(config.string_count(), 6);
        assert_eq!(config.fingers.len(), 5);
        assert_eq!(config.fingers[0], "#j");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn set_accepts_comma_separated_lists() {
        let mut config = ChordConfig::default();
        config
            .set("strings", OptionValue::Text("G,C,E,A".to_string()))
            .unwrap();
        assert_eq!(config.strings, vec!["G", "C", "E", "A"]);
    }

    #[test]
    fn set_rejects_unknown_and_mistyped_options() {
        let mut config = ChordConfig::default();
        assert_eq!(
            config.set("capo", OptionValue::Integer(2)),
            Err(ChordError::UnknownOption("capo".to_string()))
        );
        assert!(matches!(
            config.set("hide-brief", OptionValue::Text("yes".to_string())),
            Err(ChordError::OptionType { .. })
        ));
    }

    #[test]
    fn negative_length_means_auto() {
        let mut config = ChordConfig::default();
        config.set("length", OptionValue::Integer(-3)).unwrap();
        assert_eq!(config.length, 0);
    }

    #[test]
    fn get_covers_every_option_name() {
        let config = ChordConfig::default();
        for name in ChordConfig::option_names() {
            assert!(config.get(name).is_some(), "missing getter for {name}");
        }
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn set_then_get_round_trips_text() {
        let mut config = ChordConfig::default();
        config
            .set("muted-string", OptionValue::Text("xx".to_string()))
            .unwrap();
        assert_eq!(
            config.get("muted-string"),
            Some(OptionValue::Text("xx".to_string()))
        );
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = ChordConfig::from_json(r#"{"length": 4, "hide-brief": true}"#).unwrap();
        assert_eq!(config.length, 4);
        assert!(config.hide_brief);
        assert_eq!(config.numbers, "jabcdefghi");
    }

    #[test]
    fn short_numeral_alphabet_is_rejected() {
        let config = ChordConfig {
            numbers: "0123".to_string(),
            ..ChordConfig::default()
        };
        assert_eq!(config.validate(), Err(ChordError::InvalidNumerals(4)));
    }

    #[test]
    fn overlong_neck_is_rejected() {
        let config = ChordConfig {
            length: MAX_NECK_LENGTH + 1,
            ..ChordConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ChordError::NeckTooLong {
                length: MAX_NECK_LENGTH + 1,
                max: MAX_NECK_LENGTH
            })
        );
    }

    #[test]
    fn json_round_trip_keeps_every_option() {
        let mut config = ChordConfig::default();
        config.set("length", OptionValue::Integer(7)).unwrap();
        config.set("extended-brief", OptionValue::Flag(true)).unwrap();
        config
            .set("strings", OptionValue::Text("⠛,⠉,⠑,⠁".to_string()))
            .unwrap();
        config
            .set("empty", OptionValue::Text("⠒⠒".to_string()))
            .unwrap();

        let json = config.to_json().unwrap();
        assert!(json.contains("\"extended-brief\": true"));
        assert_eq!(ChordConfig::from_json(&json).unwrap(), config);
    }
}
