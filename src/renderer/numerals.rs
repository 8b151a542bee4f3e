//! Numeral transliteration — decimal numbers spelled in the configured
//! alphabet (braille letters a–j by default) behind a number sign.

use crate::config::ChordConfig;

/// Digit alphabet captured from a validated config.
pub(super) struct Numerals<'a> {
    sign: &'a str,
    digits: Vec<char>,
}

impl<'a> Numerals<'a> {
    pub(super) fn new(config: &'a ChordConfig) -> Self {
        Self {
            sign: &config.number_sign,
            digits: config.numbers.chars().collect(),
        }
    }

    pub(super) fn spell(&self, n: u32) -> String {
        let mut out = String::from(self.sign);
        for d in n.to_string().bytes() {
            let idx = usize::from(d - b'0');
            // Short alphabets are rejected by ChordConfig::validate; fall back to the digit.
            out.push(self.digits.get(idx).copied().unwrap_or(char::from(d)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braille_digits() {
        let config = ChordConfig::default();
        let numerals = Numerals::new(&config);
        assert_eq!(numerals.spell(12), "#ab");
        assert_eq!(numerals.spell(3), "#c");
        assert_eq!(numerals.spell(10), "#aj");
    }

    #[test]
    fn custom_alphabet_and_sign() {
        let config = ChordConfig {
            numbers: "0123456789".to_string(),
            number_sign: String::new(),
            ..ChordConfig::default()
        };
        assert_eq!(Numerals::new(&config).spell(407), "407");
    }

    #[test]
    fn multibyte_alphabet() {
        let config = ChordConfig {
            numbers: "⠚⠁⠃⠉⠙⠑⠋⠛⠓⠊".to_string(),
            number_sign: "⠼".to_string(),
            ..ChordConfig::default()
        };
        assert_eq!(Numerals::new(&config).spell(5), "⠼⠑");
    }
}
