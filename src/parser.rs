//! Marking parser — turns `string[.fret[.finger]]` tokens into `Marking`s.
//!
//! Parsing checks ids against the instrument (string count, finger list) but
//! not frets against the neck; that depends on the running neck length and
//! happens in the resolver. Fret 0 parses here and is rejected there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ChordConfig;
use crate::error::ChordError;

/// One parsed marking. `fret == None` mutes the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marking {
    /// 1-based string id
    pub string: usize,
    pub fret: Option<u32>,
    /// 0-based index into the finger list
    pub finger: Option<usize>,
}

impl Marking {
    /// 0-based string index.
    pub fn string_index(&self) -> usize {
        self.string - 1
    }

    pub fn is_mute(&self) -> bool {
        self.fret.is_none()
    }

    /// Build a marking from the three fields an editor collects separately.
    /// Blank fields are absent.
    pub fn compose(string: &str, fret: &str, finger: &str) -> Result<Self, ChordError> {
        let (string, fret, finger) = (string.trim(), fret.trim(), finger.trim());
        if string.is_empty() {
            return Err(ChordError::InvalidString(string.to_string()));
        }
        if fret.is_empty() && !finger.is_empty() {
            return Err(ChordError::FingerWithoutFret);
        }
        let string = parse_string_id(string)?;
        let finger = match finger {
            "" => None,
            f => Some(f.parse::<usize>().map_err(|_| ChordError::InvalidFinger(f.to_string()))?),
        };
        let fret = match fret {
            "" => None,
            f => Some(parse_fret(f)?),
        };
        Ok(Self { string, fret, finger })
    }

    /// The token form accepted by `parse_marking`.
    pub fn token(&self) -> String {
        match (self.fret, self.finger) {
            (None, _) => self.string.to_string(),
            (Some(fret), None) => format!("{}.{fret}", self.string),
            (Some(fret), Some(finger)) => format!("{}.{fret}.{finger}", self.string),
        }
    }

    /// Plain-language wording for marking lists.
    pub fn describe(&self) -> String {
        match (self.fret, self.finger) {
            (None, _) => format!("Don't play string {}.", self.string),
            (Some(fret), None) => format!("String {}, fret {fret}, any finger.", self.string),
            (Some(fret), Some(finger)) => {
                format!("String {}, fret {fret}, finger {finger}.", self.string)
            }
        }
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Parse and validate a single marking token against the instrument.
///
/// Checks run string → finger → fret and the first failure is returned.
pub fn parse_marking(token: &str, config: &ChordConfig) -> Result<Marking, ChordError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() > 3 {
        return Err(ChordError::MalformedMarking(token.to_string()));
    }

    let string = parse_string_id(parts[0])?;
    if string > config.string_count() {
        return Err(ChordError::InvalidString(parts[0].to_string()));
    }

    let finger = match parts.get(2) {
        Some(raw) => {
            let id = raw
                .parse::<usize>()
                .map_err(|_| ChordError::InvalidFinger(raw.to_string()))?;
            if id >= config.fingers.len() {
                return Err(ChordError::InvalidFinger(raw.to_string()));
            }
            Some(id)
        }
        None => None,
    };

    let fret = match parts.get(1) {
        Some(raw) => Some(parse_fret(raw)?),
        None => None,
    };

    Ok(Marking { string, fret, finger })
}

/// 1-based string id; 0 and non-numbers are invalid.
fn parse_string_id(raw: &str) -> Result<usize, ChordError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ChordError::InvalidString(raw.to_string())),
    }
}

fn parse_fret(raw: &str) -> Result<u32, ChordError> {
    raw.parse::<u32>()
        .map_err(|_| ChordError::InvalidFret(raw.to_string()))
}
