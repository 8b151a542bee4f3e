//! Error type shared by the resolver, the configuration layer and the facade.

use thiserror::Error;

/// Everything that can go wrong between raw input and a rendered diagram.
///
/// Rendering itself never fails; every variant comes from validating
/// markings or configuration before the renderer runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Token did not split into 1–3 `.`-separated parts.
    #[error("Malformed marking: {0:?} (expected string[.fret[.finger]])")]
    MalformedMarking(String),

    #[error("Invalid string number: {0:?}.")]
    InvalidString(String),

    #[error("Invalid finger number: {0:?}.")]
    InvalidFinger(String),

    #[error("Invalid fret number: {0:?}.")]
    InvalidFret(String),

    /// Fret beyond a fixed neck length, or beyond the longest neck drawn.
    #[error("Fret {fret} is out of range (neck length {length}).")]
    FretOutOfRange { fret: u32, length: u32 },

    #[error("Frets are numbered from 1; fret 0 is not on the neck.")]
    FretZero,

    #[error("Neck length {length} exceeds the maximum of {max} frets.")]
    NeckTooLong { length: u32, max: u32 },

    #[error("A finger cannot be given without a fret.")]
    FingerWithoutFret,

    #[error("Numeral alphabet must have exactly 10 characters, got {0}.")]
    InvalidNumerals(usize),

    #[error("Unknown option: {0:?}.")]
    UnknownOption(String),

    #[error("Option {name:?} expects {expected}.")]
    OptionType { name: String, expected: &'static str },

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ChordError {
    fn from(e: serde_json::Error) -> Self {
        ChordError::Json(e.to_string())
    }
}
