#![forbid(unsafe_code)]

mod field;

pub use field::ShareField;

use crate::fraction::{is_valid_fraction, parse_fraction};

/// Upper bound applied to share input when the caller does not supply one.
pub const MAX_SHARE: f64 = 1.0;

/// Textual rendering of a share input: plain decimal or "n/d".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    #[default]
    Decimal,
    Fraction,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Decimal => "decimal",
            InputMode::Fraction => "fraction",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareInputError {
    ValueRequired,
    InvalidFractionFormat,
    NotANumber,
    OutOfRange,
}

impl ShareInputError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValueRequired => "VALUE_REQUIRED",
            Self::InvalidFractionFormat => "INVALID_FRACTION_FORMAT",
            Self::NotANumber => "NOT_A_NUMBER",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ValueRequired => "value is required",
            Self::InvalidFractionFormat => "invalid fraction format (e.g. 3/4)",
            Self::NotANumber => "invalid number",
            Self::OutOfRange => "value is out of range",
        }
    }
}

impl std::fmt::Display for ShareInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ShareInputError {}

/// The composite policy behind share input controls. Empty text is a valid
/// "no value" unless `required`. In fraction mode only the strict
/// "digits/digits" form is accepted; decimal mode takes anything the float
/// parse takes. Values above `max_value` are rejected; there is no explicit
/// lower bound.
pub fn validate_share_input(
    text: &str,
    required: bool,
    mode: InputMode,
    max_value: f64,
) -> Result<Option<f64>, ShareInputError> {
    let text = text.trim();
    if text.is_empty() {
        if required {
            return Err(ShareInputError::ValueRequired);
        }
        return Ok(None);
    }

    match mode {
        InputMode::Fraction => {
            if !is_valid_fraction(text) {
                return Err(ShareInputError::InvalidFractionFormat);
            }
            let parsed = parse_fraction(text);
            if parsed > max_value {
                return Err(ShareInputError::OutOfRange);
            }
            Ok(Some(parsed))
        }
        InputMode::Decimal => {
            let Ok(parsed) = text.parse::<f64>() else {
                return Err(ShareInputError::NotANumber);
            };
            if parsed.is_nan() {
                return Err(ShareInputError::NotANumber);
            }
            if parsed > max_value {
                return Err(ShareInputError::OutOfRange);
            }
            Ok(Some(parsed))
        }
    }
}
