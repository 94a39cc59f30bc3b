#![forbid(unsafe_code)]

use super::{InputMode, MAX_SHARE, ShareInputError, validate_share_input};
use crate::fraction::{format_fraction, parse_fraction};

/// Editing state of one share input: active mode, raw text, and the last
/// committed value. An invalid string may exist transiently while editing;
/// mode is independent of validity.
#[derive(Clone, Debug)]
pub struct ShareField {
    mode: InputMode,
    text: String,
    value: Option<f64>,
    error: Option<ShareInputError>,
    required: bool,
    max_value: f64,
}

impl ShareField {
    pub fn new(required: bool) -> Self {
        Self::with_max_value(required, MAX_SHARE)
    }

    pub fn with_max_value(required: bool, max_value: f64) -> Self {
        Self {
            mode: InputMode::default(),
            text: String::new(),
            value: None,
            error: None,
            required,
            max_value,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last successfully committed value.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn error(&self) -> Option<ShareInputError> {
        self.error
    }

    /// Applies an edit to the raw text and revalidates. Empty input clears
    /// the committed value; any other failed validation keeps it.
    pub fn set_text(&mut self, input: &str) {
        let trimmed = input.trim();
        self.text = trimmed.to_string();

        if trimmed.is_empty() {
            self.value = None;
            self.error = if self.required {
                Some(ShareInputError::ValueRequired)
            } else {
                None
            };
            return;
        }

        match validate_share_input(trimmed, self.required, self.mode, self.max_value) {
            Ok(value) => {
                self.value = value;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Switches between decimal and fraction rendering and re-renders the
    /// held text in the target mode. Text that does not parse falls back to
    /// the stringified raw parse result. Clears any validation error.
    pub fn toggle_mode(&mut self) {
        let parsed = parse_fraction(&self.text);
        if !self.text.is_empty() {
            self.text = if self.mode == InputMode::Fraction || parsed.is_nan() {
                parsed.to_string()
            } else {
                format_fraction(parsed)
            };
        }
        self.error = None;
        self.mode = match self.mode {
            InputMode::Decimal => InputMode::Fraction,
            InputMode::Fraction => InputMode::Decimal,
        };
    }

    /// Syncs a stored share into the field (an editor loading a record),
    /// rendering it in the active mode.
    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
        self.error = None;
        self.text = match value {
            None => String::new(),
            Some(v) => match self.mode {
                InputMode::Fraction => format_fraction(v),
                InputMode::Decimal => v.to_string(),
            },
        };
    }
}
