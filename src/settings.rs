use crate::data_normalizer::try_canonicalize;
use crate::error::NormalizeError;
use crate::phone::PhoneNumber;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a [`Normalizer`] treats invalid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Invalid input becomes the sentinel number.
    #[default]
    Lenient,
    /// Invalid input is returned as a [`NormalizeError`].
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: ValidationMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Lenient,
        }
    }
}

impl Settings {
    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
        }
    }

    /// Reads settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Applies [`Settings`] to raw phone numbers.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    settings: Settings,
}

impl Normalizer {
    pub fn new(settings: Settings) -> Self {
        debug!(mode = ?settings.mode, "normalizer_created");
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Never errors in lenient mode.
    pub fn normalize(&self, raw: &str) -> Result<PhoneNumber, NormalizeError> {
        match self.settings.mode {
            ValidationMode::Lenient => Ok(PhoneNumber::parse(raw)),
            ValidationMode::Strict => try_canonicalize(raw).map(PhoneNumber::from),
        }
    }
}
