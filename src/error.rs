use thiserror::Error;

/// Reasons a raw phone number fails validation.
///
/// Only the strict API surfaces these; the lenient functions map every one of
/// them to the sentinel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("phone number contains letters")]
    ContainsLetters,
    #[error("invalid phone number length: {0}")]
    InvalidLength(usize),
    #[error("unsupported country code prefix: {0}")]
    InvalidCountryCode(char),
}
