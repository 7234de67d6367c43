use crate::data_normalizer::{canonicalize, format_pretty, split_canonical, try_canonicalize, SENTINEL};
use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized North American phone number.
///
/// Always holds exactly 10 characters: either a valid canonical number or
/// [`SENTINEL`]. Serialized as the bare canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PhoneNumber {
    canonical: String,
}

impl PhoneNumber {
    /// Lenient parse; invalid input yields the sentinel number.
    pub fn parse(raw: &str) -> Self {
        Self {
            canonical: canonicalize(raw),
        }
    }

    pub fn invalid() -> Self {
        Self {
            canonical: SENTINEL.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn area_code(&self) -> &str {
        split_canonical(&self.canonical).0
    }

    pub fn exchange(&self) -> &str {
        split_canonical(&self.canonical).1
    }

    pub fn subscriber(&self) -> &str {
        split_canonical(&self.canonical).2
    }

    pub fn pretty(&self) -> String {
        format_pretty(&self.canonical)
    }

    /// True for the invalid marker. A literal "0000000000" input is
    /// indistinguishable from rejected input.
    pub fn is_sentinel(&self) -> bool {
        self.canonical == SENTINEL
    }
}

impl FromStr for PhoneNumber {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_canonicalize(s).map(|canonical| Self { canonical })
    }
}

impl From<String> for PhoneNumber {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.canonical
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
