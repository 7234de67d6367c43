use crate::error::NormalizeError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

/// Canonical value returned for any input that is not a valid NANP number.
pub const SENTINEL: &str = "0000000000";

const CANONICAL_LEN: usize = 10;
const PREFIXED_LEN: usize = 11;
const PLUS_PREFIXED_LEN: usize = 12;

lazy_static! {
    // Parentheses, dashes, dots and any whitespace. Nothing else is stripped.
    static ref FORMATTING_REGEX: Regex = Regex::new(r"[()\-.\s]").unwrap();
    static ref LETTER_REGEX: Regex = Regex::new(r"[A-Za-z]").unwrap();
}

/// Removes formatting characters from a raw phone number.
///
/// Only `(`, `)`, `-`, `.` and whitespace are dropped. Letters, `+`, `#` and
/// every other symbol are left in place for the later checks to see.
pub fn strip_formatting(raw: &str) -> String {
    FORMATTING_REGEX.replace_all(raw, "").into_owned()
}

/// Normalizes a North American phone number to its 10 character form.
///
/// Input examples:
/// - "(303) 555-1212"
/// - "+1 (303) 555-1212"
/// - "303.555.1212"
/// - "13035551212"
///
/// Never fails: anything invalid maps to [`SENTINEL`].
pub fn canonicalize(raw: &str) -> String {
    try_canonicalize(raw).unwrap_or_else(|_| SENTINEL.to_string())
}

/// Same as [`canonicalize`].
pub fn number(raw: &str) -> String {
    canonicalize(raw)
}

/// Strict form of [`canonicalize`] that reports why the input was rejected.
///
/// Accepts exactly what [`canonicalize`] accepts. A 10 character cleaned value
/// with no letters passes even if it holds symbols such as `#` or `*`.
/// The country code is a single leading `1`, optionally written as `+1`.
pub fn try_canonicalize(raw: &str) -> Result<String, NormalizeError> {
    let cleaned = strip_formatting(raw);
    trace!(raw, cleaned = %cleaned, "phone_cleaned");

    if LETTER_REGEX.is_match(&cleaned) {
        return reject(NormalizeError::ContainsLetters);
    }

    let len = cleaned.chars().count();
    match (len, cleaned.chars().next()) {
        (CANONICAL_LEN, _) => Ok(cleaned),
        (PREFIXED_LEN, Some('1')) => Ok(cleaned.chars().skip(1).collect()),
        (PREFIXED_LEN, Some(code)) => reject(NormalizeError::InvalidCountryCode(code)),
        (PLUS_PREFIXED_LEN, Some('+')) => match cleaned.strip_prefix("+1") {
            Some(rest) => Ok(rest.to_string()),
            None => reject(NormalizeError::InvalidCountryCode('+')),
        },
        _ => reject(NormalizeError::InvalidLength(len)),
    }
}

fn reject(err: NormalizeError) -> Result<String, NormalizeError> {
    debug!(reason = %err, "phone_rejected");
    Err(err)
}

/// Area code (first three characters) of the canonical number. `"000"` when invalid.
pub fn area_code(raw: &str) -> String {
    let canonical = canonicalize(raw);
    let (area, _, _) = split_canonical(&canonical);
    area.to_string()
}

/// Formats the canonical number as `"(AAA) EEE-SSSS"`.
pub fn pretty(raw: &str) -> String {
    format_pretty(&canonicalize(raw))
}

pub(crate) fn format_pretty(canonical: &str) -> String {
    let (area, exchange, subscriber) = split_canonical(canonical);
    format!("({}) {}-{}", area, exchange, subscriber)
}

/// Splits a canonical value at character offsets 3 and 6.
///
/// Offsets are counted in chars so that a multi-byte symbol carried through
/// the 10 character branch never lands a slice inside a code point.
pub(crate) fn split_canonical(canonical: &str) -> (&str, &str, &str) {
    let exchange_at = byte_offset(canonical, 3);
    let subscriber_at = byte_offset(canonical, 6);
    (
        &canonical[..exchange_at],
        &canonical[exchange_at..subscriber_at],
        &canonical[subscriber_at..],
    )
}

fn byte_offset(s: &str, nth_char: usize) -> usize {
    s.char_indices().nth(nth_char).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        let test_cases = vec![
            ("123-456-7890", "1234567890"),
            ("+1 (303) 555-1212", "3035551212"),
            ("(303) 555-1212", "3035551212"),
            ("303.555.1212", "3035551212"),
            ("11234567890", "1234567890"),
            ("1 303 555 1212", "3035551212"),
            ("867.5309", SENTINEL),
            ("21234567890", SENTINEL),
        ];

        for (input, expected) in test_cases {
            assert_eq!(canonicalize(input), expected, "Input: {}", input);
        }
    }

    #[test]
    fn test_strip_formatting_only_removes_listed_characters() {
        assert_eq!(strip_formatting("(303) 555-1212"), "3035551212");
        assert_eq!(strip_formatting("+1\t303\n555.1212"), "+13035551212");
        assert_eq!(strip_formatting("#*_/,"), "#*_/,");
        assert_eq!(strip_formatting("ab-cd"), "abcd");
    }

    #[test]
    fn test_letters_invalidate_before_length_check() {
        assert_eq!(canonicalize("1800FLOWERS"), SENTINEL);
        assert_eq!(canonicalize("303555121a"), SENTINEL);
        assert_eq!(
            try_canonicalize("1303555121z"),
            Err(NormalizeError::ContainsLetters)
        );
    }

    #[test]
    fn test_plus_sign_only_accepted_before_country_code() {
        assert_eq!(canonicalize("+13035551212"), "3035551212");
        assert_eq!(canonicalize("+1-303-555-1212"), "3035551212");
        assert_eq!(
            try_canonicalize("+23035551212"),
            Err(NormalizeError::InvalidCountryCode('+'))
        );
        assert_eq!(
            try_canonicalize("1+3035551212"),
            Err(NormalizeError::InvalidLength(12))
        );
        // Without the country code the plus is just another symbol.
        assert_eq!(
            try_canonicalize("+3035551212"),
            Err(NormalizeError::InvalidCountryCode('+'))
        );
    }

    #[test]
    fn test_symbols_pass_through_ten_char_branch() {
        assert_eq!(canonicalize("303#555*12"), "303#555*12");
        assert_eq!(try_canonicalize("303#555*12").as_deref(), Ok("303#555*12"));
    }

    #[test]
    fn test_strict_reasons() {
        assert_eq!(
            try_canonicalize("867.5309"),
            Err(NormalizeError::InvalidLength(7))
        );
        assert_eq!(
            try_canonicalize("21234567890"),
            Err(NormalizeError::InvalidCountryCode('2'))
        );
        assert_eq!(try_canonicalize(""), Err(NormalizeError::InvalidLength(0)));
    }

    #[test]
    fn test_area_code_and_pretty() {
        assert_eq!(area_code("(303) 555-1212"), "303");
        assert_eq!(area_code("not a number"), "000");
        assert_eq!(pretty("+1 303 555 1212"), "(303) 555-1212");
        assert_eq!(pretty("867.5309"), "(000) 000-0000");
    }

    #[test]
    fn test_multibyte_symbols_do_not_panic() {
        let canonical = canonicalize("3€5§551212");
        assert_eq!(canonical, "3€5§551212");
        assert_eq!(area_code("3€5§551212"), "3€5");
        assert_eq!(pretty("3€5§551212"), "(3€5) §55-1212");
    }

    #[test]
    fn test_number_matches_canonicalize() {
        for input in ["123-456-7890", "garbage", "", "1 (800) 555-0199"] {
            assert_eq!(number(input), canonicalize(input));
        }
    }
}
