//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Optional `+`, a non-zero leading digit, then up to 15 more digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap()
});

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input is empty once whitespace is removed.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input is not a plain digit sequence.
    #[error("phone number must be digits with an optional leading +")]
    InvalidFormat,
}

/// A phone number in compact form (whitespace removed).
///
/// Formatting whitespace such as `+1 555 010 9999` is accepted and stripped;
/// dashes and parentheses are not.
///
/// ```
/// use textile_core::PhoneNumber;
///
/// assert_eq!(PhoneNumber::parse("+1 555 010 9999").unwrap().as_str(), "+15550109999");
/// assert!(PhoneNumber::parse("0123").is_err());
/// assert!(PhoneNumber::parse("555-0109").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::Empty`] for blank input and
    /// [`PhoneError::InvalidFormat`] when the compacted value does not match.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        if compact.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !PHONE_PATTERN.is_match(&compact) {
            return Err(PhoneError::InvalidFormat);
        }

        Ok(Self(compact))
    }

    /// Returns the compact phone number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("5550109999").is_ok());
        assert!(PhoneNumber::parse("+447911123456").is_ok());
        assert!(PhoneNumber::parse("7").is_ok());
    }

    #[test]
    fn test_parse_strips_whitespace() {
        let phone = PhoneNumber::parse(" +1 555\t010 9999 ").unwrap();
        assert_eq!(phone.as_str(), "+15550109999");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PhoneNumber::parse("   "), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_leading_zero() {
        assert_eq!(PhoneNumber::parse("0555"), Err(PhoneError::InvalidFormat));
    }

    #[test]
    fn test_parse_too_long() {
        // 1 leading digit + 16 more is one over the limit
        assert!(PhoneNumber::parse("12345678901234567").is_err());
        assert!(PhoneNumber::parse("1234567890123456").is_ok());
    }

    #[test]
    fn test_parse_punctuation() {
        assert_eq!(
            PhoneNumber::parse("(555) 010-9999"),
            Err(PhoneError::InvalidFormat)
        );
        assert_eq!(PhoneNumber::parse("++15"), Err(PhoneError::InvalidFormat));
    }
}
