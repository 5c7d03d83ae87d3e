use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated short code identifier for a shortened URL.
///
/// Short codes are prefixes of a lowercase hexadecimal digest, so they must
/// be 1-32 characters long and contain only `[0-9a-f]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

const MIN_LENGTH: usize = 1;
/// Length of a hex-encoded 128-bit digest.
pub const MAX_LENGTH: usize = 32;

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only lowercase hex digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for ShortCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(value: ShortCode) -> Self {
        value.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("c984d06a").is_ok());
        assert!(ShortCode::new("0").is_ok());
        assert!(ShortCode::new("f".repeat(32)).is_ok());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(ShortCode::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("C984D06A").is_err());
        assert!(ShortCode::new("c984d06g").is_err());
        assert!(ShortCode::new("abc/def").is_err());
        assert!(ShortCode::new("abc def").is_err());
    }

    #[test]
    fn display() {
        let code = ShortCode::new("5a105e8b").unwrap();
        assert_eq!(code.to_string(), "5a105e8b");
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new("5a105e8b").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"5a105e8b\"");
    }

    #[test]
    fn deserialization_validates() {
        let code: ShortCode = serde_json::from_str("\"5a105e8b\"").unwrap();
        assert_eq!(code.as_str(), "5a105e8b");

        assert!(serde_json::from_str::<ShortCode>("\"not-hex\"").is_err());
    }
}
