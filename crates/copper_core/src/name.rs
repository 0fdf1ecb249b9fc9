//! Validated element name

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Result};

/// Maximum length of an element name in characters
pub const MAX_NAME_LEN: usize = 100;

/// Human-readable name of a library element.
///
/// Guaranteed to be trimmed, non-empty, free of control characters and at
/// most [`MAX_NAME_LEN`] characters long.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementName(String);

impl ElementName {
    /// Parse a name from raw (UI) input. Surrounding whitespace is stripped.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN || trimmed.chars().any(char::is_control) {
            return Err(CoreError::InvalidElementName { name: input.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ElementName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let name = ElementName::parse("  C-0805  ").unwrap();
        assert_eq!(name.as_str(), "C-0805");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(ElementName::parse("").is_err());
        assert!(ElementName::parse("   ").is_err());
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(ElementName::parse("foo\nbar").is_err());
        assert!(ElementName::parse("foo\tbar").is_err());
    }

    #[test]
    fn test_too_long_name_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(ElementName::parse(&long).is_err());
        let ok = "x".repeat(MAX_NAME_LEN);
        assert!(ElementName::parse(&ok).is_ok());
    }
}
