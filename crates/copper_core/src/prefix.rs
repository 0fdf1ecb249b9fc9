//! Validated component designator prefix

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Result};

/// Maximum length of a designator prefix
pub const MAX_PREFIX_LEN: usize = 16;

/// Designator prefix of a component, e.g. "R" for resistors or "C" for
/// capacitors. Only ASCII letters and underscores are allowed; an empty
/// prefix is invalid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= MAX_PREFIX_LEN
            && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid {
            return Err(CoreError::InvalidPrefix { prefix: input.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Prefix {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
