//! Dotted numeric version type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{CoreError, Result};

/// Maximum number of version segments
pub const MAX_VERSION_SEGMENTS: usize = 10;

/// A dotted numeric version like "1", "0.2" or "1.0.3".
///
/// Comparison ignores trailing zero segments, so "1.0" equals "1". The
/// original input segmentation is preserved for display.
#[derive(Clone, Debug)]
pub struct Version(Vec<u32>);

impl Version {
    /// Parse a version from raw (UI) input, e.g. "0.1" or " 2.5.0 ".
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidVersion { input: input.to_string() };
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }
        let mut segments = Vec::new();
        for segment in trimmed.split('.') {
            if segment.is_empty() || segment.len() > 9 || !segment.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            segments.push(segment.parse::<u32>().map_err(|_| invalid())?);
        }
        if segments.len() > MAX_VERSION_SEGMENTS {
            return Err(invalid());
        }
        Ok(Self(segments))
    }

    /// Segments with trailing zeros stripped; this is what comparisons use
    fn normalized(&self) -> &[u32] {
        let mut len = self.0.len();
        while len > 0 && self.0[len - 1] == 0 {
            len -= 1;
        }
        &self.0[..len]
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(other.normalized())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
