// version data structures

use super::parser::parse_version;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// a strict three-part release version (major.minor.patch)
///
/// field order matters: the derived ordering compares major, then minor,
/// then patch, each numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// the baseline used when no release has been tagged yet
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s).ok_or_else(|| Error::MalformedVersion {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let version = SemanticVersion::new(1, 2, 3);
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_from_str_error() {
        let err = "1.2".parse::<SemanticVersion>().unwrap_err();
        assert!(matches!(err, Error::MalformedVersion { ref input } if input == "1.2"));
    }

    #[test]
    fn test_ordering_major_dominates() {
        assert!(SemanticVersion::new(2, 0, 0) > SemanticVersion::new(1, 99, 99));
        assert!(SemanticVersion::new(0, 2, 0) > SemanticVersion::new(0, 1, 9));
        assert!(SemanticVersion::zero() < SemanticVersion::new(0, 0, 1));
    }
}
