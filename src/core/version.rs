//! PEP 440 version handling.
//!
//! Versions and specifiers are parsed with `pep440_rs`; this module adds the
//! small amount of glue the matrix needs on top: minor-series keys,
//! lower/upper bound classification and error mapping.

use std::fmt;
use std::str::FromStr;

use pep440_rs::{Operator, VersionSpecifier};
use serde::{Serialize, Serializer};

pub use pep440_rs::{Version, VersionSpecifiers};

use crate::core::errors::MatrixError;

/// A `major.minor` series key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorSeries {
    pub major: u64,
    pub minor: u64,
}

impl MinorSeries {
    pub fn new(major: u64, minor: u64) -> Self {
        MinorSeries { major, minor }
    }

    /// Truncate a version to its minor series.
    ///
    /// Missing release segments count as zero, so `3` is series `3.0`.
    pub fn of(version: &Version) -> Self {
        let release = version.release();
        MinorSeries {
            major: release.first().copied().unwrap_or(0),
            minor: release.get(1).copied().unwrap_or(0),
        }
    }
}

impl fmt::Display for MinorSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for MinorSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a version string.
pub fn parse_version(s: &str) -> Result<Version, MatrixError> {
    Version::from_str(s.trim()).map_err(|e| MatrixError::InvalidVersion {
        input: s.to_string(),
        message: e.to_string(),
    })
}

/// Parse a comma-separated specifier set such as `>=3.9, !=3.9.1`.
pub fn parse_specifiers(s: &str) -> Result<VersionSpecifiers, MatrixError> {
    VersionSpecifiers::from_str(s.trim()).map_err(|e| MatrixError::InvalidSpecifier {
        input: s.to_string(),
        message: e.to_string(),
    })
}

/// Whether the version is an alpha, beta, candidate or dev release.
pub fn is_prerelease(version: &Version) -> bool {
    version.any_prerelease()
}

/// Whether a clause puts an upper limit on the allowed versions.
pub fn is_upper_bound(specifier: &VersionSpecifier) -> bool {
    matches!(
        specifier.operator(),
        Operator::LessThan | Operator::LessThanEqual
    )
}

/// Whether a clause establishes a minimum allowed version.
///
/// `~=` and `==` pin from below as well as above; they still name the
/// smallest admissible release.
pub fn is_lower_bound(specifier: &VersionSpecifier) -> bool {
    matches!(
        specifier.operator(),
        Operator::GreaterThan
            | Operator::GreaterThanEqual
            | Operator::TildeEqual
            | Operator::Equal
            | Operator::ExactEqual
    )
}

/// Whether a clause is a plain `>=` or `>` comparison.
pub fn is_strict_lower_bound(specifier: &VersionSpecifier) -> bool {
    matches!(
        specifier.operator(),
        Operator::GreaterThan | Operator::GreaterThanEqual
    )
}
