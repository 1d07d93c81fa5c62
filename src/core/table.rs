//! Minimum version pairs between the interpreter and the library.

use serde::{Deserialize, Serialize};

use crate::core::errors::MatrixError;
use crate::core::version::{parse_version, Version};

/// One policy rule: interpreters at or above `python` need the library at or
/// above `library`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinVersionPair {
    pub python: Version,
    pub library: Version,
}

impl MinVersionPair {
    pub fn new(python: Version, library: Version) -> Self {
        MinVersionPair { python, library }
    }

    /// Whether the combination breaks this rule.
    pub fn is_violated_by(&self, python: &Version, library: &Version) -> bool {
        python >= &self.python && library < &self.library
    }
}

/// Serialized form used in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinVersionPairSpec {
    pub python: String,
    pub library: String,
}

/// Ordered, read-only compatibility table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinVersionPairTable {
    pairs: Vec<MinVersionPair>,
}

/// Built-in pairs for NumPy: first releases with wheels for each CPython.
pub const DEFAULT_MIN_VERSIONS: &[(&str, &str)] = &[("3.11", "1.25"), ("3.12", "1.26"), ("3.13", "2.1")];

impl MinVersionPairTable {
    pub fn new(pairs: Vec<MinVersionPair>) -> Self {
        MinVersionPairTable { pairs }
    }

    pub fn from_specs(specs: &[MinVersionPairSpec]) -> Result<Self, MatrixError> {
        let pairs = specs
            .iter()
            .map(|spec| {
                Ok(MinVersionPair::new(
                    parse_version(&spec.python)?,
                    parse_version(&spec.library)?,
                ))
            })
            .collect::<Result<Vec<_>, MatrixError>>()?;
        Ok(MinVersionPairTable::new(pairs))
    }

    pub fn pairs(&self) -> &[MinVersionPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Smallest interpreter version any rule mentions.
    pub fn min_python(&self) -> Option<&Version> {
        self.pairs.iter().map(|p| &p.python).min()
    }

    /// Whether the combination satisfies every rule.
    pub fn allows(&self, python: &Version, library: &Version) -> bool {
        !self.pairs.iter().any(|p| p.is_violated_by(python, library))
    }
}

impl Default for MinVersionPairTable {
    fn default() -> Self {
        let pairs = DEFAULT_MIN_VERSIONS
            .iter()
            .filter_map(|(python, library)| {
                Some(MinVersionPair::new(
                    parse_version(python).ok()?,
                    parse_version(library).ok()?,
                ))
            })
            .collect();
        MinVersionPairTable::new(pairs)
    }
}
