//! PEP 508 requirement strings as they appear in `Requires-Dist`.
//!
//! Only the parts the matrix needs are modelled: the distribution name,
//! extras, version clauses in declared order, and the raw marker text.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use pep440_rs::VersionSpecifier;
use regex::Regex;

use crate::core::errors::MatrixError;

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)
        \s*
        (?:\[(?P<extras>[^\]]*)\])?
        \s*
        (?P<version>[^;]*?)
        \s*
        (?:;\s*(?P<marker>.*?))?
        \s*$",
    )
    .expect("requirement regex is valid")
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)")
        .expect("name regex is valid")
});

static EXTRA_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bextra\b").expect("extra marker regex is valid"));

static NAME_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("name separator regex is valid"));

/// Normalize a distribution name (PEP 503): lowercase, runs of `-_.` become `-`.
pub fn normalize_name(name: &str) -> String {
    NAME_SEPARATOR_RE
        .replace_all(&name.to_ascii_lowercase(), "-")
        .into_owned()
}

/// The distribution name a requirement string starts with, without parsing
/// the rest of it.
pub fn requirement_name(raw: &str) -> Option<&str> {
    NAME_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A parsed dependency requirement, e.g. `numpy<2.5,>=1.25.2; python_version>="3.10"`.
#[derive(Debug, Clone)]
pub struct Requirement {
    name: String,
    extras: Vec<String>,
    specifiers: Vec<VersionSpecifier>,
    url: Option<String>,
    marker: Option<String>,
}

impl Requirement {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    /// Version clauses in the order they were written.
    pub fn specifiers(&self) -> &[VersionSpecifier] {
        &self.specifiers
    }

    /// Direct reference (`name @ url`), if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// Whether the requirement only applies when an extra is selected.
    pub fn is_extra_gated(&self) -> bool {
        self.marker
            .as_deref()
            .is_some_and(|m| EXTRA_MARKER_RE.is_match(m))
    }
}

impl FromStr for Requirement {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| MatrixError::InvalidRequirement {
            input: s.to_string(),
            message: message.to_string(),
        };

        let caps = REQUIREMENT_RE
            .captures(s)
            .ok_or_else(|| invalid("expected a distribution name"))?;

        let name = caps["name"].to_string();

        let extras = caps
            .name("extras")
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let marker = caps
            .name("marker")
            .map(|m| m.as_str().trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let version = caps.name("version").map_or("", |m| m.as_str()).trim();

        let (specifiers, url) = if let Some(url) = version.strip_prefix('@') {
            let url = url.trim();
            if url.is_empty() {
                return Err(invalid("missing URL after `@`"));
            }
            (Vec::new(), Some(url.to_string()))
        } else {
            // Legacy form wraps the clauses in parentheses: `numpy (>=1.25)`
            let version = match version.strip_prefix('(') {
                Some(inner) => inner
                    .strip_suffix(')')
                    .ok_or_else(|| invalid("unbalanced parentheses"))?,
                None => version,
            };
            (parse_clauses(version).map_err(|e| invalid(&e))?, None)
        };

        Ok(Requirement {
            name,
            extras,
            specifiers,
            url,
            marker,
        })
    }
}

fn parse_clauses(s: &str) -> Result<Vec<VersionSpecifier>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(|clause| VersionSpecifier::from_str(clause).map_err(|e| e.to_string()))
        .collect()
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        if let Some(url) = &self.url {
            write!(f, " @ {}", url)?;
        } else {
            let clauses: Vec<String> = self.specifiers.iter().map(|s| s.to_string()).collect();
            write!(f, "{}", clauses.join(","))?;
        }
        if let Some(marker) = &self.marker {
            write!(f, "; {}", marker)?;
        }
        Ok(())
    }
}
