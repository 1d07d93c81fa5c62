//! Records read from the package index and the interpreter lister.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::metadata::PackageMetadata;

/// One distribution file of a release on the package index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub requires_python: Option<String>,
}

/// A library release: its version string and distribution files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub version: String,
    pub files: Vec<FileInfo>,
}

impl ReleaseRecord {
    pub fn new(version: impl Into<String>, files: Vec<FileInfo>) -> Self {
        ReleaseRecord {
            version: version.into(),
            files,
        }
    }

    /// First non-empty `requires_python` declared by any file.
    pub fn requires_python(&self) -> Option<&str> {
        self.files
            .iter()
            .filter_map(|f| f.requires_python.as_deref())
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// The package index JSON document (`/pypi/<name>/json`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexDocument {
    #[serde(default)]
    pub info: Option<PackageMetadata>,

    /// Version string to file list, in document order.
    #[serde(default)]
    pub releases: serde_json::Map<String, serde_json::Value>,
}

impl IndexDocument {
    /// Interpret a fetched JSON value as an index document.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        IndexDocument::deserialize(value).context("unexpected package index document shape")
    }

    /// Releases in document order.
    pub fn releases(&self) -> Result<Vec<ReleaseRecord>> {
        self.releases
            .iter()
            .map(|(version, files)| {
                let files = Vec::<FileInfo>::deserialize(files)
                    .with_context(|| format!("invalid file list for release {version}"))?;
                Ok(ReleaseRecord::new(version.clone(), files))
            })
            .collect()
    }
}

/// `major.minor.patch` as reported by the interpreter lister.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionParts {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// One entry of `uv python list --output-format=json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonRelease {
    #[serde(default)]
    pub key: Option<String>,
    pub version: String,
    #[serde(default)]
    pub version_parts: Option<VersionParts>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub symlink: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub variant: String,
    pub implementation: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub libc: String,
}

impl PythonRelease {
    /// Whether this is a default build of the reference implementation.
    pub fn is_default_cpython(&self) -> bool {
        self.implementation.eq_ignore_ascii_case("cpython") && self.variant == "default"
    }
}

/// Parse the interpreter lister's JSON output.
pub fn parse_python_list(json: &str) -> Result<Vec<PythonRelease>> {
    serde_json::from_str(json).context("failed to parse interpreter list JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_python_first_non_empty() {
        let release = ReleaseRecord::new(
            "1.26.4",
            vec![
                FileInfo {
                    filename: Some("a.tar.gz".to_string()),
                    requires_python: None,
                },
                FileInfo {
                    filename: Some("b.whl".to_string()),
                    requires_python: Some("".to_string()),
                },
                FileInfo {
                    filename: Some("c.whl".to_string()),
                    requires_python: Some(">=3.9".to_string()),
                },
            ],
        );
        assert_eq!(release.requires_python(), Some(">=3.9"));

        let empty = ReleaseRecord::new("0.1", Vec::new());
        assert_eq!(empty.requires_python(), None);
    }

    #[test]
    fn test_index_document_order() {
        let value: serde_json::Value = serde_json::from_str(
            r#"{
                "info": {"name": "numpy", "requires_python": ">=3.10"},
                "releases": {
                    "2.1.0": [{"requires_python": ">=3.10"}],
                    "1.26.0": [],
                    "1.25.2": [{"filename": "x.whl", "requires_python": null}]
                }
            }"#,
        )
        .unwrap();

        let doc = IndexDocument::from_value(&value).unwrap();
        let releases = doc.releases().unwrap();
        let versions: Vec<_> = releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, ["2.1.0", "1.26.0", "1.25.2"]);
        assert_eq!(doc.info.unwrap().name, "numpy");
    }

    #[test]
    fn test_parse_python_list() {
        let json = r#"[
            {
                "key": "cpython-3.13.1-linux-x86_64-gnu",
                "version": "3.13.1",
                "version_parts": {"major": 3, "minor": 13, "patch": 1},
                "path": null,
                "symlink": null,
                "url": "https://example.com/cpython.tar.gz",
                "os": "linux",
                "variant": "default",
                "implementation": "cpython",
                "arch": "x86_64",
                "libc": "gnu"
            },
            {
                "version": "3.13.1",
                "os": "linux",
                "variant": "freethreaded",
                "implementation": "cpython",
                "arch": "x86_64",
                "libc": "gnu"
            }
        ]"#;

        let releases = parse_python_list(json).unwrap();
        assert_eq!(releases.len(), 2);
        assert!(releases[0].is_default_cpython());
        assert!(!releases[1].is_default_cpython());
        assert_eq!(releases[0].version_parts.unwrap().minor, 13);
    }
}
