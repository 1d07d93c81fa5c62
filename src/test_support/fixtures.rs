//! Test fixtures for common test scenarios.
//!
//! This module provides builders for index documents and interpreter
//! listings, plus sample core metadata.

use serde_json::{json, Map, Value};

use crate::core::release::{PythonRelease, VersionParts};

/// Core metadata of a scipy-like distribution.
pub const SCIPY_METADATA: &str = "Metadata-Version: 2.1
Name: scipy
Version: 1.15.0
Summary: Fundamental algorithms for scientific computing in Python
Requires-Python: >=3.11
Requires-Dist: numpy<2.5,>=1.25.2
Requires-Dist: pytest; extra == \"test\"
Requires-Dist: numpy>=2.0; extra == \"dev\"

SciPy (pronounced \"Sigh Pie\") is open-source software.
";

/// Builder for a `/pypi/<name>/json` document.
#[derive(Debug, Clone)]
pub struct IndexDocumentBuilder {
    name: String,
    requires_python: Option<String>,
    requires_dist: Vec<String>,
    releases: Map<String, Value>,
}

impl IndexDocumentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        IndexDocumentBuilder {
            name: name.into(),
            requires_python: None,
            requires_dist: Vec::new(),
            releases: Map::new(),
        }
    }

    pub fn requires_python(mut self, spec: &str) -> Self {
        self.requires_python = Some(spec.to_string());
        self
    }

    pub fn requires_dist(mut self, requirement: &str) -> Self {
        self.requires_dist.push(requirement.to_string());
        self
    }

    /// Add a release with one sdist and one wheel carrying `requires_python`.
    pub fn release(mut self, version: &str, requires_python: Option<&str>) -> Self {
        let files = json!([
            {
                "filename": format!("{}-{}.tar.gz", self.name, version),
                "requires_python": requires_python
            },
            {
                "filename": format!("{}-{}-py3-none-any.whl", self.name, version),
                "requires_python": requires_python
            }
        ]);
        self.releases.insert(version.to_string(), files);
        self
    }

    /// Add a release that has no distribution files.
    pub fn release_without_files(mut self, version: &str) -> Self {
        self.releases.insert(version.to_string(), json!([]));
        self
    }

    pub fn build(self) -> String {
        let requires_dist = if self.requires_dist.is_empty() {
            Value::Null
        } else {
            json!(self.requires_dist)
        };

        json!({
            "info": {
                "name": self.name,
                "requires_python": self.requires_python,
                "requires_dist": requires_dist
            },
            "releases": self.releases
        })
        .to_string()
    }
}

/// Construct a lister record.
pub fn python_release(version: &str, implementation: &str, variant: &str) -> PythonRelease {
    let mut parts = version.split('.').map(|p| {
        p.chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse::<u64>()
            .unwrap_or(0)
    });

    PythonRelease {
        key: Some(format!("{implementation}-{version}-linux-x86_64-gnu")),
        version: version.to_string(),
        version_parts: Some(VersionParts {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }),
        path: None,
        symlink: None,
        url: Some(format!("https://example.com/{implementation}-{version}.tar.gz")),
        os: "linux".to_string(),
        variant: variant.to_string(),
        implementation: implementation.to_string(),
        arch: "x86_64".to_string(),
        libc: "gnu".to_string(),
    }
}

/// Builder for `uv python list --output-format=json` output.
#[derive(Debug, Clone, Default)]
pub struct PythonListBuilder {
    releases: Vec<PythonRelease>,
}

impl PythonListBuilder {
    pub fn new() -> Self {
        PythonListBuilder::default()
    }

    pub fn cpython(mut self, version: &str) -> Self {
        self.releases.push(python_release(version, "cpython", "default"));
        self
    }

    pub fn freethreaded(mut self, version: &str) -> Self {
        self.releases
            .push(python_release(version, "cpython", "freethreaded"));
        self
    }

    pub fn pypy(mut self, version: &str) -> Self {
        self.releases.push(python_release(version, "pypy", "default"));
        self
    }

    pub fn build(self) -> String {
        serde_json::to_string_pretty(&self.releases).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::release::{parse_python_list, IndexDocument};

    #[test]
    fn test_index_builder_round_trip() {
        let body = IndexDocumentBuilder::new("numpy")
            .requires_python(">=3.10")
            .release("2.1.3", Some(">=3.10"))
            .release_without_files("2.1.4")
            .build();

        let value: Value = serde_json::from_str(&body).unwrap();
        let doc = IndexDocument::from_value(&value).unwrap();
        let releases = doc.releases().unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].requires_python(), Some(">=3.10"));
        assert_eq!(releases[1].requires_python(), None);
        assert!(doc.info.unwrap().requires_dist.is_empty());
    }

    #[test]
    fn test_python_list_builder() {
        let json = PythonListBuilder::new()
            .cpython("3.13.1")
            .pypy("3.10.14")
            .build();
        let releases = parse_python_list(&json).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].version_parts.unwrap().patch, 1);
        assert!(!releases[1].is_default_cpython());
    }
}
