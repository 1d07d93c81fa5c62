//! Distribution metadata: `Requires-Python` and `Requires-Dist`.

use serde::Deserialize;

use crate::core::errors::MatrixError;
use crate::core::requirement::{normalize_name, requirement_name, Requirement};
use crate::core::version::{is_lower_bound, is_strict_lower_bound, is_upper_bound, parse_specifiers, Version};

/// The subset of a distribution's core metadata used to seed the matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    /// Distribution name.
    #[serde(default)]
    pub name: String,

    /// Declared interpreter requirement, e.g. `>=3.11`.
    #[serde(default)]
    pub requires_python: Option<String>,

    /// Raw requirement strings.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requires_dist: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PackageMetadata {
    /// Parse a core metadata file (`METADATA` / `PKG-INFO`).
    ///
    /// Only the header block is read; it ends at the first blank line, after
    /// which the long description starts. Continuation lines are folded.
    pub fn from_core_metadata(contents: &str) -> Self {
        let mut headers: Vec<(String, String)> = Vec::new();

        for line in contents.lines() {
            if line.trim().is_empty() {
                break;
            }
            if line.starts_with([' ', '\t']) {
                if let Some((_, value)) = headers.last_mut() {
                    value.push(' ');
                    value.push_str(line.trim());
                }
                continue;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
            }
        }

        let mut metadata = PackageMetadata::default();
        for (key, value) in headers {
            match key.as_str() {
                "name" => metadata.name = value,
                "requires-python" => metadata.requires_python = Some(value),
                "requires-dist" => metadata.requires_dist.push(value),
                _ => {}
            }
        }
        metadata
    }

    /// Minimum interpreter version this package declares.
    ///
    /// Upper-bounded specifiers are rejected outright rather than reduced to a
    /// minimum that would misrepresent them.
    pub fn minimum_python(&self) -> Result<Version, MatrixError> {
        let raw = self
            .requires_python
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| MatrixError::not_found(&self.name, "Requires-Python"))?;

        let specifiers = parse_specifiers(raw)?;

        if specifiers.iter().any(is_upper_bound) {
            return Err(MatrixError::NotSupported {
                package: self.name.clone(),
                specifier: raw.to_string(),
                reason: "upper-bounded Requires-Python is not supported".to_string(),
            });
        }

        specifiers
            .iter()
            .filter(|s| is_lower_bound(s))
            .map(|s| s.version().clone())
            .max()
            .ok_or_else(|| {
                MatrixError::not_found(&self.name, format!("lower bound in Requires-Python `{raw}`"))
            })
    }

    /// Minimum version of `dependency` this package requires.
    ///
    /// Uses the first requirement naming the dependency that is not gated
    /// behind an extra, and the first `>=`/`>` clause within it.
    pub fn minimum_dependency_version(&self, dependency: &str) -> Result<Version, MatrixError> {
        if self.requires_dist.is_empty() {
            return Err(MatrixError::not_found(&self.name, "Requires-Dist"));
        }

        // Only entries naming the dependency are parsed in full, so an
        // unrelated requirement this parser rejects cannot fail the lookup.
        let wanted = normalize_name(dependency);
        let mut requirement = None;
        for raw in &self.requires_dist {
            match requirement_name(raw) {
                Some(name) if normalize_name(name) == wanted => {}
                _ => {
                    tracing::debug!("Skipping requirement `{}`", raw);
                    continue;
                }
            }
            let req: Requirement = raw.parse()?;
            if !req.is_extra_gated() {
                requirement = Some(req);
                break;
            }
        }

        let requirement = requirement.ok_or_else(|| {
            MatrixError::not_found(&self.name, format!("dependency `{dependency}`"))
        })?;

        requirement
            .specifiers()
            .iter()
            .find(|s| is_strict_lower_bound(s))
            .map(|s| s.version().clone())
            .ok_or_else(|| {
                MatrixError::not_found(
                    &self.name,
                    format!("lower bound for dependency `{dependency}` in `{requirement}`"),
                )
            })
    }
}
