//! Target package metadata from the index or a local core metadata file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::errors::MatrixError;
use crate::core::metadata::PackageMetadata;
use crate::core::requirement::normalize_name;
use crate::sources::index::{Fetch, IndexClient};

/// Where to read the target package's metadata from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// The `info` block of the package's index document.
    Index,
    /// A `METADATA` or `PKG-INFO` file of an installed distribution.
    File(PathBuf),
}

impl MetadataSource {
    pub fn load<F: Fetch>(&self, package: &str, index: &mut IndexClient<F>) -> Result<PackageMetadata> {
        let mut metadata = match self {
            MetadataSource::Index => index
                .project(package)?
                .info
                .ok_or_else(|| MatrixError::not_found(package, "package info in index document"))?,
            MetadataSource::File(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read metadata file: {}", path.display()))?;
                PackageMetadata::from_core_metadata(&contents)
            }
        };

        if metadata.name.is_empty() {
            metadata.name = package.to_string();
        } else if normalize_name(&metadata.name) != normalize_name(package) {
            tracing::warn!(
                "Metadata is for `{}`, expected `{}`",
                metadata.name,
                package
            );
        }

        tracing::debug!(
            "Metadata for {}: Requires-Python {:?}, {} requirements",
            metadata.name,
            metadata.requires_python,
            metadata.requires_dist.len()
        );

        Ok(metadata)
    }
}
