//! Library release filtering.
//!
//! Reduces an index's release list to the newest qualifying release of each
//! minor series, paired with the interpreter specifier it declares.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::core::release::ReleaseRecord;
use crate::core::version::{is_prerelease, parse_specifiers, parse_version, MinorSeries, Version, VersionSpecifiers};

/// The newest release of a minor series and its `requires_python`.
#[derive(Debug, Clone)]
pub struct LibraryVersion {
    pub version: Version,
    pub requires_python: VersionSpecifiers,
}

impl LibraryVersion {
    pub fn series(&self) -> MinorSeries {
        MinorSeries::of(&self.version)
    }

    pub fn supports(&self, python: &Version) -> bool {
        self.requires_python.contains(python)
    }
}

/// Keep the highest release per minor series at or above `min_version`.
///
/// Releases without any `requires_python` on their files are dropped, since
/// nothing could be checked against them. Series appear in the order the
/// index first lists them; a later, higher release replaces the earlier one
/// in place.
pub fn latest_per_minor(
    releases: &[ReleaseRecord],
    min_version: &Version,
    pre_releases: bool,
) -> Result<Vec<LibraryVersion>> {
    let mut order: Vec<(Version, &str)> = Vec::new();
    let mut slots: HashMap<MinorSeries, usize> = HashMap::new();

    for release in releases {
        let version = match parse_version(&release.version) {
            Ok(version) => version,
            Err(e) => {
                tracing::debug!("Skipping release {}: {}", release.version, e);
                continue;
            }
        };

        if &version < min_version || (is_prerelease(&version) && !pre_releases) {
            continue;
        }

        let Some(requires_python) = release.requires_python() else {
            tracing::debug!("Skipping release {}: no requires_python", release.version);
            continue;
        };

        let series = MinorSeries::of(&version);
        match slots.get(&series) {
            Some(&slot) => {
                if version > order[slot].0 {
                    order[slot] = (version, requires_python);
                }
            }
            None => {
                slots.insert(series, order.len());
                order.push((version, requires_python));
            }
        }
    }

    order
        .into_iter()
        .map(|(version, requires_python)| {
            let requires_python = parse_specifiers(requires_python)
                .with_context(|| format!("invalid requires_python for release {version}"))?;
            Ok(LibraryVersion {
                version,
                requires_python,
            })
        })
        .collect()
}
