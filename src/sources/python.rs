//! Available interpreter versions, as reported by `uv python list`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::core::release::{parse_python_list, PythonRelease};
use crate::core::version::{is_prerelease, parse_version, MinorSeries, Version};
use crate::util::process::{find_executable, ProcessBuilder};

/// Where the interpreter listing comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PythonSource {
    /// Run a command that prints the listing as JSON.
    Command(Vec<String>),
    /// Read a previously captured listing.
    File(PathBuf),
}

impl PythonSource {
    /// Read and parse the listing.
    pub fn releases(&self) -> Result<Vec<PythonRelease>> {
        match self {
            PythonSource::Command(command) => {
                let process = ProcessBuilder::from_command_line(command)?.env("NO_COLOR", "1");
                if find_executable(process.get_program()).is_none() {
                    bail!(
                        "`{}` not found in PATH\n\
                         help: install uv or pass --python-list with a saved listing",
                        process.get_program().display()
                    );
                }

                let output = process.exec_and_check()?;
                let stdout = String::from_utf8(output.stdout).with_context(|| {
                    format!("`{}` printed invalid UTF-8", process.display_command())
                })?;
                parse_python_list(&stdout)
                    .with_context(|| format!("unexpected output from `{}`", process.display_command()))
            }
            PythonSource::File(path) => {
                let contents = std::fs::read_to_string(path).with_context(|| {
                    format!("failed to read interpreter list: {}", path.display())
                })?;
                parse_python_list(&contents)
                    .with_context(|| format!("invalid interpreter list: {}", path.display()))
            }
        }
    }
}

/// Which interpreter versions to keep.
#[derive(Debug, Clone, Default)]
pub struct PythonFilter {
    /// Lowest version to keep, typically the package's `Requires-Python`
    pub min_version: Option<Version>,
    /// Highest version to keep
    pub max_version: Option<Version>,
    /// Keep alpha, beta and candidate releases
    pub pre_releases: bool,
    /// Minor series below this are dropped regardless of `min_version`
    pub floor: Option<MinorSeries>,
}

/// Reduce a listing to the newest default CPython per minor series, ascending.
pub fn available_python_versions(releases: &[PythonRelease], filter: &PythonFilter) -> Vec<Version> {
    let mut latest: BTreeMap<MinorSeries, Version> = BTreeMap::new();

    for release in releases {
        if !release.is_default_cpython() {
            continue;
        }

        let version = match parse_version(&release.version) {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!("Skipping interpreter {}: {}", release.version, e);
                continue;
            }
        };

        if is_prerelease(&version) && !filter.pre_releases {
            continue;
        }
        if filter.min_version.as_ref().is_some_and(|min| &version < min) {
            continue;
        }
        if filter.max_version.as_ref().is_some_and(|max| &version > max) {
            continue;
        }

        let series = MinorSeries::of(&version);
        if filter.floor.is_some_and(|floor| series < floor) {
            continue;
        }

        match latest.get(&series) {
            Some(existing) if existing >= &version => {}
            _ => {
                latest.insert(series, version);
            }
        }
    }

    latest.into_values().collect()
}
