//! Configuration file support for pymatrix.
//!
//! pymatrix reads two configuration file locations:
//! - Global: `<config dir>/pymatrix/config.toml` - User-wide defaults
//! - Project: `.pymatrix.toml` in the working directory - Project overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.
//!
//! ```toml
//! [matrix]
//! package = "scipy"
//! dependency = "numpy"
//! pre_releases = false
//!
//! [sources]
//! index_url = "https://pypi.org/pypi"
//! python_command = ["uv", "python", "list", "--output-format=json"]
//!
//! [[min_versions]]
//! python = "3.11"
//! library = "1.25"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::table::{MinVersionPairSpec, MinVersionPairTable};

/// Package whose supported interpreters seed the matrix.
pub const DEFAULT_PACKAGE: &str = "scipy";

/// Library whose versions form the second matrix axis.
pub const DEFAULT_DEPENDENCY: &str = "numpy";

/// Base URL of the package index JSON API.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

/// Command listing installable interpreters as JSON.
pub const DEFAULT_PYTHON_COMMAND: &[&str] = &["uv", "python", "list", "--output-format=json"];

/// pymatrix configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to build the matrix for
    pub matrix: MatrixConfig,

    /// Where version data comes from
    pub sources: SourcesConfig,

    /// Compatibility table; replaces the built-in one when present
    pub min_versions: Option<Vec<MinVersionPairSpec>>,
}

/// Matrix selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Target package name
    pub package: Option<String>,

    /// Dependency whose versions are paired with interpreters
    pub dependency: Option<String>,

    /// Include pre-release interpreters and library versions
    pub pre_releases: Option<bool>,

    /// Lowest interpreter version to consider, on top of the package minimum
    pub python_min: Option<String>,

    /// Highest interpreter version to consider
    pub python_max: Option<String>,
}

/// Data source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Package index JSON API base (`https://` or `file://`)
    pub index_url: Option<String>,

    /// Interpreter lister command line
    pub python_command: Option<Vec<String>>,

    /// Local core metadata file for the target package
    pub metadata: Option<PathBuf>,

    /// Pre-recorded interpreter lister output
    pub python_list: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        // Matrix settings
        if other.matrix.package.is_some() {
            self.matrix.package = other.matrix.package;
        }
        if other.matrix.dependency.is_some() {
            self.matrix.dependency = other.matrix.dependency;
        }
        if other.matrix.pre_releases.is_some() {
            self.matrix.pre_releases = other.matrix.pre_releases;
        }
        if other.matrix.python_min.is_some() {
            self.matrix.python_min = other.matrix.python_min;
        }
        if other.matrix.python_max.is_some() {
            self.matrix.python_max = other.matrix.python_max;
        }

        // Source settings
        if other.sources.index_url.is_some() {
            self.sources.index_url = other.sources.index_url;
        }
        if other.sources.python_command.is_some() {
            self.sources.python_command = other.sources.python_command;
        }
        if other.sources.metadata.is_some() {
            self.sources.metadata = other.sources.metadata;
        }
        if other.sources.python_list.is_some() {
            self.sources.python_list = other.sources.python_list;
        }

        // The table is replaced wholesale, never merged row by row
        if other.min_versions.is_some() {
            self.min_versions = other.min_versions;
        }
    }

    pub fn package(&self) -> &str {
        self.matrix.package.as_deref().unwrap_or(DEFAULT_PACKAGE)
    }

    pub fn dependency(&self) -> &str {
        self.matrix.dependency.as_deref().unwrap_or(DEFAULT_DEPENDENCY)
    }

    pub fn pre_releases(&self) -> bool {
        self.matrix.pre_releases.unwrap_or(false)
    }

    pub fn index_url(&self) -> &str {
        self.sources.index_url.as_deref().unwrap_or(DEFAULT_INDEX_URL)
    }

    pub fn python_command(&self) -> Vec<String> {
        match &self.sources.python_command {
            Some(command) => command.clone(),
            None => DEFAULT_PYTHON_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse the configured compatibility table, or the built-in one.
    pub fn min_versions(&self) -> Result<MinVersionPairTable> {
        match &self.min_versions {
            Some(specs) => MinVersionPairTable::from_specs(specs)
                .context("invalid `min_versions` table in configuration"),
            None => Ok(MinVersionPairTable::default()),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.pymatrix.toml)
/// 2. Global config (<config dir>/pymatrix/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    // Load global config first
    if let Some(global_path) = global_path {
        if global_path.exists() {
            let global = Config::load_or_default(global_path);
            config.merge(global);
        }
    }

    // Project config overrides global
    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global pymatrix config path.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "pymatrix").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the project config path (.pymatrix.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".pymatrix.toml")
}
