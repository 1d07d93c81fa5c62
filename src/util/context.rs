//! Global context for pymatrix operations.
//!
//! Provides centralized access to the working directory and configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{global_config_path, load_config, project_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Merged configuration
    config: Config,
}

impl GlobalContext {
    /// Create a context from the implicit global and project config files.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        let global = global_config_path();
        let config = load_config(global.as_deref(), &project_config_path(&cwd));

        Ok(GlobalContext { cwd, config })
    }

    /// Create a context whose project config is an explicit file.
    ///
    /// Unlike the implicit project file, an explicit one must exist and parse.
    pub fn with_config_file(path: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        let global = global_config_path();
        let mut config = load_config(global.as_deref(), &project_config_path(&cwd));
        config.merge(Config::load(path)?);

        Ok(GlobalContext { cwd, config })
    }

    /// Create a context from an already-built configuration.
    pub fn from_config(cwd: PathBuf, config: Config) -> Self {
        GlobalContext { cwd, config }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Resolve a possibly relative path against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
