//! Command implementations

pub mod completions;
pub mod generate;
pub mod pythons;
pub mod releases;

use std::path::Path;

use anyhow::Result;

use crate::cli::SourceArgs;
use pymatrix::util::GlobalContext;

/// Build the context from config files, then apply command-line overrides.
pub fn context(config_path: Option<&Path>, args: SourceArgs) -> Result<GlobalContext> {
    let mut ctx = match config_path {
        Some(path) => GlobalContext::with_config_file(path)?,
        None => GlobalContext::new()?,
    };

    let config = ctx.config_mut();
    if args.package.is_some() {
        config.matrix.package = args.package;
    }
    if args.dependency.is_some() {
        config.matrix.dependency = args.dependency;
    }
    if args.python_min.is_some() {
        config.matrix.python_min = args.python_min;
    }
    if args.python_max.is_some() {
        config.matrix.python_max = args.python_max;
    }
    if args.pre {
        config.matrix.pre_releases = Some(true);
    } else if args.no_pre {
        config.matrix.pre_releases = Some(false);
    }
    if args.index_url.is_some() {
        config.sources.index_url = args.index_url;
    }
    if args.metadata.is_some() {
        config.sources.metadata = args.metadata;
    }
    if args.python_list.is_some() {
        config.sources.python_list = args.python_list;
    }

    Ok(ctx)
}
