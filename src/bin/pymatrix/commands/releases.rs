//! `pymatrix releases` command

use std::path::Path;

use anyhow::Result;

use crate::cli::SourceArgs;
use pymatrix::ops::{list_library_versions, GenerateOptions};
use pymatrix::IndexClient;

pub fn execute(config: Option<&Path>, args: SourceArgs) -> Result<()> {
    let ctx = super::context(config, args)?;
    let opts = GenerateOptions::from_context(&ctx)?;
    let mut index = IndexClient::new(&opts.index_url)?;

    let releases = list_library_versions(&opts, &mut index)?;
    if releases.is_empty() {
        tracing::warn!("No {} releases match", opts.dependency);
    }

    let width = releases
        .iter()
        .map(|r| r.version.to_string().len())
        .max()
        .unwrap_or(0);

    for release in &releases {
        println!(
            "{:<width$}  requires-python {}",
            release.version.to_string(),
            release.requires_python,
            width = width
        );
    }

    Ok(())
}
