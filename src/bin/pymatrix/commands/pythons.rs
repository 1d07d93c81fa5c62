//! `pymatrix pythons` command

use std::path::Path;

use anyhow::Result;

use crate::cli::SourceArgs;
use pymatrix::ops::{list_pythons, GenerateOptions};
use pymatrix::IndexClient;

pub fn execute(config: Option<&Path>, args: SourceArgs) -> Result<()> {
    let ctx = super::context(config, args)?;
    let opts = GenerateOptions::from_context(&ctx)?;
    let mut index = IndexClient::new(&opts.index_url)?;

    let pythons = list_pythons(&opts, &mut index)?;
    if pythons.is_empty() {
        tracing::warn!("No python versions match");
    }

    for version in &pythons {
        println!("{}", version);
    }

    Ok(())
}
