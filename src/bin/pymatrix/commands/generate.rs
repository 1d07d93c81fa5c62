//! `pymatrix generate` command

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::GenerateArgs;
use pymatrix::ops::{emit_matrix, generate_matrix, GenerateOptions};
use pymatrix::IndexClient;

pub fn execute(config: Option<&Path>, args: GenerateArgs) -> Result<()> {
    let ctx = super::context(config, args.source)?;
    let opts = GenerateOptions::from_context(&ctx)?;
    let mut index = IndexClient::new(&opts.index_url)?;

    // Compute everything before writing so failures leave no partial output
    let matrix = generate_matrix(&opts, &mut index)?;

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            emit_matrix(&matrix, BufWriter::new(file))?;
            tracing::info!("Wrote {} matrix entries to {}", matrix.len(), path.display());
        }
        None => emit_matrix(&matrix, io::stdout().lock())?,
    }

    Ok(())
}
