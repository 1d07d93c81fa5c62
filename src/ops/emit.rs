//! Matrix serialization.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::matrix::Matrix;

/// Indentation of the emitted JSON document.
pub const INDENT: &[u8] = b"    ";

/// Write the matrix as pretty-printed JSON followed by a newline.
pub fn emit_matrix<W: Write>(matrix: &Matrix, mut writer: W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    matrix
        .serialize(&mut serializer)
        .context("failed to serialize matrix")?;
    writeln!(writer).context("failed to write matrix")?;
    writer.flush().context("failed to write matrix")?;
    Ok(())
}

/// Render the matrix into a string.
pub fn matrix_to_string(matrix: &Matrix) -> Result<String> {
    let mut buf = Vec::new();
    emit_matrix(matrix, &mut buf)?;
    String::from_utf8(buf).context("matrix output is not UTF-8")
}
