//! High-level operations.
//!
//! This module contains the filtering, joining and output steps that the
//! pymatrix commands are built from.

pub mod emit;
pub mod filter;
pub mod generate;
pub mod matrix;

pub use emit::{emit_matrix, matrix_to_string};
pub use filter::{latest_per_minor, LibraryVersion};
pub use generate::{
    collect_inputs, generate_matrix, list_library_versions, list_pythons, GenerateOptions,
    MatrixInputs,
};
pub use matrix::build_matrix;
