//! pymatrix - CI test matrices of compatible Python and library versions
//!
//! This crate reads a package's declared interpreter and dependency
//! requirements, the interpreters `uv` can install and the dependency's
//! releases on a package index, and joins them into the list of
//! (python, library) combinations worth testing.

pub mod core;
pub mod ops;
pub mod sources;
pub mod util;

/// Test utilities and mocks for pymatrix unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory fetcher and builders for index
/// documents, interpreter listings and core metadata.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    Matrix, MatrixEntry, MatrixError, MinVersionPairTable, PackageMetadata, Version,
};

pub use ops::{generate_matrix, GenerateOptions};
pub use sources::IndexClient;
pub use util::context::GlobalContext;
