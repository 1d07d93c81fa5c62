//! Core data types: versions, requirements, releases and the matrix itself.

pub mod errors;
pub mod matrix;
pub mod metadata;
pub mod release;
pub mod requirement;
pub mod table;
pub mod version;

pub use errors::MatrixError;
pub use matrix::{Matrix, MatrixEntry};
pub use metadata::PackageMetadata;
pub use release::{FileInfo, IndexDocument, PythonRelease, ReleaseRecord};
pub use requirement::Requirement;
pub use table::{MinVersionPair, MinVersionPairSpec, MinVersionPairTable};
pub use version::{MinorSeries, Version, VersionSpecifiers};
