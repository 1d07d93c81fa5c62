//! Version data sources: the package index, local metadata and the
//! interpreter lister.

pub mod index;
pub mod metadata;
pub mod python;

pub use index::{Fetch, IndexClient, UrlFetcher};
pub use metadata::MetadataSource;
pub use python::{available_python_versions, PythonFilter, PythonSource};
