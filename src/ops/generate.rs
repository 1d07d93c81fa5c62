//! End-to-end matrix generation.
//!
//! 1. Read the target package's metadata for its minimum interpreter and
//!    its minimum dependency version.
//! 2. List interpreters from the lister, newest per minor series.
//! 3. Reduce the dependency's index releases to the newest per minor series.
//! 4. Join both under the release specifiers and the minimum version table.

use anyhow::{Context, Result};

use crate::core::matrix::Matrix;
use crate::core::table::MinVersionPairTable;
use crate::core::version::{parse_version, MinorSeries, Version};
use crate::ops::filter::{latest_per_minor, LibraryVersion};
use crate::ops::matrix::build_matrix;
use crate::sources::index::{Fetch, IndexClient};
use crate::sources::metadata::MetadataSource;
use crate::sources::python::{available_python_versions, PythonFilter, PythonSource};
use crate::util::context::GlobalContext;

/// Options for matrix generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Package whose declared requirements seed the matrix
    pub package: String,
    /// Library paired with interpreters
    pub dependency: String,
    /// Index JSON API base URL
    pub index_url: String,
    /// Where the package's metadata comes from
    pub metadata: MetadataSource,
    /// Where the interpreter listing comes from
    pub pythons: PythonSource,
    /// Extra interpreter floor on top of the package's Requires-Python
    pub python_min: Option<Version>,
    /// Interpreter ceiling
    pub python_max: Option<Version>,
    /// Include pre-releases of both interpreters and the library
    pub pre_releases: bool,
    /// Minimum version pairs
    pub table: MinVersionPairTable,
}

impl GenerateOptions {
    /// Build options from the merged configuration.
    pub fn from_context(ctx: &GlobalContext) -> Result<Self> {
        let config = ctx.config();

        let metadata = match &config.sources.metadata {
            Some(path) => MetadataSource::File(ctx.resolve_path(path)),
            None => MetadataSource::Index,
        };

        let pythons = match &config.sources.python_list {
            Some(path) => PythonSource::File(ctx.resolve_path(path)),
            None => PythonSource::Command(config.python_command()),
        };

        let python_min = parse_optional(config.matrix.python_min.as_deref())
            .context("invalid `python_min`")?;
        let python_max = parse_optional(config.matrix.python_max.as_deref())
            .context("invalid `python_max`")?;

        Ok(GenerateOptions {
            package: config.package().to_string(),
            dependency: config.dependency().to_string(),
            index_url: config.index_url().to_string(),
            metadata,
            pythons,
            python_min,
            python_max,
            pre_releases: config.pre_releases(),
            table: config.min_versions()?,
        })
    }
}

fn parse_optional(value: Option<&str>) -> Result<Option<Version>> {
    Ok(value.map(parse_version).transpose()?)
}

/// Interpreter and library axes before they are joined.
#[derive(Debug, Clone)]
pub struct MatrixInputs {
    pub pythons: Vec<Version>,
    pub libraries: Vec<LibraryVersion>,
}

/// Interpreter versions eligible for the matrix.
pub fn list_pythons<F: Fetch>(opts: &GenerateOptions, index: &mut IndexClient<F>) -> Result<Vec<Version>> {
    let metadata = opts.metadata.load(&opts.package, index)?;
    let package_min = metadata.minimum_python()?;

    let min_version = match &opts.python_min {
        Some(floor) if floor > &package_min => floor.clone(),
        _ => package_min,
    };
    tracing::debug!("Minimum python for {}: {}", opts.package, min_version);

    let filter = PythonFilter {
        min_version: Some(min_version),
        max_version: opts.python_max.clone(),
        pre_releases: opts.pre_releases,
        floor: opts.table.min_python().map(MinorSeries::of),
    };

    let releases = opts.pythons.releases()?;
    Ok(available_python_versions(&releases, &filter))
}

/// Library releases eligible for the matrix.
pub fn list_library_versions<F: Fetch>(
    opts: &GenerateOptions,
    index: &mut IndexClient<F>,
) -> Result<Vec<LibraryVersion>> {
    let metadata = opts.metadata.load(&opts.package, index)?;
    let min_version = metadata.minimum_dependency_version(&opts.dependency)?;
    tracing::debug!("Minimum {} for {}: {}", opts.dependency, opts.package, min_version);

    let document = index.project(&opts.dependency)?;
    let releases = document.releases()?;
    latest_per_minor(&releases, &min_version, opts.pre_releases)
        .with_context(|| format!("failed to filter releases of `{}`", opts.dependency))
}

/// Gather both matrix axes.
pub fn collect_inputs<F: Fetch>(opts: &GenerateOptions, index: &mut IndexClient<F>) -> Result<MatrixInputs> {
    let pythons = list_pythons(opts, index)?;
    let libraries = list_library_versions(opts, index)?;

    tracing::info!(
        "Found {} python versions and {} {} versions",
        pythons.len(),
        libraries.len(),
        opts.dependency
    );

    Ok(MatrixInputs { pythons, libraries })
}

/// Compute the full matrix.
pub fn generate_matrix<F: Fetch>(opts: &GenerateOptions, index: &mut IndexClient<F>) -> Result<Matrix> {
    let inputs = collect_inputs(opts, index)?;
    let entries = build_matrix(&inputs.libraries, &inputs.pythons, &opts.table);

    if entries.is_empty() {
        tracing::warn!(
            "No compatible python / {} combinations found",
            opts.dependency
        );
    }

    Ok(Matrix::new(opts.dependency.clone(), entries))
}
