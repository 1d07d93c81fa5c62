//! Compatibility matrix construction.

use crate::core::matrix::MatrixEntry;
use crate::core::table::MinVersionPairTable;
use crate::core::version::Version;
use crate::ops::filter::LibraryVersion;

/// Pair every library version with every interpreter it supports.
///
/// A pair is kept when the interpreter satisfies the release's
/// `requires_python` and no table rule is broken. Library versions keep their
/// given order; interpreters are visited in ascending order for each.
pub fn build_matrix(
    libraries: &[LibraryVersion],
    pythons: &[Version],
    table: &MinVersionPairTable,
) -> Vec<MatrixEntry> {
    let mut pythons = pythons.to_vec();
    pythons.sort();

    let mut entries = Vec::new();
    for library in libraries {
        for python in &pythons {
            if !library.supports(python) {
                continue;
            }
            if !table.allows(python, &library.version) {
                tracing::debug!(
                    "Skipping python {} with {}: below minimum version table",
                    python,
                    library.version
                );
                continue;
            }
            entries.push(MatrixEntry::new(python.clone(), library.version.clone()));
        }
    }
    entries
}
