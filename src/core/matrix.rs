//! Matrix output records.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::core::version::{MinorSeries, Version};

/// One validated (interpreter, library) combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixEntry {
    pub python: Version,
    pub library: Version,
}

impl MatrixEntry {
    pub fn new(python: Version, library: Version) -> Self {
        MatrixEntry { python, library }
    }

    pub fn python_series(&self) -> MinorSeries {
        MinorSeries::of(&self.python)
    }

    pub fn library_series(&self) -> MinorSeries {
        MinorSeries::of(&self.library)
    }
}

/// The full matrix, labelled with the library's distribution name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub library_name: String,
    pub entries: Vec<MatrixEntry>,
}

impl Matrix {
    pub fn new(library_name: impl Into<String>, entries: Vec<MatrixEntry>) -> Self {
        Matrix {
            library_name: library_name.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `{"python": "3.12", "<library>": "1.26"}`
struct Row<'a> {
    library_name: &'a str,
    entry: &'a MatrixEntry,
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("python", &self.entry.python_series())?;
        map.serialize_entry(self.library_name, &self.entry.library_series())?;
        map.end()
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Row<'_>> = self
            .entries
            .iter()
            .map(|entry| Row {
                library_name: &self.library_name,
                entry,
            })
            .collect();

        let mut state = serializer.serialize_struct("Matrix", 1)?;
        state.serialize_field("include", &rows)?;
        state.end()
    }
}
