//! Icon catalogs loaded once per session.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PaletteError, PaletteResult};
use crate::record::Record;

/// On-disk catalog shapes: a bare array or an object with an `icons` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Record>),
    Wrapped { icons: Vec<Record> },
}

/// A validated, immutable list of icon records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Creates a catalog, checking that names are present and unique.
    pub fn new(records: Vec<Record>) -> PaletteResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(PaletteError::EmptyName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(PaletteError::DuplicateName(record.name.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(content: &str) -> PaletteResult<Self> {
        let records = match serde_json::from_str(content)? {
            CatalogFile::Bare(records) => records,
            CatalogFile::Wrapped { icons } => icons,
        };
        Self::new(records)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PaletteResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PaletteError::read_file(path, e))?;

        let catalog = Self::from_json(&content).inspect_err(|e| {
            tracing::warn!("Rejected catalog {}: {}", path.display(), e);
        })?;

        tracing::info!(
            "Loaded {} icons from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Looks up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Returns the records in catalog order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the catalog, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
