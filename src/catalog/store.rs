use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read assembly catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse assembly catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// The build tag a chromosome accession must map to for a table to pass
pub const REQUIRED_BUILD: &str = "b38";

/// One accession in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyEntry {
    /// RefSeq accession (e.g., "`NC_000022.11`")
    pub accession: String,
    /// UCSC-style chromosome name (e.g., "chr22")
    pub chromosome: String,
    /// Internal build tag (e.g., "b38")
    pub build: String,
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub assemblies: Vec<AssemblyEntry>,
}

/// The accession-to-build lookup used to cross-check chromosome titles.
///
/// Read-only after construction; safe to share across concurrent validation
/// tasks.
#[derive(Debug)]
pub struct AssemblyCatalog {
    entries: Vec<AssemblyEntry>,

    /// Index: accession -> index in entries vec
    accession_to_index: HashMap<String, usize>,
}

impl AssemblyCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            accession_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the embedded data is malformed.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; build.rs validates the file
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/grch_assemblies.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or
    /// `CatalogError::ParseError` if it is not valid catalog JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON does not match the
    /// catalog format.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            eprintln!(
                "Warning: Assembly catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let mut catalog = Self::new();
        for entry in data.assemblies {
            catalog.add_entry(entry);
        }

        Ok(catalog)
    }

    /// Add an entry to the catalog
    pub fn add_entry(&mut self, entry: AssemblyEntry) {
        let index = self.entries.len();
        self.accession_to_index.insert(entry.accession.clone(), index);
        self.entries.push(entry);
    }

    /// Look up the build tag for an accession. Returns `None` when the
    /// accession is not a known assembly sequence.
    #[must_use]
    pub fn lookup(&self, accession: &str) -> Option<&str> {
        self.accession_to_index
            .get(accession)
            .map(|&idx| self.entries[idx].build.as_str())
    }

    /// All entries, in catalog order
    #[must_use]
    pub fn entries(&self) -> &[AssemblyEntry] {
        &self.entries
    }

    /// Number of accessions in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AssemblyCatalog {
    fn default() -> Self {
        Self::new()
    }
}
