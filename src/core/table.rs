use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} does not exist")]
    NotFound(String),

    #[error("{0} is not a file")]
    NotAFile(String),

    #[error("{0} is not a TSV file")]
    NotTsv(String),
}

/// A single translation table: the ordered raw line sequence read from one
/// source file. Immutable once loaded; lifecycle is load, validate, discard.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    /// Identifier used in reports, normally the source file name
    pub id: String,
    /// Raw lines, in file order
    pub lines: Vec<String>,
}

impl TranslationTable {
    /// Build a table from raw text, for in-memory validation.
    #[must_use]
    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self {
            id: id.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Read a table from a `.tsv` file on disk.
    ///
    /// # Errors
    ///
    /// Returns `TableError::NotFound` / `NotAFile` / `NotTsv` if the path is
    /// not an existing `.tsv` file, or `TableError::Io` if reading fails.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::NotFound(path.display().to_string()));
        }
        if !path.is_file() {
            return Err(TableError::NotAFile(path.display().to_string()));
        }
        let is_tsv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("tsv"));
        if !is_tsv {
            return Err(TableError::NotTsv(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let id = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        Ok(Self::from_text(id, &content))
    }
}

/// Split one raw line into its tab-delimited fields.
///
/// Trailing empty fields are kept; validators that care about blanks trim
/// per field.
#[must_use]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}
