use thiserror::Error;

use crate::validate::header::HEADER_LINES;

/// A single structural problem found in one translation table.
///
/// Violations are values, not faults: malformed input never aborts a
/// validation run, it only adds entries to the table's result. Line and
/// column numbers are 1-based for user friendliness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("table has {lines} line(s), expected more than {}", HEADER_LINES)]
    StructuralTooShort { lines: usize },

    #[error("line 1: gene field '{found}' does not match 'GENE:<name>'")]
    MalformedGeneField { found: String },

    #[error("line 1: version date '{found}' is not a valid MM/DD/YY date")]
    InvalidDate { found: String },

    #[error("line 2: first column must be blank, found '{found}'")]
    NamingRowNotBlank { found: String },

    #[error("line 3: no RefSeq accession in protein title '{title}'")]
    MissingProteinAccession { title: String },

    #[error("line 4: no RefSeq accession in chromosome title '{title}'")]
    MissingChromosomeAccession { title: String },

    #[error("line 4: no genome build (GRCh<N>) in chromosome title '{title}'")]
    MissingGenomeBuild { title: String },

    #[error("line 4: chromosome number '{digits}' from '{accession}' is not in 1-24")]
    UnrecognizedChromosomeNumber { accession: String, digits: String },

    #[error("line 4: accession '{accession}' is not a known assembly sequence")]
    UnknownAssembly { accession: String },

    #[error("line 4: accession '{accession}' belongs to build '{found}', expected '{expected}'")]
    WrongAssemblyBuild {
        accession: String,
        found: String,
        expected: String,
    },

    #[error("line 5: no RefSeq accession in gene title '{title}'")]
    MissingGeneAccession { title: String },

    #[error(
        "line 7: header must start with 'Allele' and 'Allele Functional Status', \
         found '{first}' and '{second}'"
    )]
    UnexpectedHeaderTitles { first: String, second: String },

    #[error("line 7, column {column}: population title '{title}' does not end with 'Allele Frequency'")]
    MalformedPopulationTitle { column: usize, title: String },

    #[error("line 7: no population frequency columns declared")]
    NoPopulationsDeclared,

    #[error("line {line}: allele '{allele}' has invalid token(s): {}", .tokens.join(", "))]
    InvalidAlleleToken {
        line: usize,
        allele: String,
        tokens: Vec<String>,
    },
}

impl Violation {
    /// Stable machine-readable tag for this violation kind, used in JSON and
    /// TSV reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StructuralTooShort { .. } => "structural_too_short",
            Self::MalformedGeneField { .. } => "malformed_gene_field",
            Self::InvalidDate { .. } => "invalid_date",
            Self::NamingRowNotBlank { .. } => "naming_row_not_blank",
            Self::MissingProteinAccession { .. } => "missing_protein_accession",
            Self::MissingChromosomeAccession { .. } => "missing_chromosome_accession",
            Self::MissingGenomeBuild { .. } => "missing_genome_build",
            Self::UnrecognizedChromosomeNumber { .. } => "unrecognized_chromosome_number",
            Self::UnknownAssembly { .. } => "unknown_assembly",
            Self::WrongAssemblyBuild { .. } => "wrong_assembly_build",
            Self::MissingGeneAccession { .. } => "missing_gene_accession",
            Self::UnexpectedHeaderTitles { .. } => "unexpected_header_titles",
            Self::MalformedPopulationTitle { .. } => "malformed_population_title",
            Self::NoPopulationsDeclared => "no_populations_declared",
            Self::InvalidAlleleToken { .. } => "invalid_allele_token",
        }
    }
}
