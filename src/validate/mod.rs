//! The validation engine: a staged parser/checker for the fixed translation
//! table grammar.
//!
//! Stages, in dependency order:
//!
//! - [`header`]: decodes the seven-line positional header, extracts RefSeq
//!   accessions and the genome-build token, and cross-checks the chromosome
//!   accession against the assembly catalog
//! - [`populations`]: checks the population-header row and extracts the
//!   declared allele-frequency columns
//! - [`variants`]: scans the variant block for tokens outside the allele
//!   grammar, bounded by the column edge from the header stage
//! - [`engine`]: composes the stages into one aggregated result per table

pub mod engine;
pub mod header;
pub mod populations;
pub mod variants;

pub use engine::{TranslationTableValidator, ValidationResult};
