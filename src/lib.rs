//! # cpic-lint
//!
//! A library for validating CPIC allele-to-function translation tables.
//!
//! Translation tables are tab-separated files with a rigid seven-line header
//! (gene and version date, naming row, protein/chromosome/gene RefSeq titles),
//! a population-header row declaring allele-frequency columns, and an
//! open-ended block of variant rows terminated by a `Notes:` line. Curators
//! need to know, before publishing a table, whether it conforms to that
//! contract.
//!
//! `cpic-lint` checks the header grammar, extracts the embedded RefSeq
//! accessions and genome-build token, cross-checks the chromosome accession
//! against a catalog of known assembly sequences (it must belong to GRCh38),
//! and scans every variant row against the allele-token grammar. All problems
//! in a table are collected into one result; nothing stops at the first
//! error, and no table's outcome affects another's.
//!
//! ## Example
//!
//! ```rust
//! use cpic_lint::{AssemblyCatalog, TranslationTable, TranslationTableValidator};
//!
//! let catalog = AssemblyCatalog::load_embedded().unwrap();
//! let table = TranslationTable::from_text("example.tsv", "GENE:CYP2D6\t01/01/20\n");
//! let validator = TranslationTableValidator::new(&catalog);
//!
//! let result = validator.validate(&table);
//! assert!(!result.passed()); // one line is far too short
//! for violation in &result.violations {
//!     println!("[{}] {}", violation.kind(), violation);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: assembly catalog (RefSeq accession to build-tag lookup)
//! - [`core`]: translation tables, header metadata, and violation types
//! - [`validate`]: the staged validation engine
//! - [`cli`]: command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod validate;

// Re-export commonly used types for convenience
pub use catalog::store::AssemblyCatalog;
pub use core::metadata::HeaderMetadata;
pub use core::table::{TableError, TranslationTable};
pub use core::violation::Violation;
pub use validate::engine::{TranslationTableValidator, ValidationResult};
