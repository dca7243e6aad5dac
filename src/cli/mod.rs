//! Command-line interface for cpic-lint.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **validate**: Validate one translation table or a directory of tables
//! - **assemblies**: List the known assembly sequences
//!
//! ## Usage
//!
//! ```text
//! # Validate a single translation table
//! cpic-lint validate CYP2D6_translation.tsv
//!
//! # Validate every .tsv file in a directory
//! cpic-lint validate translations/
//!
//! # JSON output for scripting
//! cpic-lint validate translations/ --format json
//!
//! # Stop at the first problem in each table
//! cpic-lint validate CYP2D6_translation.tsv --fail-fast
//!
//! # Show the accessions a chromosome title may reference
//! cpic-lint assemblies --build b38
//! ```

use clap::{Parser, Subcommand};

pub mod assemblies;
pub mod validate;

#[derive(Parser)]
#[command(name = "cpic-lint")]
#[command(version)]
#[command(about = "Validate CPIC allele translation tables before publication")]
#[command(
    long_about = "cpic-lint checks allele-to-function translation tables (TSV) against their structural contract.\n\nIt verifies:\n- The seven-line header grammar (gene field, version date, naming row)\n- RefSeq accessions embedded in the protein, chromosome, and gene titles\n- That the chromosome accession belongs to genome build GRCh38 (b38)\n- The population-header row and its '<name> Allele Frequency' columns\n- Every allele token in the variant block, up to the Notes: terminator\n\nAll problems in a table are reported together; a failing table exits with status 1."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one translation table or a directory of tables
    Validate(validate::ValidateArgs),

    /// List the known assembly sequences
    Assemblies(assemblies::AssembliesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
