use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::AssemblyCatalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct AssembliesArgs {
    /// Path to a custom assembly catalog file (defaults to embedded)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Filter by build tag (e.g., "b38")
    #[arg(long)]
    pub build: Option<String>,
}

/// Execute assemblies subcommand
///
/// # Errors
///
/// Returns an error if a custom catalog file cannot be read or parsed.
pub fn run(args: &AssembliesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        AssemblyCatalog::load_from_file(path)?
    } else {
        AssemblyCatalog::load_embedded()?
    };

    let entries: Vec<_> = catalog
        .entries()
        .iter()
        .filter(|entry| {
            args.build
                .as_deref()
                .map_or(true, |build| entry.build == build)
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                println!(
                    "{:<16} {:<6} {}",
                    entry.accession, entry.chromosome, entry.build
                );
            }
            println!("\n{} sequence(s)", entries.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Tsv => {
            println!("accession\tchromosome\tbuild");
            for entry in &entries {
                println!("{}\t{}\t{}", entry.accession, entry.chromosome, entry.build);
            }
        }
    }

    Ok(())
}
