use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::catalog::store::AssemblyCatalog;
use crate::cli::OutputFormat;
use crate::core::table::TranslationTable;
use crate::validate::engine::{TranslationTableValidator, ValidationResult};

#[derive(Args)]
pub struct ValidateArgs {
    /// Translation table (.tsv) or a directory containing them
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to a custom assembly catalog file
    #[arg(long)]
    pub assemblies: Option<PathBuf>,

    /// Stop at the first violation in each table
    #[arg(long)]
    pub fail_fast: bool,
}

/// Execute validate subcommand. Returns whether every table passed.
///
/// # Errors
///
/// Returns an error if the catalog or an input file cannot be read. Malformed
/// table *content* is never an error here; it is reported as violations.
pub fn run(args: &ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<bool> {
    let catalog = if let Some(path) = &args.assemblies {
        AssemblyCatalog::load_from_file(path)?
    } else {
        AssemblyCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded assembly catalog with {} sequences", catalog.len());
    }

    let inputs = collect_inputs(&args.input)?;
    if inputs.is_empty() {
        anyhow::bail!("no .tsv files found in {}", args.input.display());
    }

    // Each table is validated independently; no state carries over.
    let validator = TranslationTableValidator::new(&catalog);
    let mut results = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let table = TranslationTable::load(path)?;
        debug!("validating {}", table.id);
        let result = if args.fail_fast {
            validator.validate_fail_fast(&table)
        } else {
            validator.validate(&table)
        };
        results.push(result);
    }

    match format {
        OutputFormat::Text => print_text_results(&results, verbose),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(results.iter().all(ValidationResult::passed))
}

/// A single file is taken as-is; a directory contributes its `.tsv` entries
/// in sorted order.
fn collect_inputs(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("tsv"))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

fn print_text_results(results: &[ValidationResult], verbose: bool) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        if result.passed() {
            println!("\n{}: PASS", result.table_id);
        } else {
            println!(
                "\n{}: FAIL ({} violation(s))",
                result.table_id,
                result.violations.len()
            );
            for violation in &result.violations {
                println!("   - [{}] {violation}", violation.kind());
            }
        }

        if verbose {
            if let Some(meta) = &result.metadata {
                println!(
                    "   Gene: {} ({} on {}, version {})",
                    meta.gene_name,
                    meta.chromosome_name,
                    meta.genome_build,
                    meta.version_date.format("%m/%d/%y"),
                );
            }
        }
    }

    println!();
}

fn print_json_results(results: &[ValidationResult]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            let violations: Vec<serde_json::Value> = result
                .violations
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "kind": v.kind(),
                        "message": v.to_string(),
                    })
                })
                .collect();

            let mut json = serde_json::json!({
                "table": result.table_id,
                "passed": result.passed(),
                "violations": violations,
            });

            if let Some(meta) = &result.metadata {
                json["metadata"] = serde_json::json!({
                    "gene": meta.gene_name,
                    "version_date": meta.version_date.format("%m/%d/%y").to_string(),
                    "protein_refseq": meta.protein_refseq,
                    "chromosome_refseq": meta.chromosome_refseq,
                    "gene_refseq": meta.gene_refseq,
                    "chromosome": meta.chromosome_name,
                    "genome_build": meta.genome_build,
                });
            }

            json
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[ValidationResult]) {
    println!("table\tpassed\tkind\tmessage");
    for result in results {
        if result.passed() {
            println!("{}\ttrue\t\t", result.table_id);
        } else {
            for violation in &result.violations {
                println!(
                    "{}\tfalse\t{}\t{violation}",
                    result.table_id,
                    violation.kind()
                );
            }
        }
    }
}
