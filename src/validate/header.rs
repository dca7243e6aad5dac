use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::store::{AssemblyCatalog, REQUIRED_BUILD};
use crate::core::metadata::{chromosome_name, HeaderMetadata};
use crate::core::table::split_fields;
use crate::core::violation::Violation;

/// Number of fixed header lines at the top of every translation table
pub const HEADER_LINES: usize = 7;

static GENE_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GENE:\s*(\w+)$").expect("valid gene-field regex"));

/// RefSeq accession anywhere in a title: `N_<digits>.<version>` with the
/// prefix letter pair (NC, NM, NP, NG, ...)
static REFSEQ_ACCESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(N\w_(\d+)\.\d+)").expect("valid accession regex"));

/// Genome-build token anywhere in a title, with optional patch suffix
static GENOME_BUILD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(GRCh\d+(?:\.p\d+)?)").expect("valid build regex"));

/// Everything the header stage hands to later stages.
#[derive(Debug, Default)]
pub struct HeaderOutcome {
    /// Fully parsed metadata; `None` when any header field failed
    pub metadata: Option<HeaderMetadata>,
    /// Exclusive right edge for variant-token scanning, from the last
    /// populated column of the chromosome line. A line declaring no variant
    /// columns yields 2, an empty scan range.
    pub variant_column_end: usize,
    pub violations: Vec<Violation>,
}

/// Parse and check the seven fixed header lines.
///
/// All violations are accumulated; a bad gene line does not stop the
/// chromosome checks. Callers must pass at least [`HEADER_LINES`] lines.
#[must_use]
pub fn parse(header: &[String], catalog: &AssemblyCatalog) -> HeaderOutcome {
    debug_assert!(header.len() >= HEADER_LINES);
    let mut violations = Vec::new();

    // Line 1: "GENE:<name>\t<MM/DD/YY>"
    let fields = split_fields(&header[0]);
    let gene_field = fields.first().copied().unwrap_or("");
    let gene_name = match GENE_FIELD.captures(gene_field) {
        Some(caps) => Some(caps[1].to_string()),
        None => {
            violations.push(Violation::MalformedGeneField {
                found: gene_field.to_string(),
            });
            None
        }
    };
    let date_field = fields.get(1).copied().unwrap_or("").trim();
    let version_date = match NaiveDate::parse_from_str(date_field, "%m/%d/%y") {
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(Violation::InvalidDate {
                found: date_field.to_string(),
            });
            None
        }
    };

    // Line 2: naming row, first column must be blank
    let first = split_fields(&header[1]).first().copied().unwrap_or("");
    if !first.trim().is_empty() {
        violations.push(Violation::NamingRowNotBlank {
            found: first.to_string(),
        });
    }

    // Line 3: protein title
    let protein_title = title_of(&header[2]);
    let protein_refseq = find_accession(&protein_title).map(|(acc, _)| acc);
    if protein_refseq.is_none() {
        violations.push(Violation::MissingProteinAccession {
            title: protein_title,
        });
    }

    // Line 4: chromosome title plus the variant column headers
    let chrom_title = title_of(&header[3]);
    let mut chromosome_refseq = None;
    let mut chromosome_number = None;
    match find_accession(&chrom_title) {
        Some((accession, digits)) => {
            match digits.parse::<u32>() {
                Ok(number) if (1..=24).contains(&number) => chromosome_number = Some(number),
                _ => violations.push(Violation::UnrecognizedChromosomeNumber {
                    accession: accession.clone(),
                    digits,
                }),
            }
            match catalog.lookup(&accession) {
                None => violations.push(Violation::UnknownAssembly {
                    accession: accession.clone(),
                }),
                Some(build) if build != REQUIRED_BUILD => {
                    violations.push(Violation::WrongAssemblyBuild {
                        accession: accession.clone(),
                        found: build.to_string(),
                        expected: REQUIRED_BUILD.to_string(),
                    });
                }
                Some(_) => {}
            }
            chromosome_refseq = Some(accession);
        }
        None => violations.push(Violation::MissingChromosomeAccession {
            title: chrom_title.clone(),
        }),
    }
    let genome_build = match GENOME_BUILD.captures(&chrom_title) {
        Some(caps) => Some(caps[1].to_string()),
        None => {
            violations.push(Violation::MissingGenomeBuild {
                title: chrom_title.clone(),
            });
            None
        }
    };
    let variant_column_end = last_populated_column_end(&header[3]);

    // Line 5: gene-sequence title
    let gene_title = title_of(&header[4]);
    let gene_refseq = find_accession(&gene_title).map(|(acc, _)| acc);
    if gene_refseq.is_none() {
        violations.push(Violation::MissingGeneAccession { title: gene_title });
    }

    // Line 6 is free form and line 7 belongs to the population stage.

    let metadata = build_metadata(
        gene_name,
        version_date,
        protein_refseq,
        chromosome_refseq,
        gene_refseq,
        chromosome_number,
        genome_build,
    );

    HeaderOutcome {
        metadata,
        variant_column_end,
        violations,
    }
}

/// The title field (column 2) of a header line.
fn title_of(line: &str) -> String {
    split_fields(line).get(1).copied().unwrap_or("").to_string()
}

/// Find a RefSeq accession anywhere in a title. Returns the accession and
/// its numeric component as a string.
fn find_accession(title: &str) -> Option<(String, String)> {
    REFSEQ_ACCESSION
        .captures(title)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Exclusive right edge of the variant columns: one past the last non-blank
/// field at index >= 2 on the chromosome line. A line with no variant
/// columns yields 2, so the scan range is empty.
fn last_populated_column_end(line: &str) -> usize {
    split_fields(line)
        .iter()
        .enumerate()
        .skip(2)
        .filter(|(_, field)| !field.trim().is_empty())
        .map(|(i, _)| i + 1)
        .last()
        .unwrap_or(2)
}

#[allow(clippy::too_many_arguments)]
fn build_metadata(
    gene_name: Option<String>,
    version_date: Option<NaiveDate>,
    protein_refseq: Option<String>,
    chromosome_refseq: Option<String>,
    gene_refseq: Option<String>,
    chromosome_number: Option<u32>,
    genome_build: Option<String>,
) -> Option<HeaderMetadata> {
    let number = chromosome_number?;
    Some(HeaderMetadata {
        gene_name: gene_name?,
        version_date: version_date?,
        protein_refseq: protein_refseq?,
        chromosome_refseq: chromosome_refseq?,
        gene_refseq: gene_refseq?,
        chromosome_number: number,
        chromosome_name: chromosome_name(number)?,
        genome_build: genome_build?,
    })
}
