use chrono::NaiveDate;

/// Metadata extracted from the seven header lines of a translation table.
///
/// Built once per table by the header stage and immutable afterwards. All
/// state is local to one validation call; nothing here is shared between
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMetadata {
    /// Gene symbol from the `GENE:<name>` field on line 1
    pub gene_name: String,
    /// Sheet version date from line 1, second field (MM/DD/YY)
    pub version_date: NaiveDate,
    /// RefSeq accession from the protein title (line 3)
    pub protein_refseq: String,
    /// RefSeq accession from the chromosome title (line 4)
    pub chromosome_refseq: String,
    /// RefSeq accession from the gene-sequence title (line 5)
    pub gene_refseq: String,
    /// Numeric component of the chromosome accession, 1-24
    pub chromosome_number: u32,
    /// UCSC-style name derived from the chromosome number
    pub chromosome_name: String,
    /// Genome-build token from the chromosome title (e.g., `GRCh38`, `GRCh38.p13`)
    pub genome_build: String,
}

/// Map a chromosome number to its UCSC-style name: 1-22 become `chr<N>`,
/// 23 is `chrX`, and 24 is `chrY`.
#[must_use]
pub fn chromosome_name(number: u32) -> Option<String> {
    match number {
        1..=22 => Some(format!("chr{number}")),
        23 => Some("chrX".to_string()),
        24 => Some("chrY".to_string()),
        _ => None,
    }
}
