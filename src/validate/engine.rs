use tracing::debug;

use crate::catalog::store::AssemblyCatalog;
use crate::core::metadata::HeaderMetadata;
use crate::core::table::TranslationTable;
use crate::core::violation::Violation;
use crate::validate::{header, populations, variants};

/// Aggregated outcome of validating one translation table.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Identifier of the validated table (normally the file name)
    pub table_id: String,
    /// Header metadata, present when the header stage fully succeeded
    pub metadata: Option<HeaderMetadata>,
    /// All violations, in check order; empty means the table passed
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs the full check sequence against one table: structural length, the
/// seven-line header grammar (with the assembly cross-check), the
/// population-header row, and the variant block.
///
/// Stages do not short-circuit; every stage that can run contributes its
/// violations to one aggregated result. The variant stage is bounded by the
/// column edge from the chromosome header line; a line declaring no variant
/// columns gives the scan an empty range, which reports nothing.
#[derive(Debug)]
pub struct TranslationTableValidator<'a> {
    assemblies: &'a AssemblyCatalog,
}

impl<'a> TranslationTableValidator<'a> {
    #[must_use]
    pub fn new(assemblies: &'a AssemblyCatalog) -> Self {
        Self { assemblies }
    }

    /// Validate one table, accumulating every violation.
    #[must_use]
    pub fn validate(&self, table: &TranslationTable) -> ValidationResult {
        let mut violations = Vec::new();
        let mut metadata = None;

        if table.lines.len() <= header::HEADER_LINES {
            violations.push(Violation::StructuralTooShort {
                lines: table.lines.len(),
            });
            return ValidationResult {
                table_id: table.id.clone(),
                metadata,
                violations,
            };
        }

        let head = header::parse(&table.lines[..header::HEADER_LINES], self.assemblies);
        metadata = head.metadata;
        violations.extend(head.violations);

        let pops = populations::parse(&table.lines[header::HEADER_LINES - 1]);
        violations.extend(pops.violations);

        // The variant scan starts at the population-header row so its
        // "Allele" first cell opens the block.
        let rows = variants::scan(
            &table.lines[header::HEADER_LINES - 1..],
            header::HEADER_LINES,
            head.variant_column_end,
        );
        violations.extend(rows.into_iter().map(|row| Violation::InvalidAlleleToken {
            line: row.line,
            allele: row.allele,
            tokens: row.bad_tokens,
        }));

        debug!(
            "validated {} with {} violation(s)",
            table.id,
            violations.len()
        );

        ValidationResult {
            table_id: table.id.clone(),
            metadata,
            violations,
        }
    }

    /// Stop-at-first-error mode: the same checks in the same order, but the
    /// result is truncated to the first violation found.
    #[must_use]
    pub fn validate_fail_fast(&self, table: &TranslationTable) -> ValidationResult {
        let mut result = self.validate(table);
        result.violations.truncate(1);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> String {
        [
            "GENE:CYP2D6\t01/15/20",
            "\tEffect on Protein\tEffect on mRNA",
            "Haplotype Name\tNP_000097.3 protein sequence changes",
            "rsID\tNC_000022.11 (GRCh38) chromosome sequence changes\tg.42130692C>T\tg.42129819G>A",
            "\tNM_000106.6 gene sequence changes",
            "An asterisk (*) denotes the reference allele",
            "Allele\tAllele Functional Status\tEuropean Allele Frequency\tAfrican Allele Frequency",
            "*1\tNormal function\tC\tG",
            "*2\tNormal function\tT\tA",
            "Notes:\tfrequencies aggregated from published studies",
        ]
        .join("\n")
    }

    fn validate_text(text: &str) -> ValidationResult {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let table = TranslationTable::from_text("sample.tsv", text);
        TranslationTableValidator::new(&catalog).validate(&table)
    }

    #[test]
    fn test_valid_table_passes() {
        let result = validate_text(&sample_table());
        assert!(result.passed(), "{:?}", result.violations);
        assert_eq!(result.metadata.unwrap().gene_name, "CYP2D6");
    }

    #[test]
    fn test_too_short_table() {
        let result = validate_text("GENE:CYP2D6\t01/15/20\nonly two lines");
        assert_eq!(result.violations.len(), 1);
        assert!(matches!(
            result.violations[0],
            Violation::StructuralTooShort { lines: 2 }
        ));
    }

    #[test]
    fn test_bad_token_in_data_row() {
        let text = sample_table().replace("*2\tNormal function\tT\tA", "*2\tNormal function\tT\tQQQ");
        let result = validate_text(&text);
        assert!(!result.passed());
        assert!(result.violations.iter().any(|v| matches!(
            v,
            Violation::InvalidAlleleToken { line: 9, allele, tokens }
                if allele == "*2" && tokens == &vec!["QQQ".to_string()]
        )));
    }

    #[test]
    fn test_header_and_population_violations_accumulate() {
        let text = sample_table()
            .replace("GENE:CYP2D6\t01/15/20", "CYP2D6\tlast year")
            .replace(
                "Allele\tAllele Functional Status\tEuropean Allele Frequency\tAfrican Allele Frequency",
                "Allele\tAllele Functional Status\tEuropean\tAfrican",
            );
        let result = validate_text(&text);
        let kinds: Vec<&str> = result.violations.iter().map(Violation::kind).collect();
        assert!(kinds.contains(&"malformed_gene_field"));
        assert!(kinds.contains(&"invalid_date"));
        assert!(kinds.contains(&"malformed_population_title"));
        assert!(kinds.contains(&"no_populations_declared"));
    }

    #[test]
    fn test_table_without_variant_columns_passes() {
        // A chromosome line declaring no variant columns gives the scan an
        // empty range; the table still passes.
        let text = sample_table().replace(
            "rsID\tNC_000022.11 (GRCh38) chromosome sequence changes\tg.42130692C>T\tg.42129819G>A",
            "rsID\tNC_000022.11 (GRCh38) chromosome sequence changes",
        );
        let result = validate_text(&text);
        assert!(result.passed(), "{:?}", result.violations);
    }

    #[test]
    fn test_fail_fast_reports_single_violation() {
        let text = sample_table()
            .replace("GENE:CYP2D6\t01/15/20", "broken\tlast year")
            .replace("*1\tNormal function\tC\tG", "*1\tNormal function\tQ\tQ");
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let table = TranslationTable::from_text("sample.tsv", &text);
        let validator = TranslationTableValidator::new(&catalog);

        assert!(validator.validate(&table).violations.len() > 1);
        let result = validator.validate_fail_fast(&table);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].kind(), "malformed_gene_field");
    }

    #[test]
    fn test_tables_do_not_share_state() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let validator = TranslationTableValidator::new(&catalog);

        let bad = TranslationTable::from_text("bad.tsv", "too\nshort");
        let good = TranslationTable::from_text("good.tsv", &sample_table());

        assert!(!validator.validate(&bad).passed());
        // A failed table leaves no residue in the next validation
        assert!(validator.validate(&good).passed());
        assert!(!validator.validate(&bad).passed());
    }
}
