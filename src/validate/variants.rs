use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::table::split_fields;

/// First-cell value that opens the variant block
pub const VARIANT_BLOCK_START: &str = "Allele";

/// Case-insensitive line prefix that terminates variant scanning
pub const NOTES_SENTINEL: &str = "notes:";

/// Grammar for one allele token: a deletion (`del` plus optional bases), an
/// insertion (`ins` plus optional bases), or one or more IUPAC nucleotide
/// ambiguity codes.
static ALLELE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:del[ACGT]*|ins[ACGT]*|[ACGTMRWSYKVHDBN]+)$").expect("valid allele-token regex")
});

/// One data row with at least one token outside the allele-token grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViolation {
    /// 1-based line number in the source file
    pub line: usize,
    /// The row's allele label (first cell)
    pub allele: String,
    /// Offending tokens, deduplicated, in column order
    pub bad_tokens: Vec<String>,
}

/// Check one cell value against the allele-token grammar.
#[must_use]
pub fn is_valid_token(token: &str) -> bool {
    ALLELE_TOKEN.is_match(token)
}

/// Scan the lines after the fixed header for bad allele tokens.
///
/// Scanning is a two-state machine: rows are ignored until the first line
/// whose first cell is exactly `"Allele"` (the population-header row), then
/// every row is checked until a line starting with `notes:` (any case) or end
/// of input. All violations are accumulated; scanning never stops at the
/// first bad row.
///
/// `first_line_number` is the 1-based number of `lines[0]` in the source
/// file. `column_end` is the exclusive right edge of the variant columns,
/// taken from the chromosome header line; each row additionally clamps to its
/// own field count.
#[must_use]
pub fn scan(lines: &[String], first_line_number: usize, column_end: usize) -> Vec<RowViolation> {
    let mut violations = Vec::new();
    let mut in_block = false;

    for (offset, line) in lines.iter().enumerate() {
        if line.to_lowercase().starts_with(NOTES_SENTINEL) {
            break;
        }

        let fields = split_fields(line);
        if !in_block {
            if fields.first().copied() == Some(VARIANT_BLOCK_START) {
                in_block = true;
            }
            continue;
        }

        if fields.len() <= 2 {
            continue;
        }

        let end = column_end.min(fields.len());
        let mut bad_tokens: Vec<String> = Vec::new();
        for token in &fields[2..end] {
            let token = token.trim();
            if token.is_empty() || is_valid_token(token) {
                continue;
            }
            if !bad_tokens.iter().any(|t| t == token) {
                bad_tokens.push(token.to_string());
            }
        }

        if !bad_tokens.is_empty() {
            violations.push(RowViolation {
                line: first_line_number + offset,
                allele: fields[0].to_string(),
                bad_tokens,
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| (*r).to_string()).collect()
    }

    #[test]
    fn test_token_grammar() {
        // Plain bases and IUPAC ambiguity codes
        assert!(is_valid_token("A"));
        assert!(is_valid_token("ACGT"));
        assert!(is_valid_token("N"));
        assert!(is_valid_token("RYKM"));

        // Deletions and insertions, bases optional
        assert!(is_valid_token("del"));
        assert!(is_valid_token("delAT"));
        assert!(is_valid_token("ins"));
        assert!(is_valid_token("insGGC"));

        // Everything else fails
        assert!(!is_valid_token("QQQ"));
        assert!(!is_valid_token("123"));
        assert!(!is_valid_token("delX"));
        assert!(!is_valid_token("a"));
        assert!(!is_valid_token(""));
    }

    #[test]
    fn test_bad_token_reported_with_row_label() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\tA\tdelAT\tQQQ",
        ]);
        let violations = scan(&lines, 7, 5);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].allele, "*1");
        assert_eq!(violations[0].line, 8);
        assert_eq!(violations[0].bad_tokens, vec!["QQQ"]);
    }

    #[test]
    fn test_rows_before_block_are_not_scanned() {
        let lines = to_lines(&[
            "preamble\twith\tXYZ\ttokens",
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\tA",
        ]);
        assert!(scan(&lines, 1, 5).is_empty());
    }

    #[test]
    fn test_scanning_stops_at_notes_sentinel() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\tA",
            "NOTES: legacy rows below",
            "*9\tUnknown\tXYZ\tXYZ",
        ]);
        assert!(scan(&lines, 7, 5).is_empty());
    }

    #[test]
    fn test_sentinel_is_case_insensitive_prefix() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "Notes:\tsee curation log",
            "*9\tUnknown\tXYZ",
        ]);
        assert!(scan(&lines, 7, 5).is_empty());
    }

    #[test]
    fn test_tokens_beyond_column_bound_are_ignored() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\tA\tXYZ",
        ]);
        // Bound of 3 covers only field index 2
        assert!(scan(&lines, 7, 3).is_empty());
    }

    #[test]
    fn test_blank_tokens_are_skipped() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\t\t \tA",
        ]);
        assert!(scan(&lines, 7, 5).is_empty());
    }

    #[test]
    fn test_bad_tokens_deduplicated_per_row() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\tZZ\tZZ\tQQ",
        ]);
        let violations = scan(&lines, 7, 5);
        assert_eq!(violations[0].bad_tokens, vec!["ZZ", "QQ"]);
    }

    #[test]
    fn test_violations_accumulate_across_rows() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function\tQQ",
            "*2\tNo function\tA",
            "*3\tUnknown\tZZ",
        ]);
        let violations = scan(&lines, 7, 3);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].allele, "*1");
        assert_eq!(violations[1].allele, "*3");
        assert_eq!(violations[1].line, 10);
    }

    #[test]
    fn test_rows_with_two_fields_are_skipped() {
        let lines = to_lines(&[
            "Allele\tAllele Functional Status\tEuropean Allele Frequency",
            "*1\tNormal function",
        ]);
        assert!(scan(&lines, 7, 5).is_empty());
    }
}
