use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::table::split_fields;
use crate::core::violation::Violation;

/// Required title of the first column on the population-header row
pub const ALLELE_TITLE: &str = "Allele";

/// Required title of the second column on the population-header row
pub const FUNCTIONAL_STATUS_TITLE: &str = "Allele Functional Status";

static POPULATION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*) Allele Frequency$").expect("valid population-title regex"));

/// A named allele-frequency column declared on the population-header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationColumn {
    /// Population name captured from `<name> Allele Frequency`
    pub name: String,
    /// 0-based field index of the column
    pub column: usize,
}

#[derive(Debug, Default)]
pub struct PopulationOutcome {
    /// Declared populations, in column order
    pub populations: Vec<PopulationColumn>,
    pub violations: Vec<Violation>,
}

/// Check the population-header row (line 7) and extract the declared
/// population columns. Blank columns are ignored; every non-blank title from
/// column 3 onward must end with "Allele Frequency".
#[must_use]
pub fn parse(line: &str) -> PopulationOutcome {
    let fields = split_fields(line);
    let mut outcome = PopulationOutcome::default();

    let first = fields.first().copied().unwrap_or("");
    let second = fields.get(1).copied().unwrap_or("");
    if first != ALLELE_TITLE || second != FUNCTIONAL_STATUS_TITLE {
        outcome.violations.push(Violation::UnexpectedHeaderTitles {
            first: first.to_string(),
            second: second.to_string(),
        });
    }

    for (i, field) in fields.iter().enumerate().skip(2) {
        if field.trim().is_empty() {
            continue;
        }
        match POPULATION_TITLE.captures(field) {
            Some(caps) => outcome.populations.push(PopulationColumn {
                name: caps[1].to_string(),
                column: i,
            }),
            None => outcome.violations.push(Violation::MalformedPopulationTitle {
                column: i + 1,
                title: (*field).to_string(),
            }),
        }
    }

    if outcome.populations.is_empty() {
        outcome.violations.push(Violation::NoPopulationsDeclared);
    }

    outcome
}
