use std::collections::BTreeSet;

use storage::models::{ProducerList, WINNER_FLAG};

use super::parser::DatasetRow;

const MIN_TEXT_LEN: usize = 3;
const MAX_TEXT_LEN: usize = 150;

/// Findings from inspecting a parsed dataset.
///
/// Errors mark rows that would break the prize interval report; warnings
/// mark rows the API itself would have refused to create.
#[derive(Debug, Default)]
pub struct DatasetReport {
    pub rows: usize,
    pub winners: usize,
    pub producers: BTreeSet<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl DatasetReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

pub struct DatasetValidator;

impl DatasetValidator {
    pub fn validate(rows: &[DatasetRow]) -> DatasetReport {
        let mut report = DatasetReport {
            rows: rows.len(),
            ..DatasetReport::default()
        };

        for row in rows {
            for (field, value) in [
                ("title", &row.title),
                ("studios", &row.studios),
                ("producers", &row.producers),
            ] {
                let len = value.chars().count();
                if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
                    report.warnings.push(format!(
                        "Line {}: {} must be between {} and {} characters",
                        row.line, field, MIN_TEXT_LEN, MAX_TEXT_LEN
                    ));
                }
            }

            if !row.winner.is_empty() && row.winner != WINNER_FLAG {
                report.warnings.push(format!(
                    "Line {}: winner value '{}' is not '{}' and counts as a non-win",
                    row.line, row.winner, WINNER_FLAG
                ));
            }

            if row.winner != WINNER_FLAG {
                continue;
            }

            report.winners += 1;

            if row.year.parse::<i32>().is_err() {
                report.errors.push(format!(
                    "Line {}: winning row has non-numeric year '{}'",
                    row.line, row.year
                ));
            }

            let producers = ProducerList::parse(&row.producers);
            if producers.is_empty() {
                report
                    .errors
                    .push(format!("Line {}: winning row has no producers", row.line));
            }
            report
                .producers
                .extend(producers.iter().map(str::to_string));
        }

        report
    }
}
