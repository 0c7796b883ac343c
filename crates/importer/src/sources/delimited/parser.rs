use storage::models::AwardRecord;
use uuid::Uuid;

use crate::{ImporterError, Result};

pub const DEFAULT_DELIMITER: char = ';';

/// One data row, before an id has been assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub line: usize,
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: String,
}

impl DatasetRow {
    pub fn into_record(self, id: Uuid) -> AwardRecord {
        AwardRecord {
            id,
            year: self.year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner: self.winner,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DelimitedParser {
    delimiter: char,
}

impl Default for DelimitedParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl DelimitedParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parses a whole dataset. Blank lines are skipped; line numbers in
    /// errors and rows are 1-based and count blank lines.
    pub fn parse(&self, content: &str) -> Result<Vec<DatasetRow>> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(ImporterError::EmptyDataset)?;
        let columns = ColumnLayout::from_header(header, self.delimiter)?;

        lines
            .map(|(line_no, line)| columns.parse_row(line_no, line, self.delimiter))
            .collect()
    }
}

/// Position of each required column within a row. Header names are
/// matched case-sensitively; extra columns are allowed.
#[derive(Debug)]
struct ColumnLayout {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
    width: usize,
}

impl ColumnLayout {
    fn from_header(header: &str, delimiter: char) -> Result<Self> {
        let names: Vec<&str> = header
            .trim_start_matches('\u{feff}')
            .split(delimiter)
            .map(str::trim)
            .collect();

        let position = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| ImporterError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            year: position("year")?,
            title: position("title")?,
            studios: position("studios")?,
            producers: position("producers")?,
            winner: position("winner")?,
            width: names.len(),
        })
    }

    fn parse_row(&self, line_no: usize, line: &str, delimiter: char) -> Result<DatasetRow> {
        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        if fields.len() < self.width {
            return Err(ImporterError::MalformedRow {
                line: line_no,
                reason: format!(
                    "expected {} fields, found {}",
                    self.width,
                    fields.len()
                ),
            });
        }

        Ok(DatasetRow {
            line: line_no,
            year: fields[self.year].to_string(),
            title: fields[self.title].to_string(),
            studios: fields[self.studios].to_string(),
            producers: fields[self.producers].to_string(),
            winner: fields[self.winner].to_string(),
        })
    }
}
