//! CSV data source loading
//!
//! The data source is a comma-separated file with a header row. Quoting
//! follows RFC 4180: a quoted field may contain commas, doubled quotes,
//! and newlines. Blank lines are skipped. Every data row must have the
//! same field count as the header.

use crate::error::{TableroError, TableroResult};
use std::path::{Path, PathBuf};

/// Column name that flags a row as implemented
pub const DEFAULT_FLAG_COLUMN: &str = "IMPLEMENTED";

/// Field value that counts a row as implemented
pub const IMPLEMENTED_VALUE: &str = "TRUE";

/// One row of the data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Field values in column order
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field value at a column index
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// An ordered CSV table with a header row
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
    header: Vec<String>,
    records: Vec<Record>,
    flag_index: usize,
}

impl Dataset {
    /// Load a dataset from a CSV file
    pub fn from_path(path: &Path, flag_column: &str) -> TableroResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TableroError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(&content, flag_column, path)
    }

    /// Parse a dataset from CSV text; `path` is used only in error messages
    pub fn from_csv(content: &str, flag_column: &str, path: &Path) -> TableroResult<Self> {
        let rows = parse_csv(content).map_err(|(line, message)| {
            TableroError::malformed(path, line, message)
        })?;

        let mut rows = rows.into_iter();
        let Some((_, header)) = rows.next() else {
            return Err(TableroError::malformed(path, 1, "missing header row"));
        };

        let flag_index = header
            .iter()
            .position(|name| name == flag_column)
            .ok_or_else(|| {
                TableroError::malformed(
                    path,
                    1,
                    format!("missing required column `{flag_column}`"),
                )
            })?;

        let mut records = Vec::new();
        for (line, fields) in rows {
            if fields.len() != header.len() {
                return Err(TableroError::malformed(
                    path,
                    line,
                    format!("expected {} fields, got {}", header.len(), fields.len()),
                ));
            }
            records.push(Record { fields });
        }

        Ok(Self {
            path: path.to_path_buf(),
            header,
            records,
            flag_index,
        })
    }

    /// Path the dataset was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column names in file order
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows in file order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has zero data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the implementation flag column
    #[must_use]
    pub fn flag_index(&self) -> usize {
        self.flag_index
    }

    /// Whether a record is flagged as implemented
    #[must_use]
    pub fn is_implemented(&self, record: &Record) -> bool {
        record.field(self.flag_index) == Some(IMPLEMENTED_VALUE)
    }
}

/// Field-level parser state
enum FieldState {
    /// Nothing consumed for the current field yet
    Start,
    /// Inside an unquoted field
    Unquoted,
    /// Inside a quoted field
    Quoted,
    /// Quoted field closed; only a delimiter may follow
    QuotedDone,
}

/// Parse CSV text into rows tagged with their 1-based starting line.
///
/// Errors carry the line number and a message describing the violation.
fn parse_csv(input: &str) -> Result<Vec<(usize, Vec<String>)>, (usize, String)> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = FieldState::Start;
    let mut line = 1usize;
    let mut row_start = 1usize;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match state {
            FieldState::Quoted => match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        state = FieldState::QuotedDone;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            },
            FieldState::Start | FieldState::Unquoted | FieldState::QuotedDone => match c {
                '"' => match state {
                    FieldState::Start => state = FieldState::Quoted,
                    _ => return Err((line, "unexpected quote in field".to_string())),
                },
                ',' => {
                    row.push(std::mem::take(&mut field));
                    state = FieldState::Start;
                }
                '\r' if chars.peek() == Some(&'\n') => {
                    // Dropped; the following newline terminates the row.
                }
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    finish_row(&mut rows, &mut row, row_start);
                    line += 1;
                    row_start = line;
                    state = FieldState::Start;
                }
                _ => match state {
                    FieldState::QuotedDone => {
                        return Err((line, "unexpected character after closing quote".to_string()))
                    }
                    _ => {
                        field.push(c);
                        state = FieldState::Unquoted;
                    }
                },
            },
        }
    }

    if matches!(state, FieldState::Quoted) {
        return Err((row_start, "unterminated quoted field".to_string()));
    }
    if !field.is_empty() || !row.is_empty() || matches!(state, FieldState::QuotedDone) {
        row.push(field);
        finish_row(&mut rows, &mut row, row_start);
    }

    Ok(rows)
}

/// Commit a completed row, skipping fully blank lines.
fn finish_row(rows: &mut Vec<(usize, Vec<String>)>, row: &mut Vec<String>, start_line: usize) {
    let finished = std::mem::take(row);
    if finished.len() == 1 && finished[0].is_empty() {
        return;
    }
    rows.push((start_line, finished));
}
