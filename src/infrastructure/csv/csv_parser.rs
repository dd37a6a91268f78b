// ============================================================
// CSV PARSER
// ============================================================
// Read the source catalog into header-keyed raw rows

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::domain::catalog::RawRow;
use crate::domain::error::{AppError, Result};

const DELIMITER: u8 = b',';

/// CSV parser producing `RawRow`s
///
/// Comma-delimited, values passed through untrimmed.
#[derive(Debug, Default)]
pub struct CsvParser;

impl CsvParser {
    /// Create a new CSV parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV file and return rows in file order
    pub fn parse_file(&self, path: &Path) -> Result<Vec<RawRow>> {
        let content = Self::read_utf8(path)?;
        let rows = self.parse_content(&content)?;

        debug!(path = %path.display(), rows = rows.len(), "Parsed CSV file");
        Ok(rows)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .trim(Trim::None)
            .flexible(true) // Short rows leave trailing columns absent
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::InputReadError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::InputReadError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            if record.len() > headers.len() {
                warn!(
                    row = index + 1,
                    extra = record.len() - headers.len(),
                    "Ignoring values beyond the header width"
                );
            }

            rows.push(Self::parse_row(&headers, &record));
        }

        Ok(rows)
    }

    /// Read the whole file as UTF-8, dropping a leading BOM
    fn read_utf8(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::InputNotFound(path.display().to_string()),
            _ => AppError::InputReadError(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        let (content, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            return Err(AppError::InputReadError(format!(
                "{} is not valid UTF-8",
                path.display()
            )));
        }

        Ok(content.into_owned())
    }

    /// Zip one record with the header; missing cells stay absent
    fn parse_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
        let mut row = RawRow::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header, value);
        }
        row
    }
}
