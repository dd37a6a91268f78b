// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing and UTF-8 decoding of the source catalog

mod csv_parser;

use std::path::Path;

use crate::domain::catalog::RawRow;
use crate::domain::error::Result;

pub use csv_parser::CsvParser;

/// Load the source catalog with the default comma-delimited parser
pub fn load_videos(path: &Path) -> Result<Vec<RawRow>> {
    CsvParser::new().parse_file(path)
}
