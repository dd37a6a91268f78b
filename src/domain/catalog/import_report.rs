use std::path::PathBuf;

use super::{CatalogStats, RawRow};
use crate::domain::error::AppError;

/// Outcome of one catalog import run
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Rows read from the source CSV
    pub loaded: usize,

    /// First raw row, echoed for a visual sanity check
    pub sample: Option<RawRow>,

    /// Destination path, set only when the JSON document was written
    pub saved_to: Option<PathBuf>,

    /// Present whenever at least one row was normalized
    pub stats: Option<CatalogStats>,

    /// The stage failure, if any. Later stages still ran where they could.
    pub failure: Option<AppError>,
}

impl ImportReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> u8 {
        self.failure.as_ref().map_or(0, AppError::exit_code)
    }
}
