// ============================================================
// CATALOG IMPORT USE CASE
// ============================================================
// Orchestrate CSV loading, normalization, JSON export and statistics

use std::path::PathBuf;

use tracing::info;

use crate::application::use_cases::normalizer::format_video_data;
use crate::domain::app_config::AppConfig;
use crate::domain::catalog::{CatalogStats, ImportReport};
use crate::infrastructure::csv::load_videos;
use crate::infrastructure::json::save_as_json;

/// Catalog import use case
pub struct CatalogImport {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl CatalogImport {
    /// Create an import between two explicit paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Create from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.input_path, &config.output_path)
    }

    /// Run the whole pipeline. Stage failures are recorded, never raised.
    pub fn run(&self) -> ImportReport {
        let mut report = ImportReport::default();

        // Step 1: load; any failure degrades to an empty catalog
        let rows = match load_videos(&self.input_path) {
            Ok(rows) => rows,
            Err(err) => {
                // The presenter reports the failure; keep the log below the default level.
                info!(path = %self.input_path.display(), error = %err, "Failed to load videos");
                report.failure = Some(err);
                Vec::new()
            }
        };

        report.loaded = rows.len();
        info!(path = %self.input_path.display(), rows = rows.len(), "Loaded video rows");

        if rows.is_empty() {
            return report;
        }
        report.sample = rows.first().cloned();

        // Step 2: normalize
        let videos = format_video_data(&rows);

        // Step 3: persist; statistics are still reported on failure
        match save_as_json(&videos, &self.output_path) {
            Ok(()) => report.saved_to = Some(self.output_path.clone()),
            Err(err) => {
                info!(path = %self.output_path.display(), error = %err, "Failed to save videos");
                report.failure = Some(err);
            }
        }

        // Step 4: statistics
        report.stats = Some(CatalogStats::from_records(&videos));

        report
    }
}
