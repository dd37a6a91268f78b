use std::io::{self, Write};

use crate::domain::catalog::ImportReport;
use crate::domain::error::AppError;

/// Write the progress and summary block for a finished import
pub fn render_report<W: Write>(report: &ImportReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Loaded {} videos.", report.loaded)?;

    if let Some(sample) = &report.sample {
        writeln!(out, "First video sample:")?;
        writeln!(out, "{}", serde_json::to_string(sample)?)?;
    }

    if let Some(path) = &report.saved_to {
        writeln!(out, "Videos saved to {}", path.display())?;
    }

    if let Some(stats) = &report.stats {
        writeln!(out)?;
        writeln!(out, "Video Statistics:")?;
        writeln!(out, "Total videos: {}", stats.total)?;
        writeln!(out, "Unique channels: {}", stats.unique_channels())?;

        if !stats.channels.is_empty() {
            writeln!(out, "Channels:")?;
            for channel in &stats.channels {
                writeln!(out, "  - {}", channel)?;
            }
        }
    }

    Ok(())
}

/// Write the one-line diagnostic for a stage failure
pub fn render_diagnostic<W: Write>(failure: &AppError, out: &mut W) -> io::Result<()> {
    match failure {
        AppError::InputNotFound(path) => writeln!(out, "Error: File '{}' not found.", path),
        AppError::InputReadError(detail) => writeln!(out, "Error loading videos: {}", detail),
        AppError::OutputWriteError(detail) => writeln!(out, "Error saving videos: {}", detail),
        AppError::ConfigError(detail) => writeln!(out, "Error: invalid configuration: {}", detail),
    }
}
