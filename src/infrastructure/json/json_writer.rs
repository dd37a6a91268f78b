use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::catalog::VideoRecord;
use crate::domain::error::{AppError, Result};

/// Write the records as a pretty-printed JSON array, replacing any existing file.
///
/// Output is UTF-8 with 2-space indentation and non-ASCII text left unescaped.
/// There is no trailing newline, so identical input gives byte-identical files.
pub fn save_as_json(videos: &[VideoRecord], output_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(videos).map_err(|e| {
        AppError::OutputWriteError(format!("Failed to serialize videos: {}", e))
    })?;

    fs::write(output_path, content).map_err(|e| {
        AppError::OutputWriteError(format!(
            "Failed to write {}: {}",
            output_path.display(),
            e
        ))
    })?;

    info!(path = %output_path.display(), videos = videos.len(), "Saved video catalog");
    Ok(())
}
