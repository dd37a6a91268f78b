// ============================================================
// VIDEO RECORD
// ============================================================
// Normalized, fixed-shape entry of the exported catalog

use serde::{Deserialize, Serialize};

/// One normalized video
///
/// Field declaration order is the JSON key order; keep it in sync with `SCALAR_FIELDS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
    pub duration: String,
    pub published_at: String,
    pub channel_title: String,
    pub view_count: String,
    pub like_count: String,
    pub tags: Vec<String>,
}
