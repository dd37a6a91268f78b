use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_INPUT_PATH: &str = "youtube_video_list.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "youtube_videos.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
pub struct AppConfig {
    /// Source CSV catalog
    #[validate(length(min = 1))]
    pub input_path: String,

    /// Destination JSON document, overwritten on every run
    #[validate(length(min = 1))]
    pub output_path: String,

    /// Default tracing directive; `RUST_LOG` takes precedence
    #[validate(length(min = 1))]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
