use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The source CSV does not exist. Carries the path as given.
    InputNotFound(String),
    /// The source exists but could not be read, decoded or parsed.
    InputReadError(String),
    /// The JSON destination could not be created or written.
    OutputWriteError(String),
    ConfigError(String),
}

impl AppError {
    /// Process exit status for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::ConfigError(_) => 1,
            AppError::InputNotFound(_) => 2,
            AppError::InputReadError(_) => 3,
            AppError::OutputWriteError(_) => 4,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputNotFound(path) => write!(f, "File '{}' not found.", path),
            AppError::InputReadError(msg) => write!(f, "Input read error: {}", msg),
            AppError::OutputWriteError(msg) => write!(f, "Output write error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type Result<T> = std::result::Result<T, AppError>;
