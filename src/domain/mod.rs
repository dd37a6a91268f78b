pub mod app_config;
pub mod error;

// Video catalog pipeline types
pub mod catalog;
