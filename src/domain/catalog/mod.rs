// ============================================================
// CATALOG DOMAIN LAYER
// ============================================================
// Core types for the video catalog pipeline
// No I/O, no external services

mod catalog_stats;
mod field_schema;
mod import_report;
mod raw_row;
mod video_record;

pub use catalog_stats::CatalogStats;
pub use field_schema::{FieldDefault, SCALAR_FIELDS, TAGS_FIELD, TAG_SEPARATOR};
pub use import_report::ImportReport;
pub use raw_row::{RawField, RawRow};
pub use video_record::VideoRecord;
