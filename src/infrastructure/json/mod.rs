// ============================================================
// JSON INFRASTRUCTURE LAYER
// ============================================================
// Persist the normalized catalog for the library UI

mod json_writer;

pub use json_writer::save_as_json;
