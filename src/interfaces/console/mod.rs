// ============================================================
// CONSOLE INTERFACE
// ============================================================
// Human-readable rendering of import results

mod report;

pub use report::{render_diagnostic, render_report};
