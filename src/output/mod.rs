//! Output formatting for analysis reports.
//!
//! This module provides formatters for displaying an `AnalysisReport`:
//! - Terminal: Human-readable output with colors and box drawing
//! - JSON: Machine-readable serialization, including renderer geometry
//! - CSV: Per-point classification and per-group summaries

mod csv;
mod json;
mod terminal;

pub use csv::{write_group_summary, write_group_summary_csv, write_points, write_points_csv};
pub use json::{to_json, to_json_pretty, write_json};
pub use terminal::format_report;
