//! JSON serialization for analysis reports.

use std::fs;
use std::path::Path;

use crate::analysis::AnalysisReport;
use crate::error::{Error, Result};

/// Serialize a report to a compact JSON string.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Serialize a report to a pretty-printed JSON string.
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the pretty-printed report to `path`.
pub fn write_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = to_json_pretty(report)?;
    fs::write(path, json).map_err(|e| Error::io(format!("writing {}", path.display()), e))
}
