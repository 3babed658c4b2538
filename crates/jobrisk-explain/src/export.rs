//! Export of attribution reports to CSV and JSON files.

use crate::report::AttributionReport;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

#[derive(Serialize)]
struct FactorRow<'a> {
    factor: &'a str,
    contribution: f64,
}

/// Write an attribution report to a file in the given format.
///
/// CSV carries one row per factor (the probability and bias are report-level
/// values and are not flattened into rows); JSON carries the whole report.
pub fn export_report(
    report: &AttributionReport,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            for factor in &report.factors {
                writer.serialize(FactorRow {
                    factor: &factor.label,
                    contribution: factor.contribution,
                })?;
            }
            writer.flush()?;
        }
        ExportFormat::Json | ExportFormat::PrettyJson => {
            let json = if format == ExportFormat::PrettyJson {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            let mut file = File::create(path)?;
            file.write_all(json.as_bytes())?;
        }
    }
    Ok(())
}
