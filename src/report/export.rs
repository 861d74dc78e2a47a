//! Workforce analysis export to JSON

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{ColumnStats, CorrelationMatrix, DepartmentMean, JoinPolicy};

/// Metadata about the analysis run
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    /// Timestamp used to fill missing dates
    pub run_timestamp: String,
    pub metrica_version: String,
    pub employees_file: String,
    pub training_file: String,
    pub performance_file: String,
    pub output_file: String,
    pub join_policy: JoinPolicy,
    pub combined_rows: usize,
}

/// Missing value count of one merged column, before filling
#[derive(Debug, Serialize)]
pub struct MissingEntry {
    pub column: String,
    pub missing: usize,
}

/// Correlation matrix with undefined coefficients as `null`
#[derive(Debug, Serialize)]
pub struct CorrelationExport {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl From<&CorrelationMatrix> for CorrelationExport {
    fn from(matrix: &CorrelationMatrix) -> Self {
        Self {
            columns: matrix.columns().to_vec(),
            values: matrix.to_rows(),
        }
    }
}

/// Complete workforce analysis export
#[derive(Debug, Serialize)]
pub struct WorkforceExport<'a> {
    pub metadata: ExportMetadata,
    pub missing_values: Vec<MissingEntry>,
    pub department_performance: &'a [DepartmentMean],
    pub correlation: CorrelationExport,
    pub statistics: &'a [ColumnStats],
}

impl<'a> WorkforceExport<'a> {
    pub fn new(
        metadata: ExportMetadata,
        missing: &[(String, usize)],
        departments: &'a [DepartmentMean],
        correlation: &CorrelationMatrix,
        statistics: &'a [ColumnStats],
    ) -> Self {
        Self {
            metadata,
            missing_values: missing
                .iter()
                .map(|(column, missing)| MissingEntry {
                    column: column.clone(),
                    missing: *missing,
                })
                .collect(),
            department_performance: departments,
            correlation: CorrelationExport::from(correlation),
            statistics,
        }
    }
}

/// Current time formatted for export metadata
pub fn export_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Write the workforce analysis export as pretty-printed JSON
pub fn export_workforce_analysis(export: &WorkforceExport<'_>, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(export)
        .context("Failed to serialize workforce analysis to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write workforce analysis to {}",
            output_path.display()
        )
    })?;

    Ok(())
}
