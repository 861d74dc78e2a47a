//! Output of the cleaned workforce table

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::schema::CleanTable;

/// Default file name of the cleaned output
pub const CLEANED_OUTPUT_FILE: &str = "Cleaned_Workforce_Data.csv";

/// Date format used for date columns in the output
const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert the cleaned table into a DataFrame with the normalized header.
///
/// Dates are rendered as `YYYY-MM-DD` text; undefined values become nulls.
pub fn clean_table_to_frame(table: &CleanTable) -> Result<DataFrame> {
    let rows = &table.rows;
    let date_text =
        |d: Option<chrono::NaiveDate>| d.map(|d| d.format(OUTPUT_DATE_FORMAT).to_string());

    if table.columns.len() != 16 {
        anyhow::bail!(
            "Cleaned table header has {} columns, expected 16",
            table.columns.len()
        );
    }
    let name = |i: usize| PlSmallStr::from(table.columns[i].as_str());

    let columns: Vec<Column> = vec![
        Column::new(
            name(0),
            rows.iter().map(|r| r.employee_id).collect::<Vec<i64>>(),
        ),
        Column::new(
            name(1),
            rows.iter().map(|r| r.name.clone()).collect::<Vec<String>>(),
        ),
        Column::new(
            name(2),
            rows.iter().map(|r| r.department.clone()).collect::<Vec<String>>(),
        ),
        Column::new(
            name(3),
            rows.iter().map(|r| r.job_role.clone()).collect::<Vec<String>>(),
        ),
        Column::new(
            name(4),
            rows.iter().map(|r| date_text(r.hire_date)).collect::<Vec<Option<String>>>(),
        ),
        Column::new(
            name(5),
            rows.iter().map(|r| r.age).collect::<Vec<Option<f64>>>(),
        ),
        Column::new(
            name(6),
            rows.iter().map(|r| r.gender.clone()).collect::<Vec<String>>(),
        ),
        Column::new(
            name(7),
            rows.iter().map(|r| r.training_name.clone()).collect::<Vec<String>>(),
        ),
        Column::new(
            name(8),
            rows.iter().map(|r| date_text(r.completion_date)).collect::<Vec<Option<String>>>(),
        ),
        Column::new(
            name(9),
            rows.iter().map(|r| r.hours_spent).collect::<Vec<Option<f64>>>(),
        ),
        Column::new(
            name(10),
            rows.iter().map(|r| r.certification_status).collect::<Vec<Option<f64>>>(),
        ),
        Column::new(
            name(11),
            rows.iter().map(|r| r.month.clone()).collect::<Vec<String>>(),
        ),
        Column::new(
            name(12),
            rows.iter().map(|r| r.performance_rating).collect::<Vec<Option<f64>>>(),
        ),
        Column::new(
            name(13),
            rows.iter().map(|r| i64::from(r.projects_completed)).collect::<Vec<i64>>(),
        ),
        Column::new(
            name(14),
            rows.iter().map(|r| i64::from(r.leave_days_taken)).collect::<Vec<i64>>(),
        ),
        Column::new(
            name(15),
            rows.iter()
                .map(|r| r.training_completion_year.map(i64::from))
                .collect::<Vec<Option<i64>>>(),
        ),
    ];

    DataFrame::new(columns).context("Failed to assemble cleaned table")
}

/// Save the cleaned table to file (CSV or Parquet based on extension)
pub fn save_clean_table(table: &CleanTable, path: &Path) -> Result<()> {
    let mut df = clean_table_to_frame(table)?;
    save_dataset(&mut df, path)
}

/// Save a DataFrame to file (CSV or Parquet based on extension).
///
/// CSV output carries a header row and no index column.
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported output format: {}. Supported formats: csv, parquet",
            extension
        ),
    }

    Ok(())
}
