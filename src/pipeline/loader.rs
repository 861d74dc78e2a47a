//! Workforce table loader for CSV and Parquet files
//!
//! Tables are read with every column as text, checked against their fixed
//! header schema, and converted into typed records in one pass.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

use super::schema::{
    parse_certification, parse_count, parse_key, parse_number, Employee, Performance, Training,
    EMPLOYEE_COLUMNS, PERFORMANCE_COLUMNS, TRAINING_COLUMNS,
};
use crate::error::AnalysisError;

/// Paths of the three workforce input tables
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub employees: PathBuf,
    pub training: PathBuf,
    pub performance: PathBuf,
}

/// The three source tables as typed records
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub employees: Vec<Employee>,
    pub training: Vec<Training>,
    pub performance: Vec<Performance>,
}

/// Load a table from a file (CSV or Parquet based on extension).
///
/// CSV cells are all read as text; typing happens when records are built.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(AnalysisError::MissingFile {
            path: path.to_path_buf(),
        }
        .into());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    let df = lf
        .collect()
        .with_context(|| format!("Failed to read table: {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), cols = df.width(), "loaded table");
    Ok(df)
}

/// Text cells of the columns a table schema requires, keyed by schema label
struct TextColumns {
    height: usize,
    cells: HashMap<&'static str, Vec<Option<String>>>,
}

impl TextColumns {
    /// Validate that every schema column is present and pull its cells as text.
    /// Header labels are matched after trimming surrounding whitespace.
    fn extract(
        df: &DataFrame,
        table: &'static str,
        path: &Path,
        schema: &[&'static str],
    ) -> Result<Self> {
        let available: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let by_trimmed: HashMap<&str, &str> = available
            .iter()
            .map(|name| (name.trim(), name.as_str()))
            .collect();

        for name in &available {
            if !schema.contains(&name.trim()) {
                debug!(table, column = %name, "ignoring column outside the table schema");
            }
        }

        let mut cells = HashMap::with_capacity(schema.len());
        for &column in schema {
            let actual = by_trimmed.get(column).ok_or_else(|| AnalysisError::SchemaMismatch {
                table,
                column,
                path: path.to_path_buf(),
                available: available.clone(),
            })?;

            let text = df.column(actual)?.cast(&DataType::String)?;
            let values: Vec<Option<String>> = text
                .str()?
                .into_iter()
                .map(|v| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from))
                .collect();
            cells.insert(column, values);
        }

        Ok(Self {
            height: df.height(),
            cells,
        })
    }

    fn take(&mut self, column: &'static str) -> Vec<Option<String>> {
        self.cells
            .remove(column)
            .unwrap_or_else(|| vec![None; self.height])
    }

    fn keys(&mut self, table: &'static str, column: &'static str) -> Result<Vec<i64>> {
        self.take(column)
            .into_iter()
            .enumerate()
            .map(|(row, cell)| {
                parse_key(cell.as_deref()).ok_or_else(|| {
                    AnalysisError::InvalidKey {
                        table,
                        row,
                        value: cell.unwrap_or_default(),
                    }
                    .into()
                })
            })
            .collect()
    }
}

/// Convert an employee table into typed records
pub fn employees_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<Employee>> {
    let [id, name, department, job_role, hire_date, age, gender] = EMPLOYEE_COLUMNS;
    let mut cols = TextColumns::extract(df, "employee", path, &EMPLOYEE_COLUMNS)?;

    let ids = cols.keys("employee", id)?;
    let names = cols.take(name);
    let departments = cols.take(department);
    let roles = cols.take(job_role);
    let hire_dates = cols.take(hire_date);
    let ages = cols.take(age);
    let genders = cols.take(gender);

    let records = ids
        .into_iter()
        .zip(names)
        .zip(departments)
        .zip(roles)
        .zip(hire_dates)
        .zip(ages)
        .zip(genders)
        .map(
            |((((((employee_id, name), department), job_role), hire_date), age), gender)| Employee {
                employee_id,
                name,
                department,
                job_role,
                hire_date,
                age: parse_number(age.as_deref()),
                gender,
            },
        )
        .collect();

    Ok(records)
}

/// Convert a training table into typed records
pub fn training_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<Training>> {
    let [id, training_name, completion_date, hours_spent, certification] = TRAINING_COLUMNS;
    let mut cols = TextColumns::extract(df, "training", path, &TRAINING_COLUMNS)?;

    let ids = cols.keys("training", id)?;
    let names = cols.take(training_name);
    let dates = cols.take(completion_date);
    let hours = cols.take(hours_spent);
    let certifications = cols.take(certification);

    let records = ids
        .into_iter()
        .zip(names)
        .zip(dates)
        .zip(hours)
        .zip(certifications)
        .map(
            |((((employee_id, training_name), completion_date), hours), certification)| Training {
                employee_id,
                training_name,
                completion_date,
                hours_spent: parse_number(hours.as_deref()).filter(|h| *h >= 0.0),
                certification_status: parse_certification(certification.as_deref()),
            },
        )
        .collect();

    Ok(records)
}

/// Convert a performance table into typed records
pub fn performance_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<Performance>> {
    let [id, month, rating, projects, leave_days] = PERFORMANCE_COLUMNS;
    let mut cols = TextColumns::extract(df, "performance", path, &PERFORMANCE_COLUMNS)?;

    let ids = cols.keys("performance", id)?;
    let months = cols.take(month);
    let ratings = cols.take(rating);
    let projects = cols.take(projects);
    let leave_days = cols.take(leave_days);

    let records = ids
        .into_iter()
        .zip(months)
        .zip(ratings)
        .zip(projects)
        .zip(leave_days)
        .map(
            |((((employee_id, month), rating), projects), leave_days)| Performance {
                employee_id,
                month,
                performance_rating: parse_number(rating.as_deref()),
                projects_completed: parse_count(projects.as_deref()),
                leave_days_taken: parse_count(leave_days.as_deref()),
            },
        )
        .collect();

    Ok(records)
}

/// Load and validate the employee information table
pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
    employees_from_frame(&load_table(path)?, path)
}

/// Load and validate the training records table
pub fn load_training(path: &Path) -> Result<Vec<Training>> {
    training_from_frame(&load_table(path)?, path)
}

/// Load and validate the performance metrics table
pub fn load_performance(path: &Path) -> Result<Vec<Performance>> {
    performance_from_frame(&load_table(path)?, path)
}

/// Load all three tables in order; the first failure aborts.
pub fn load_sources(paths: &SourcePaths) -> Result<SourceTables> {
    Ok(SourceTables {
        employees: load_employees(&paths.employees)?,
        training: load_training(&paths.training)?,
        performance: load_performance(&paths.performance)?,
    })
}
