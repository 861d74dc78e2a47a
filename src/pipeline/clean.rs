//! Cleaning of the merged workforce table
//!
//! Order of operations:
//! 1. explicit per-column defaults (categorical → "Unknown", counts → 0,
//!    completion date → run timestamp)
//! 2. column-mean fill for the remaining numeric columns
//! 3. column-name normalization
//! 4. date coercion (unparsable → null)
//! 5. derived `training_completion_year`

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::merge::MergedTable;
use super::schema::{
    merged_columns, normalize_column_name, CleanRecord, CleanTable, COMPLETION_YEAR_COLUMN,
    UNKNOWN,
};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Format used when the run timestamp fills a missing date cell
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a date-like cell into a calendar date, `None` when unparsable
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Mean over the non-missing values, `None` if there are none
pub fn column_mean(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Column means used for the numeric fallback fill
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FillMeans {
    pub age: Option<f64>,
    pub hours_spent: Option<f64>,
    pub certification_status: Option<f64>,
    pub performance_rating: Option<f64>,
}

impl FillMeans {
    pub fn from_merged(table: &MergedTable) -> Self {
        let rows = &table.rows;
        Self {
            age: column_mean(rows.iter().map(|r| r.employee.age)),
            hours_spent: column_mean(
                rows.iter()
                    .map(|r| r.training.as_ref().and_then(|t| t.hours_spent)),
            ),
            certification_status: column_mean(rows.iter().map(|r| {
                r.training
                    .as_ref()
                    .and_then(|t| t.certification_status)
                    .map(f64::from)
            })),
            performance_rating: column_mean(
                rows.iter()
                    .map(|r| r.performance.as_ref().and_then(|p| p.performance_rating)),
            ),
        }
    }
}

fn or_unknown(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Normalized header of the cleaned table
pub fn clean_columns() -> Vec<String> {
    merged_columns()
        .into_iter()
        .map(normalize_column_name)
        .chain(std::iter::once(COMPLETION_YEAR_COLUMN.to_string()))
        .collect()
}

/// Apply the fill policy, normalization, date coercion, and derived year.
///
/// `run_timestamp` fills missing completion dates, so a run is reproducible
/// when the same timestamp is passed in.
pub fn clean_table(merged: &MergedTable, run_timestamp: NaiveDateTime) -> CleanTable {
    let means = FillMeans::from_merged(merged);
    let filled_date = run_timestamp.format(TIMESTAMP_FORMAT).to_string();

    let rows = merged
        .rows
        .iter()
        .map(|row| {
            let e = &row.employee;
            let t = row.training.as_ref();
            let p = row.performance.as_ref();

            let completion_raw = t
                .and_then(|t| t.completion_date.clone())
                .unwrap_or_else(|| filled_date.clone());
            let completion_date = parse_date(&completion_raw);

            CleanRecord {
                employee_id: e.employee_id,
                name: or_unknown(e.name.as_ref()),
                department: or_unknown(e.department.as_ref()),
                job_role: or_unknown(e.job_role.as_ref()),
                hire_date: e.hire_date.as_deref().and_then(parse_date),
                age: e.age.or(means.age),
                gender: or_unknown(e.gender.as_ref()),
                training_name: or_unknown(t.and_then(|t| t.training_name.as_ref())),
                completion_date,
                hours_spent: t.and_then(|t| t.hours_spent).or(means.hours_spent),
                certification_status: t
                    .and_then(|t| t.certification_status)
                    .map(f64::from)
                    .or(means.certification_status),
                month: or_unknown(p.and_then(|p| p.month.as_ref())),
                performance_rating: p
                    .and_then(|p| p.performance_rating)
                    .or(means.performance_rating),
                projects_completed: p.and_then(|p| p.projects_completed).unwrap_or(0),
                leave_days_taken: p.and_then(|p| p.leave_days_taken).unwrap_or(0),
                training_completion_year: completion_date.map(|d| d.year()),
            }
        })
        .collect();

    CleanTable {
        columns: clean_columns(),
        rows,
        run_timestamp,
    }
}
