//! Typed row records and the fixed header schemas of the workforce tables
//!
//! Each source table is validated once at load time and converted into one
//! of the record types below. Downstream stages never look columns up by
//! name again.

use chrono::{NaiveDate, NaiveDateTime};

/// Join key shared by all three source tables
pub const EMPLOYEE_ID: &str = "Employee ID";

/// Header schema of the employee information table
pub const EMPLOYEE_COLUMNS: [&str; 7] = [
    EMPLOYEE_ID,
    "Name",
    "Department",
    "Job Role",
    "Hire Date",
    "Age",
    "Gender",
];

/// Header schema of the training records table
pub const TRAINING_COLUMNS: [&str; 5] = [
    EMPLOYEE_ID,
    "Training Name",
    "Completion Date",
    "Hours Spent",
    "Certification Status",
];

/// Header schema of the performance metrics table
pub const PERFORMANCE_COLUMNS: [&str; 5] = [
    EMPLOYEE_ID,
    "Month",
    "Performance Rating",
    "Projects Completed",
    "Leave Days Taken",
];

/// Column added by the cleaner
pub const COMPLETION_YEAR_COLUMN: &str = "training_completion_year";

/// Sentinel written into categorical cells that are missing after the merge
pub const UNKNOWN: &str = "Unknown";

/// One row of the employee information table
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_id: i64,
    pub name: Option<String>,
    pub department: Option<String>,
    pub job_role: Option<String>,
    /// Raw text; coerced to a date by the cleaner
    pub hire_date: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
}

/// One row of the training records table
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub employee_id: i64,
    pub training_name: Option<String>,
    /// Raw text; coerced to a date by the cleaner
    pub completion_date: Option<String>,
    pub hours_spent: Option<f64>,
    /// 1 = certified, 0 = not certified
    pub certification_status: Option<u8>,
}

/// One row of the performance metrics table
#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    pub employee_id: i64,
    pub month: Option<String>,
    pub performance_rating: Option<f64>,
    pub projects_completed: Option<u32>,
    pub leave_days_taken: Option<u32>,
}

/// A joined row before cleaning. Training and performance are absent when
/// the employee had no matching row under a left join.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub employee: Employee,
    pub training: Option<Training>,
    pub performance: Option<Performance>,
}

/// A fully cleaned row of the combined table
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub employee_id: i64,
    pub name: String,
    pub department: String,
    pub job_role: String,
    pub hire_date: Option<NaiveDate>,
    pub age: Option<f64>,
    pub gender: String,
    pub training_name: String,
    pub completion_date: Option<NaiveDate>,
    pub hours_spent: Option<f64>,
    /// 1.0 = certified; a mean share when filled
    pub certification_status: Option<f64>,
    pub month: String,
    pub performance_rating: Option<f64>,
    pub projects_completed: u32,
    pub leave_days_taken: u32,
    pub training_completion_year: Option<i32>,
}

/// The cleaned combined table with its normalized header
#[derive(Debug, Clone)]
pub struct CleanTable {
    /// Normalized column names, in the same order as the `CleanRecord` fields
    pub columns: Vec<String>,
    pub rows: Vec<CleanRecord>,
    /// Timestamp used to fill missing dates
    pub run_timestamp: NaiveDateTime,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column labels of the merged table: the employee schema followed by the
/// training and performance schemas without their repeated join key.
pub fn merged_columns() -> Vec<&'static str> {
    EMPLOYEE_COLUMNS
        .iter()
        .chain(TRAINING_COLUMNS.iter().skip(1))
        .chain(PERFORMANCE_COLUMNS.iter().skip(1))
        .copied()
        .collect()
}

/// Normalize a column label: trim, lowercase, spaces become underscores.
///
/// Applying it twice yields the same result as applying it once.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Parse an optional numeric cell, treating unparsable text as missing
pub fn parse_number(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a non-negative whole-number cell. Accepts `"4"` and `"4.0"`.
pub fn parse_count(cell: Option<&str>) -> Option<u32> {
    parse_number(cell)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}

/// Parse a certification cell into the 1/0 encoding
pub fn parse_certification(cell: Option<&str>) -> Option<u8> {
    let value = cell.map(str::trim).filter(|s| !s.is_empty())?;
    match value.to_lowercase().as_str() {
        "certified" | "1" | "1.0" | "true" | "yes" => Some(1),
        "not certified" | "0" | "0.0" | "false" | "no" => Some(0),
        _ => None,
    }
}

/// Parse a cell holding an employee identifier (`"101"` or `"101.0"`)
pub fn parse_key(cell: Option<&str>) -> Option<i64> {
    let value = cell.map(str::trim).filter(|s| !s.is_empty())?;
    value.parse::<i64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent() {
        for label in merged_columns() {
            let once = normalize_column_name(label);
            assert_eq!(normalize_column_name(&once), once);
        }
        assert_eq!(normalize_column_name("  Leave Days Taken "), "leave_days_taken");
    }

    #[test]
    fn merged_columns_skip_repeated_key() {
        let columns = merged_columns();
        assert_eq!(columns.len(), 15);
        assert_eq!(columns.iter().filter(|c| **c == EMPLOYEE_ID).count(), 1);
    }

    #[test]
    fn certification_accepts_text_and_flags() {
        assert_eq!(parse_certification(Some("Certified")), Some(1));
        assert_eq!(parse_certification(Some(" not certified ")), Some(0));
        assert_eq!(parse_certification(Some("1")), Some(1));
        assert_eq!(parse_certification(Some("pending")), None);
        assert_eq!(parse_certification(None), None);
    }

    #[test]
    fn counts_reject_fractions_and_negatives() {
        assert_eq!(parse_count(Some("4")), Some(4));
        assert_eq!(parse_count(Some("4.0")), Some(4));
        assert_eq!(parse_count(Some("4.5")), None);
        assert_eq!(parse_count(Some("-1")), None);
    }

    #[test]
    fn keys_accept_float_formatting() {
        assert_eq!(parse_key(Some("101")), Some(101));
        assert_eq!(parse_key(Some("101.0")), Some(101));
        assert_eq!(parse_key(Some("abc")), None);
        assert_eq!(parse_key(Some("  ")), None);
    }
}
