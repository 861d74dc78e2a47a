//! Missing value analysis of the merged table

use super::merge::MergedTable;
use super::schema::{merged_columns, MergedRecord};

/// Whether each merged column is missing on a row, in `merged_columns()` order
fn missing_flags(row: &MergedRecord) -> [bool; 15] {
    let e = &row.employee;
    let t = row.training.as_ref();
    let p = row.performance.as_ref();

    [
        false,
        e.name.is_none(),
        e.department.is_none(),
        e.job_role.is_none(),
        e.hire_date.is_none(),
        e.age.is_none(),
        e.gender.is_none(),
        t.and_then(|t| t.training_name.as_ref()).is_none(),
        t.and_then(|t| t.completion_date.as_ref()).is_none(),
        t.and_then(|t| t.hours_spent).is_none(),
        t.and_then(|t| t.certification_status).is_none(),
        p.and_then(|p| p.month.as_ref()).is_none(),
        p.and_then(|p| p.performance_rating).is_none(),
        p.and_then(|p| p.projects_completed).is_none(),
        p.and_then(|p| p.leave_days_taken).is_none(),
    ]
}

/// Count missing values per merged column, before any fill is applied.
///
/// Every column is reported, in schema order, including those with zero
/// missing values.
pub fn count_missing_values(table: &MergedTable) -> Vec<(String, usize)> {
    let mut counts = [0usize; 15];
    for row in &table.rows {
        for (count, missing) in counts.iter_mut().zip(missing_flags(row)) {
            if missing {
                *count += 1;
            }
        }
    }

    merged_columns()
        .into_iter()
        .zip(counts)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// Get the columns that have at least one missing value
pub fn columns_with_missing(counts: &[(String, usize)]) -> Vec<String> {
    counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, _)| name.clone())
        .collect()
}
