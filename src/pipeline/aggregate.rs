//! Group-wise means and descriptive statistics of the cleaned table

use std::collections::BTreeMap;

use serde::Serialize;

use super::schema::{CleanRecord, CleanTable};

/// Average performance rating of one department
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentMean {
    pub department: String,
    pub mean_rating: f64,
    /// Number of rows with a rating that contributed to the mean
    pub observations: usize,
}

/// Mean performance rating per department, sorted by department name.
///
/// Departments without a single rating are left out rather than reported
/// as zero.
pub fn department_performance(table: &CleanTable) -> Vec<DepartmentMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for row in &table.rows {
        if let Some(rating) = row.performance_rating {
            let entry = groups.entry(row.department.as_str()).or_insert((0.0, 0));
            entry.0 += rating;
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(department, (sum, count))| DepartmentMean {
            department: department.to_string(),
            mean_rating: sum / count as f64,
            observations: count,
        })
        .collect()
}

/// Summary statistics of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1)
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnStats {
    pub fn from_values(column: &str, values: &[Option<f64>]) -> Self {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let count = present.len();

        let mean = (count > 0).then(|| present.iter().sum::<f64>() / count as f64);
        let std = mean.filter(|_| count > 1).map(|m| {
            let ss: f64 = present.iter().map(|v| (v - m).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        });

        Self {
            column: column.to_string(),
            count,
            missing: values.len() - count,
            mean,
            std,
            min: present.iter().copied().reduce(f64::min),
            max: present.iter().copied().reduce(f64::max),
        }
    }
}

type NumericAccessor = fn(&CleanRecord) -> Option<f64>;

/// Numeric columns of the cleaned table covered by `describe`
const NUMERIC_COLUMNS: [(&str, NumericAccessor); 7] = [
    ("age", |r: &CleanRecord| r.age),
    ("hours_spent", |r: &CleanRecord| r.hours_spent),
    ("certification_status", |r: &CleanRecord| r.certification_status),
    ("performance_rating", |r: &CleanRecord| r.performance_rating),
    ("projects_completed", |r: &CleanRecord| Some(f64::from(r.projects_completed))),
    ("leave_days_taken", |r: &CleanRecord| Some(f64::from(r.leave_days_taken))),
    ("training_completion_year", |r: &CleanRecord| r.training_completion_year.map(f64::from)),
];

/// Descriptive statistics for every numeric column of the cleaned table
pub fn describe(table: &CleanTable) -> Vec<ColumnStats> {
    NUMERIC_COLUMNS
        .iter()
        .map(|(name, get)| {
            let values: Vec<Option<f64>> = table.rows.iter().map(get).collect();
            ColumnStats::from_values(name, &values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_ignore_missing_values() {
        let stats = ColumnStats::from_values("x", &[Some(2.0), None, Some(4.0), Some(6.0)]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.mean, Some(4.0));
        assert_eq!(stats.std, Some(2.0));
        assert_eq!(stats.min, Some(2.0));
        assert_eq!(stats.max, Some(6.0));
    }

    #[test]
    fn single_value_has_no_std() {
        let stats = ColumnStats::from_values("x", &[Some(5.0)]);
        assert_eq!(stats.mean, Some(5.0));
        assert_eq!(stats.std, None);
    }
}
