//! Pearson correlation across the numeric workforce columns

use faer::Mat;
use serde::Serialize;

use super::schema::CleanTable;

/// Columns compared in the workforce correlation matrix
pub const CORRELATION_COLUMNS: [&str; 3] =
    ["hours_spent", "performance_rating", "leave_days_taken"];

/// Represents a correlated pair of columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelatedPair {
    pub column1: String,
    pub column2: String,
    pub correlation: f64,
}

/// Symmetric correlation matrix. Undefined coefficients are stored as NaN
/// and surface as `None` through the accessors.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Mat<f64>,
}

impl CorrelationMatrix {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient at (i, j), `None` when undefined or out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.values.nrows() || j >= self.values.ncols() {
            return None;
        }
        let value = self.values[(i, j)];
        (!value.is_nan()).then_some(value)
    }

    /// Coefficient between two named columns
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.get(i, j)
    }

    /// Row-major copy of the matrix with undefined entries as `None`
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        (0..self.len())
            .map(|i| (0..self.len()).map(|j| self.get(i, j)).collect())
            .collect()
    }
}

/// Compute Pearson correlation over pairwise-complete observations.
///
/// Uses a single-pass Welford update for numerical stability. Returns `None`
/// with fewer than two complete pairs or when either side has zero variance.
pub fn pearson_correlation(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    if xs.len() != ys.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 || var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some((cov_xy / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// Build the full correlation matrix for the given named columns.
///
/// Only the upper triangle is computed; the lower triangle mirrors it so the
/// result is exactly symmetric. A defined diagonal entry is exactly 1.0.
pub fn correlation_matrix(columns: &[(String, Vec<Option<f64>>)]) -> CorrelationMatrix {
    let n = columns.len();
    let mut values = Mat::<f64>::zeros(n, n);

    for i in 0..n {
        for j in i..n {
            let corr = pearson_correlation(&columns[i].1, &columns[j].1)
                .map(|c| if i == j { 1.0 } else { c })
                .unwrap_or(f64::NAN);
            values[(i, j)] = corr;
            values[(j, i)] = corr;
        }
    }

    CorrelationMatrix {
        columns: columns.iter().map(|(name, _)| name.clone()).collect(),
        values,
    }
}

/// Correlation matrix of hours spent, performance rating, and leave days
pub fn workforce_correlation(table: &CleanTable) -> CorrelationMatrix {
    let rows = &table.rows;
    let columns = vec![
        (
            CORRELATION_COLUMNS[0].to_string(),
            rows.iter().map(|r| r.hours_spent).collect(),
        ),
        (
            CORRELATION_COLUMNS[1].to_string(),
            rows.iter().map(|r| r.performance_rating).collect(),
        ),
        (
            CORRELATION_COLUMNS[2].to_string(),
            rows.iter().map(|r| Some(f64::from(r.leave_days_taken))).collect(),
        ),
    ];
    correlation_matrix(&columns)
}

/// Extract off-diagonal pairs whose absolute correlation exceeds `threshold`,
/// strongest first
pub fn correlated_pairs(matrix: &CorrelationMatrix, threshold: f64) -> Vec<CorrelatedPair> {
    let n = matrix.len();
    let mut pairs = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(corr) = matrix.get(i, j) {
                if corr.abs() > threshold {
                    pairs.push(CorrelatedPair {
                        column1: matrix.columns[i].clone(),
                        column2: matrix.columns[j].clone(),
                        correlation: corr,
                    });
                }
            }
        }
    }

    pairs.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    pairs
}
