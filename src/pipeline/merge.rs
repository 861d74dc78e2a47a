//! Join of the employee, training, and performance tables

use std::collections::HashMap;
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use super::loader::SourceTables;
use super::schema::{MergedRecord, Performance, Training};

/// How employees without training or performance rows are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    /// Keep every employee; unmatched fields stay missing until cleaning
    #[default]
    Left,
    /// Keep only employees with both a training and a performance row
    Inner,
}

impl fmt::Display for JoinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinPolicy::Left => write!(f, "left"),
            JoinPolicy::Inner => write!(f, "inner"),
        }
    }
}

/// The merged table before cleaning
#[derive(Debug, Clone)]
pub struct MergedTable {
    pub rows: Vec<MergedRecord>,
    pub join: JoinPolicy,
}

impl MergedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn group_by_key<T: Clone>(rows: &[T], key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        groups.entry(key(row)).or_default().push(row.clone());
    }
    groups
}

/// Join employee ← training ← performance on the employee identifier.
///
/// Output order follows the employee table; an employee with several
/// training or performance rows yields one row per combination, in source
/// order. Under [`JoinPolicy::Left`] every employee row survives.
pub fn merge_tables(sources: &SourceTables, join: JoinPolicy) -> MergedTable {
    let training = group_by_key(&sources.training, |t: &Training| t.employee_id);
    let performance = group_by_key(&sources.performance, |p: &Performance| p.employee_id);

    let mut rows = Vec::with_capacity(sources.employees.len());

    for employee in &sources.employees {
        let trainings: Vec<Option<Training>> = match training.get(&employee.employee_id) {
            Some(matches) => matches.iter().cloned().map(Some).collect(),
            None if join == JoinPolicy::Left => vec![None],
            None => continue,
        };
        let reviews: Vec<Option<Performance>> = match performance.get(&employee.employee_id) {
            Some(matches) => matches.iter().cloned().map(Some).collect(),
            None if join == JoinPolicy::Left => vec![None],
            None => continue,
        };

        for training in &trainings {
            for review in &reviews {
                rows.push(MergedRecord {
                    employee: employee.clone(),
                    training: training.clone(),
                    performance: review.clone(),
                });
            }
        }
    }

    MergedTable { rows, join }
}
