//! Built-in sample datasets for trying the workforce pipeline

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;

use super::loader::SourcePaths;
use super::writer::save_dataset;

pub const EMPLOYEE_FILE: &str = "Employee_Information.csv";
pub const TRAINING_FILE: &str = "Training_Records.csv";
pub const PERFORMANCE_FILE: &str = "Performance_Metrics.csv";

/// Default input locations relative to `dir`
pub fn default_source_paths(dir: &Path) -> SourcePaths {
    SourcePaths {
        employees: dir.join(EMPLOYEE_FILE),
        training: dir.join(TRAINING_FILE),
        performance: dir.join(PERFORMANCE_FILE),
    }
}

/// Four employees with one training and one performance row each
pub fn sample_frames() -> Result<(DataFrame, DataFrame, DataFrame)> {
    let employees = df! {
        "Employee ID" => [101i64, 102, 103, 104],
        "Name" => ["Alice Smith", "Bob Johnson", "Clara Davis", "David Lee"],
        "Department" => ["Sales", "IT", "HR", "Sales"],
        "Job Role" => ["Sales Executive", "Software Engineer", "HR Manager", "Account Manager"],
        "Hire Date" => ["2018-03-15", "2019-07-10", "2020-01-25", "2021-11-08"],
        "Age" => [29i64, 35, 42, 30],
        "Gender" => ["F", "M", "F", "M"],
    }?;

    let training = df! {
        "Employee ID" => [101i64, 102, 103, 104],
        "Training Name" => ["Sales Skills", "Advanced Coding", "HR Policy Updates", "Negotiation Techniques"],
        "Completion Date" => ["2023-02-15", "2023-03-10", "2023-01-20", "2023-05-22"],
        "Hours Spent" => [8i64, 15, 10, 12],
        "Certification Status" => ["Certified", "Certified", "Not Certified", "Certified"],
    }?;

    let performance = df! {
        "Employee ID" => [101i64, 102, 103, 104],
        "Month" => ["2023-06", "2023-06", "2023-06", "2023-06"],
        "Performance Rating" => [4.5f64, 4.8, 4.0, 4.2],
        "Projects Completed" => [5i64, 7, 3, 4],
        "Leave Days Taken" => [2i64, 0, 1, 4],
    }?;

    Ok((employees, training, performance))
}

/// Write the sample datasets into `dir`, creating it if needed.
///
/// Returns the paths that were written.
pub fn write_sample_datasets(dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let (mut employees, mut training, mut performance) = sample_frames()?;
    let paths = default_source_paths(dir);

    save_dataset(&mut employees, &paths.employees)?;
    save_dataset(&mut training, &paths.training)?;
    save_dataset(&mut performance, &paths.performance)?;

    Ok(vec![paths.employees, paths.training, paths.performance])
}
