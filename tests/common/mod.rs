//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use metrica::finance::FinancialInput;
use metrica::pipeline::{Employee, Performance, SourcePaths, SourceTables, Training};
use tempfile::TempDir;

pub const EMPLOYEES_CSV: &str = "\
Employee ID,Name,Department,Job Role,Hire Date,Age,Gender
101,Alice Smith,Sales,Sales Executive,2018-03-15,29,F
102,Bob Johnson,IT,Software Engineer,2019-07-10,35,M
103,Clara Davis,HR,HR Manager,2020-01-25,42,F
104,David Lee,Sales,Account Manager,2021-11-08,30,M
";

pub const TRAINING_CSV: &str = "\
Employee ID,Training Name,Completion Date,Hours Spent,Certification Status
101,Sales Skills,2023-02-15,8,Certified
102,Advanced Coding,2023-03-10,15,Certified
103,HR Policy Updates,2023-01-20,10,Not Certified
104,Negotiation Techniques,2023-05-22,12,Certified
";

pub const PERFORMANCE_CSV: &str = "\
Employee ID,Month,Performance Rating,Projects Completed,Leave Days Taken
101,2023-06,4.5,5,2
102,2023-06,4.8,7,0
103,2023-06,4.0,3,1
104,2023-06,4.2,4,4
";

/// Write the three workforce tables into a fresh temporary directory
pub fn write_workforce_csvs(
    employees: &str,
    training: &str,
    performance: &str,
) -> (TempDir, SourcePaths) {
    let temp_dir = TempDir::new().unwrap();
    let paths = SourcePaths {
        employees: write_file(temp_dir.path(), "Employee_Information.csv", employees),
        training: write_file(temp_dir.path(), "Training_Records.csv", training),
        performance: write_file(temp_dir.path(), "Performance_Metrics.csv", performance),
    };
    (temp_dir, paths)
}

/// The four-employee tables, one training and one performance row each
pub fn write_default_workforce_csvs() -> (TempDir, SourcePaths) {
    write_workforce_csvs(EMPLOYEES_CSV, TRAINING_CSV, PERFORMANCE_CSV)
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn employee(id: i64, department: &str) -> Employee {
    Employee {
        employee_id: id,
        name: Some(format!("Employee {}", id)),
        department: Some(department.to_string()),
        job_role: Some("Analyst".to_string()),
        hire_date: Some("2020-01-01".to_string()),
        age: Some(30.0),
        gender: Some("F".to_string()),
    }
}

pub fn training(id: i64, hours: f64, certified: bool) -> Training {
    Training {
        employee_id: id,
        training_name: Some("Course".to_string()),
        completion_date: Some("2023-02-15".to_string()),
        hours_spent: Some(hours),
        certification_status: Some(u8::from(certified)),
    }
}

pub fn performance(id: i64, rating: f64, leave_days: u32) -> Performance {
    Performance {
        employee_id: id,
        month: Some("2023-06".to_string()),
        performance_rating: Some(rating),
        projects_completed: Some(3),
        leave_days_taken: Some(leave_days),
    }
}

/// Source tables where every employee has exactly one row in each table
pub fn matched_sources(ids: &[i64]) -> SourceTables {
    SourceTables {
        employees: ids.iter().map(|&id| employee(id, "Sales")).collect(),
        training: ids.iter().map(|&id| training(id, 8.0, true)).collect(),
        performance: ids.iter().map(|&id| performance(id, 4.5, 2)).collect(),
    }
}

/// Financial figures with round, hand-checkable results
pub fn scenario_input() -> FinancialInput {
    FinancialInput {
        project_name: "Alpha".to_string(),
        revenue: 1000.0,
        cost_of_goods_sold: 400.0,
        operating_expenses: 200.0,
        interest_expenses: 50.0,
        taxes: 50.0,
        initial_investment: 500.0,
        units_sold: 50,
        price_per_unit: 20.0,
        fixed_costs: 300.0,
        variable_cost_per_unit: 10.0,
    }
}

/// Assert two floats agree within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "Expected {} within {}, got {}",
        expected,
        tol,
        actual
    );
}
