//! Unit tests for the workforce table loader

use metrica::pipeline::{
    load_employees, load_performance, load_sources, load_training, sample_frames, save_dataset,
};
use metrica::AnalysisError;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_three_csv_tables() {
    let (_temp_dir, paths) = write_default_workforce_csvs();

    let sources = load_sources(&paths).unwrap();

    assert_eq!(sources.employees.len(), 4);
    assert_eq!(sources.training.len(), 4);
    assert_eq!(sources.performance.len(), 4);

    let alice = &sources.employees[0];
    assert_eq!(alice.employee_id, 101);
    assert_eq!(alice.department.as_deref(), Some("Sales"));
    assert_eq!(alice.age, Some(29.0));
    assert_eq!(alice.hire_date.as_deref(), Some("2018-03-15"));

    assert_eq!(sources.training[0].hours_spent, Some(8.0));
    assert_eq!(sources.training[0].certification_status, Some(1));
    assert_eq!(sources.training[2].certification_status, Some(0));
    assert_eq!(sources.performance[1].performance_rating, Some(4.8));
    assert_eq!(sources.performance[3].leave_days_taken, Some(4));
}

#[test]
fn test_header_whitespace_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "employees.csv",
        " Employee ID ,Name,Department ,Job Role,Hire Date,Age,Gender\n101,Ann,Sales,Rep,2020-01-01,30,F\n",
    );

    let employees = load_employees(&path).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].department.as_deref(), Some("Sales"));
}

#[test]
fn test_empty_cells_load_as_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "training.csv",
        "Employee ID,Training Name,Completion Date,Hours Spent,Certification Status\n\
         101,,2023-02-15,,\n\
         102,Coding,,-3,maybe\n",
    );

    let training = load_training(&path).unwrap();
    assert_eq!(training.len(), 2);
    assert_eq!(training[0].training_name, None);
    assert_eq!(training[0].hours_spent, None);
    assert_eq!(training[0].certification_status, None);
    assert_eq!(training[1].completion_date, None);
    assert_eq!(training[1].hours_spent, None, "Negative hours are not valid");
    assert_eq!(training[1].certification_status, None);
}

#[test]
fn test_missing_file_is_typed_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Employee_Information.csv");

    let err = load_employees(&path).unwrap_err();
    match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::MissingFile { path: missing }) => assert_eq!(missing, &path),
        other => panic!("Expected MissingFile, got {:?}", other),
    }
}

#[test]
fn test_missing_join_key_is_schema_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "performance.csv",
        "Staff ID,Month,Performance Rating,Projects Completed,Leave Days Taken\n101,2023-06,4.5,5,2\n",
    );

    let err = load_performance(&path).unwrap_err();
    match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::SchemaMismatch { table, column, available, .. }) => {
            assert_eq!(*table, "performance");
            assert_eq!(*column, "Employee ID");
            assert!(available.contains(&"Staff ID".to_string()));
        }
        other => panic!("Expected SchemaMismatch, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_key_is_invalid_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "employees.csv",
        "Employee ID,Name,Department,Job Role,Hire Date,Age,Gender\n101,Ann,Sales,Rep,2020-01-01,30,F\nabc,Bo,IT,Dev,2021-01-01,31,M\n",
    );

    let err = load_employees(&path).unwrap_err();
    match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::InvalidKey { table, row, value }) => {
            assert_eq!(*table, "employee");
            assert_eq!(*row, 1);
            assert_eq!(value, "abc");
        }
        other => panic!("Expected InvalidKey, got {:?}", other),
    }
}

#[test]
fn test_load_parquet_tables() {
    let temp_dir = TempDir::new().unwrap();
    let (mut employees, _, mut performance) = sample_frames().unwrap();

    let employees_path = temp_dir.path().join("employees.parquet");
    let performance_path = temp_dir.path().join("performance.parquet");
    save_dataset(&mut employees, &employees_path).unwrap();
    save_dataset(&mut performance, &performance_path).unwrap();

    let employees = load_employees(&employees_path).unwrap();
    let performance = load_performance(&performance_path).unwrap();

    assert_eq!(employees.len(), 4);
    assert_eq!(employees[3].employee_id, 104);
    assert_eq!(employees[3].age, Some(30.0));
    assert_eq!(performance[0].performance_rating, Some(4.5));
    assert_eq!(performance[0].projects_completed, Some(5));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "employees.txt", EMPLOYEES_CSV);

    let err = load_employees(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported file format"));
}
