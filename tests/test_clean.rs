//! Tests for the fill policy, normalization, and date coercion

use chrono::{NaiveDate, NaiveDateTime};
use metrica::pipeline::{clean_table, merge_tables, JoinPolicy, SourceTables, UNKNOWN};

#[path = "common/mod.rs"]
mod common;

use common::*;

fn run_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

#[test]
fn test_scenario_row_keeps_source_values() {
    let sources = SourceTables {
        employees: vec![employee(101, "Sales")],
        training: vec![training(101, 8.0, true)],
        performance: vec![performance(101, 4.5, 2)],
    };

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    assert_eq!(cleaned.len(), 1);
    let row = &cleaned.rows[0];
    assert_eq!(row.employee_id, 101);
    assert_eq!(row.department, "Sales");
    assert_eq!(row.hours_spent, Some(8.0));
    assert_eq!(row.certification_status, Some(1.0));
    assert_eq!(row.performance_rating, Some(4.5));
    assert_eq!(row.completion_date, NaiveDate::from_ymd_opt(2023, 2, 15));
    assert_eq!(row.training_completion_year, Some(2023));
}

#[test]
fn test_unmatched_employee_gets_defaults() {
    let mut sources = matched_sources(&[101, 102]);
    sources.employees.push(employee(103, "HR"));

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    let row = &cleaned.rows[2];
    assert_eq!(row.employee_id, 103);
    assert_eq!(row.training_name, UNKNOWN);
    assert_eq!(row.month, UNKNOWN);
    assert_eq!(row.projects_completed, 0);
    assert_eq!(row.leave_days_taken, 0);
    // Numeric columns without an explicit default take the column mean
    assert_eq!(row.certification_status, Some(1.0));
    assert_eq!(row.hours_spent, Some(8.0));
    assert_eq!(row.performance_rating, Some(4.5));
}

#[test]
fn test_missing_certification_takes_column_mean() {
    let sources = SourceTables {
        employees: vec![employee(1, "Sales"), employee(2, "Sales")],
        training: vec![training(1, 8.0, true)],
        performance: vec![],
    };

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    assert_eq!(cleaned.rows[0].certification_status, Some(1.0));
    assert_eq!(cleaned.rows[1].certification_status, Some(1.0));
}

#[test]
fn test_certification_mean_reflects_mixed_statuses() {
    let mut sources = matched_sources(&[1, 2]);
    sources.training[1].certification_status = Some(0);
    sources.employees.push(employee(3, "IT"));

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    assert_eq!(cleaned.rows[1].certification_status, Some(0.0));
    assert_close(cleaned.rows[2].certification_status.unwrap(), 0.5, 1e-12);
}

#[test]
fn test_missing_completion_date_uses_run_date() {
    let mut sources = matched_sources(&[101]);
    sources.training[0].completion_date = None;

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    let row = &cleaned.rows[0];
    assert_eq!(row.completion_date, NaiveDate::from_ymd_opt(2024, 5, 6));
    assert_eq!(row.training_completion_year, Some(2024));
    assert_eq!(cleaned.run_timestamp, run_timestamp());
}

#[test]
fn test_unparsable_dates_become_missing() {
    let mut sources = matched_sources(&[101]);
    sources.training[0].completion_date = Some("sometime in spring".to_string());
    sources.employees[0].hire_date = Some("31/31/2020".to_string());

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    let row = &cleaned.rows[0];
    assert_eq!(row.completion_date, None);
    assert_eq!(row.training_completion_year, None);
    assert_eq!(row.hire_date, None);
}

#[test]
fn test_mean_fill_uses_observed_values() {
    let mut sources = matched_sources(&[101, 102, 103]);
    sources.employees[0].age = Some(20.0);
    sources.employees[1].age = Some(40.0);
    sources.employees[2].age = None;
    sources.training[2].hours_spent = None;
    sources.training[0].hours_spent = Some(2.0);
    sources.training[1].hours_spent = Some(6.0);

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    assert_eq!(cleaned.rows[2].age, Some(30.0));
    assert_eq!(cleaned.rows[2].hours_spent, Some(4.0));
}

#[test]
fn test_all_missing_numeric_column_stays_missing() {
    let mut sources = matched_sources(&[101, 102]);
    for p in &mut sources.performance {
        p.performance_rating = None;
    }

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    assert!(cleaned.rows.iter().all(|r| r.performance_rating.is_none()));
}

#[test]
fn test_categorical_missing_becomes_unknown() {
    let mut sources = matched_sources(&[101]);
    sources.employees[0].department = None;
    sources.employees[0].gender = None;

    let cleaned = clean_table(&merge_tables(&sources, JoinPolicy::Left), run_timestamp());

    assert_eq!(cleaned.rows[0].department, UNKNOWN);
    assert_eq!(cleaned.rows[0].gender, UNKNOWN);
}

#[test]
fn test_cleaned_header_is_normalized() {
    let cleaned = clean_table(
        &merge_tables(&matched_sources(&[101]), JoinPolicy::Left),
        run_timestamp(),
    );

    assert_eq!(cleaned.columns.len(), 16);
    assert_eq!(cleaned.columns[0], "employee_id");
    assert_eq!(cleaned.columns[14], "leave_days_taken");
    assert_eq!(cleaned.columns[15], "training_completion_year");
    for column in &cleaned.columns {
        assert_eq!(column, &column.trim().to_lowercase().replace(' ', "_"));
    }
}
