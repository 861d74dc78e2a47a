//! Workforce pipeline orchestration for the `workforce` subcommand

use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use console::style;
use tracing::{debug, info};

use super::args::WorkforceArgs;
use crate::pipeline::{
    clean_table, columns_with_missing, correlated_pairs, count_missing_values,
    department_performance, describe, load_sources, merge_tables, save_clean_table,
    workforce_correlation, CleanTable, ColumnStats, CorrelationMatrix, DepartmentMean,
};
use crate::report::{
    correlation_table, department_chart, department_table, describe_table, export_timestamp,
    export_workforce_analysis, hours_rating_scatter, missing_values_table, preview_table,
    ExportMetadata, WorkforceExport, WorkforceSummary,
};
use crate::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_completion, print_count,
    print_indented, print_info, print_step_header, print_success, print_workforce_config,
};

/// Pairs above this absolute correlation are listed in the summary
pub const NOTABLE_CORRELATION: f64 = 0.5;

/// Everything a workforce run produced
#[derive(Debug)]
pub struct WorkforceRun {
    pub missing_counts: Vec<(String, usize)>,
    pub cleaned: CleanTable,
    pub departments: Vec<DepartmentMean>,
    pub correlation: CorrelationMatrix,
    pub statistics: Vec<ColumnStats>,
    pub summary: WorkforceSummary,
}

pub fn run_workforce(args: &WorkforceArgs) -> Result<WorkforceRun> {
    let start = Instant::now();
    let paths = args.source_paths();

    print_workforce_config(
        &paths.employees,
        &paths.training,
        &paths.performance,
        &args.output,
        &args.join.to_string(),
    );

    // Step 1: Load
    print_step_header(1, "Load Source Tables");
    let spinner = create_spinner("Reading employee, training, and performance tables...");
    let sources = match load_sources(&paths) {
        Ok(sources) => sources,
        Err(e) => {
            finish_with_warning(&spinner, "Failed to load source tables");
            return Err(e);
        }
    };
    finish_with_success(&spinner, "Source tables loaded");
    print_count("employees", sources.employees.len(), None);
    print_count("training records", sources.training.len(), None);
    print_count("performance records", sources.performance.len(), None);

    // Step 2: Merge
    print_step_header(2, "Merge on Employee ID");
    let merged = merge_tables(&sources, args.join);
    print_count(
        "combined rows",
        merged.len(),
        Some(&format!("({} join)", args.join)),
    );

    // Step 3: Missing values
    print_step_header(3, "Missing Value Analysis");
    let missing_counts = count_missing_values(&merged);
    let columns_filled = columns_with_missing(&missing_counts);
    print_indented(&missing_values_table(&missing_counts).to_string());
    if columns_filled.is_empty() {
        print_success("No missing values");
    } else {
        print_count("columns with missing values", columns_filled.len(), None);
    }

    // Step 4: Clean
    print_step_header(4, "Fill, Normalize, and Convert");
    let run_timestamp = Local::now().naive_local();
    let cleaned = clean_table(&merged, run_timestamp);
    debug!(rows = cleaned.len(), %run_timestamp, "cleaned table");
    print_success(&format!(
        "{} rows cleaned, {} columns",
        cleaned.len(),
        cleaned.columns.len()
    ));

    // Step 5: Analysis
    print_step_header(5, "Department Performance and Correlation");
    let departments = department_performance(&cleaned);
    if departments.is_empty() {
        print_info("No performance ratings available for department means");
    } else {
        print_indented(&department_table(&departments).to_string());
        println!();
        print_indented(&department_chart(&departments));
    }

    let scatter = hours_rating_scatter(&cleaned);
    if !scatter.is_empty() {
        println!();
        print_indented(&scatter);
    }

    let correlation = workforce_correlation(&cleaned);
    println!();
    print_indented(&correlation_table(&correlation).to_string());

    let statistics = describe(&cleaned);
    println!();
    print_indented(&describe_table(&statistics).to_string());

    // Step 6: Save
    print_step_header(6, "Save Cleaned Data");
    let spinner = create_spinner("Writing cleaned table...");
    save_clean_table(&cleaned, &args.output)?;
    finish_with_success(
        &spinner,
        &format!("Saved {}", style(args.output.display()).cyan()),
    );

    if args.preview_rows > 0 && !cleaned.is_empty() {
        println!();
        print_indented(&preview_table(&cleaned, args.preview_rows).to_string());
    }

    if let Some(json_path) = &args.summary_json {
        let spinner = create_spinner("Writing analysis summary...");
        let metadata = ExportMetadata {
            timestamp: export_timestamp(),
            run_timestamp: cleaned.run_timestamp.to_string(),
            metrica_version: env!("CARGO_PKG_VERSION").to_string(),
            employees_file: paths.employees.display().to_string(),
            training_file: paths.training.display().to_string(),
            performance_file: paths.performance.display().to_string(),
            output_file: args.output.display().to_string(),
            join_policy: args.join,
            combined_rows: cleaned.len(),
        };
        let export = WorkforceExport::new(
            metadata,
            &missing_counts,
            &departments,
            &correlation,
            &statistics,
        );
        match export_workforce_analysis(&export, json_path) {
            Ok(()) => finish_with_success(
                &spinner,
                &format!("Summary saved to {}", json_path.display()),
            ),
            Err(e) => {
                finish_with_warning(&spinner, "Summary export failed");
                return Err(e);
            }
        }
    }

    let summary = WorkforceSummary {
        employees: sources.employees.len(),
        training_rows: sources.training.len(),
        performance_rows: sources.performance.len(),
        join: args.join,
        merged_rows: merged.len(),
        columns_filled,
        departments: departments.len(),
        notable_correlations: correlated_pairs(&correlation, NOTABLE_CORRELATION),
        output: Some(args.output.clone()),
    };
    summary.display();

    info!(
        rows = cleaned.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "workforce run complete"
    );
    print_completion(&format!(
        "Workforce analysis complete in {:.2}s",
        start.elapsed().as_secs_f64()
    ));

    Ok(WorkforceRun {
        missing_counts,
        cleaned,
        departments,
        correlation,
        statistics,
        summary,
    })
}
