//! Workforce analysis summary tables

use std::collections::BTreeMap;
use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use super::chart::{
    render_bar_chart, render_scatter, ScatterSeries, DEFAULT_BAR_WIDTH, DEFAULT_SCATTER_SIZE,
};
use crate::pipeline::{
    CleanTable, ColumnStats, CorrelatedPair, CorrelationMatrix, DepartmentMean, JoinPolicy,
};
use crate::utils::print_indented;

fn header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|l| Cell::new(l).add_attribute(Attribute::Bold))
        .collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table
}

fn optional_cell(value: Option<f64>, precision: usize) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{:.precision$}", v)).set_alignment(CellAlignment::Right),
        None => Cell::new("n/a").fg(Color::DarkGrey),
    }
}

/// Missing value counts per merged column
pub fn missing_values_table(counts: &[(String, usize)]) -> Table {
    let mut table = new_table();
    table.set_header(header(&["Column", "Missing"]));
    for (column, count) in counts {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(count).fg(if *count == 0 { Color::White } else { Color::Red }),
        ]);
    }
    table
}

/// Department means as a table
pub fn department_table(means: &[DepartmentMean]) -> Table {
    let mut table = new_table();
    table.set_header(header(&["Department", "Avg Rating", "Rows"]));
    for mean in means {
        table.add_row(vec![
            Cell::new(&mean.department),
            Cell::new(format!("{:.2}", mean.mean_rating)).set_alignment(CellAlignment::Right),
            Cell::new(mean.observations).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Department means as a horizontal bar chart
pub fn department_chart(means: &[DepartmentMean]) -> String {
    let bars: Vec<(String, f64)> = means
        .iter()
        .map(|m| (m.department.clone(), m.mean_rating))
        .collect();
    render_bar_chart(&bars, DEFAULT_BAR_WIDTH, 2)
}

/// Hours spent against performance rating, one marker per department
pub fn hours_rating_scatter(table: &CleanTable) -> String {
    let mut by_department: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
    for row in &table.rows {
        if let (Some(hours), Some(rating)) = (row.hours_spent, row.performance_rating) {
            by_department
                .entry(row.department.as_str())
                .or_default()
                .push((hours, rating));
        }
    }

    let series: Vec<ScatterSeries> = by_department
        .into_iter()
        .map(|(department, points)| ScatterSeries {
            label: department.to_string(),
            points,
        })
        .collect();
    render_scatter(&series, DEFAULT_SCATTER_SIZE, "Hours Spent", "Rating")
}

fn heat_color(corr: f64) -> Color {
    match corr {
        c if c >= 0.7 => Color::Red,
        c if c >= 0.3 => Color::Yellow,
        c if c > -0.3 => Color::White,
        c if c > -0.7 => Color::Cyan,
        _ => Color::Blue,
    }
}

/// Correlation matrix with heat-colored cells
pub fn correlation_table(matrix: &CorrelationMatrix) -> Table {
    let mut table = new_table();
    let mut labels = vec![""];
    labels.extend(matrix.columns().iter().map(String::as_str));
    table.set_header(header(&labels));

    for (i, name) in matrix.columns().iter().enumerate() {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        for j in 0..matrix.len() {
            row.push(match matrix.get(i, j) {
                Some(c) => Cell::new(format!("{:.3}", c))
                    .fg(heat_color(c))
                    .set_alignment(CellAlignment::Right),
                None => Cell::new("undefined").fg(Color::DarkGrey),
            });
        }
        table.add_row(row);
    }
    table
}

/// Descriptive statistics table
pub fn describe_table(stats: &[ColumnStats]) -> Table {
    let mut table = new_table();
    table.set_header(header(&["Column", "Count", "Missing", "Mean", "Std", "Min", "Max"]));
    for s in stats {
        table.add_row(vec![
            Cell::new(&s.column),
            Cell::new(s.count).set_alignment(CellAlignment::Right),
            Cell::new(s.missing).set_alignment(CellAlignment::Right),
            optional_cell(s.mean, 2),
            optional_cell(s.std, 2),
            optional_cell(s.min, 2),
            optional_cell(s.max, 2),
        ]);
    }
    table
}

/// First `limit` rows of the cleaned table
pub fn preview_table(table: &CleanTable, limit: usize) -> Table {
    let mut out = new_table();
    out.set_header(header(&[
        "employee_id",
        "name",
        "department",
        "training_name",
        "hours_spent",
        "certification_status",
        "performance_rating",
        "leave_days_taken",
        "training_completion_year",
    ]));

    for row in table.rows.iter().take(limit) {
        out.add_row(vec![
            Cell::new(row.employee_id),
            Cell::new(&row.name),
            Cell::new(&row.department),
            Cell::new(&row.training_name),
            optional_cell(row.hours_spent, 1),
            optional_cell(row.certification_status, 2),
            optional_cell(row.performance_rating, 2),
            Cell::new(row.leave_days_taken),
            match row.training_completion_year {
                Some(year) => Cell::new(year),
                None => Cell::new("n/a").fg(Color::DarkGrey),
            },
        ]);
    }
    out
}

/// Summary of a workforce run
#[derive(Debug, Default)]
pub struct WorkforceSummary {
    pub employees: usize,
    pub training_rows: usize,
    pub performance_rows: usize,
    pub join: JoinPolicy,
    pub merged_rows: usize,
    pub columns_filled: Vec<String>,
    pub departments: usize,
    pub notable_correlations: Vec<CorrelatedPair>,
    pub output: Option<PathBuf>,
}

impl WorkforceSummary {
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("WORKFORCE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = new_table();
        table.set_header(header(&["Metric", "Value"]));
        table.add_row(vec![Cell::new("👥 Employees"), Cell::new(self.employees)]);
        table.add_row(vec![Cell::new("🎓 Training rows"), Cell::new(self.training_rows)]);
        table.add_row(vec![
            Cell::new("📈 Performance rows"),
            Cell::new(self.performance_rows),
        ]);
        table.add_row(vec![
            Cell::new("🔗 Join policy"),
            Cell::new(self.join.to_string()),
        ]);
        table.add_row(vec![
            Cell::new("🧾 Combined rows"),
            Cell::new(self.merged_rows)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("🩹 Columns filled"),
            Cell::new(self.columns_filled.len()).fg(if self.columns_filled.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![Cell::new("🏢 Departments"), Cell::new(self.departments)]);

        print_indented(&table.to_string());

        if !self.notable_correlations.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Notable correlations").yellow(),
                style(format!("({})", self.notable_correlations.len())).dim()
            );
            for pair in &self.notable_correlations {
                println!(
                    "        {} {} ↔ {}: {:.3}",
                    style("•").dim(),
                    pair.column1,
                    pair.column2,
                    pair.correlation
                );
            }
        }

        if let Some(output) = &self.output {
            println!();
            println!(
                "      {} {}",
                style("Cleaned data saved to").dim(),
                style(output.display()).cyan()
            );
        }
    }
}
