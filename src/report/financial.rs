//! Financial analysis report, overview chart, and ledger table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use super::chart::{render_bar_chart, DEFAULT_BAR_WIDTH};
use crate::finance::{FinancialInput, FinancialMetrics, LedgerEntry, Metric};
use crate::utils::print_indented;

/// Format an amount as currency with two decimals, e.g. `-$12.50`
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

fn format_metric(metric: &Metric, render: impl Fn(f64) -> String) -> String {
    match metric {
        Metric::Value(v) => render(*v),
        Metric::Undefined(reason) => reason.to_string(),
    }
}

/// Report lines in display order, formatted to two decimals
pub fn report_lines(input: &FinancialInput, metrics: &FinancialMetrics) -> Vec<String> {
    vec![
        format!("Project/Company Name: {}", input.project_name),
        format!("Gross Profit: {}", format_currency(metrics.gross_profit)),
        format!("Operating Profit: {}", format_currency(metrics.operating_profit)),
        format!("Net Profit: {}", format_currency(metrics.net_profit)),
        format!(
            "Profit Margin: {}",
            format_metric(&metrics.profit_margin_pct, |v| format!("{:.2}%", v))
        ),
        format!(
            "Return on Investment (ROI): {}",
            format_metric(&metrics.roi_pct, |v| format!("{:.2}%", v))
        ),
        format!("EBITDA: {}", format_currency(metrics.ebitda)),
        format!(
            "Contribution Margin: {} per unit",
            format_currency(metrics.contribution_margin)
        ),
        format!(
            "Break-Even Point: {}",
            format_metric(&metrics.break_even_units, |v| format!("{:.2} units", v))
        ),
    ]
}

/// Print the financial analysis report
pub fn display_financial_report(input: &FinancialInput, metrics: &FinancialMetrics) {
    println!();
    println!(
        "    {} {}",
        style("💰").cyan(),
        style("FINANCIAL ANALYSIS REPORT").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    for line in report_lines(input, metrics) {
        println!("      {}", line);
    }

    let undefined = metrics.undefined();
    if !undefined.is_empty() {
        println!();
        for (name, reason) in undefined {
            println!(
                "      {} {}: {}",
                style("!").yellow().bold(),
                name,
                style(reason).yellow()
            );
        }
    }
}

/// Bars of the financial overview chart
pub fn overview_bars(input: &FinancialInput, metrics: &FinancialMetrics) -> Vec<(String, f64)> {
    vec![
        ("Revenue".to_string(), input.revenue),
        ("COGS".to_string(), input.cost_of_goods_sold),
        ("Operating Expenses".to_string(), input.operating_expenses),
        ("Net Profit".to_string(), metrics.net_profit),
    ]
}

/// Print the financial overview as a bar chart
pub fn display_overview_chart(input: &FinancialInput, metrics: &FinancialMetrics) {
    println!();
    println!("    {}", style("Financial Overview ($)").white().bold());
    print_indented(&render_bar_chart(
        &overview_bars(input, metrics),
        DEFAULT_BAR_WIDTH,
        2,
    ));
}

fn amount_cell(value: Option<f64>, suffix: &str) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{:.2}{}", v, suffix))
            .set_alignment(CellAlignment::Right)
            .fg(if v < 0.0 { Color::Red } else { Color::White }),
        None => Cell::new("undefined").fg(Color::DarkGrey),
    }
}

/// Ledger rows as a table, oldest first
pub fn ledger_table(entries: &[LedgerEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        [
            "#",
            "Project",
            "Revenue",
            "Net Profit",
            "Margin",
            "ROI",
            "EBITDA",
            "Break-Even",
        ]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect::<Vec<_>>(),
    );

    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.project_name),
            amount_cell(Some(entry.revenue), ""),
            amount_cell(Some(entry.net_profit), ""),
            amount_cell(entry.profit_margin, "%"),
            amount_cell(entry.roi, "%"),
            amount_cell(Some(entry.ebitda), ""),
            amount_cell(entry.break_even_point, ""),
        ]);
    }
    table
}
