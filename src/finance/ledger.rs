//! Append-only ledger of financial analysis runs
//!
//! The ledger is a CSV file whose header lists the input fields followed by
//! the metric fields. Rows are only ever appended.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{FinancialInput, INPUT_FIELDS};
use super::metrics::{FinancialMetrics, METRIC_FIELDS};
use crate::error::AnalysisError;

/// Default ledger file name
pub const LEDGER_FILE: &str = "financial_data.csv";

/// One persisted run. Undefined metrics are stored as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub project_name: String,
    pub revenue: f64,
    pub cost_of_goods_sold: f64,
    pub operating_expenses: f64,
    pub interest_expenses: f64,
    pub taxes: f64,
    pub initial_investment: f64,
    pub units_sold: u64,
    pub price_per_unit: f64,
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    pub gross_profit: f64,
    pub operating_profit: f64,
    pub net_profit: f64,
    pub profit_margin: Option<f64>,
    pub roi: Option<f64>,
    pub ebitda: f64,
    pub contribution_margin: f64,
    pub break_even_point: Option<f64>,
}

impl LedgerEntry {
    pub fn new(input: &FinancialInput, metrics: &FinancialMetrics) -> Self {
        Self {
            project_name: input.project_name.clone(),
            revenue: input.revenue,
            cost_of_goods_sold: input.cost_of_goods_sold,
            operating_expenses: input.operating_expenses,
            interest_expenses: input.interest_expenses,
            taxes: input.taxes,
            initial_investment: input.initial_investment,
            units_sold: input.units_sold,
            price_per_unit: input.price_per_unit,
            fixed_costs: input.fixed_costs,
            variable_cost_per_unit: input.variable_cost_per_unit,
            gross_profit: metrics.gross_profit,
            operating_profit: metrics.operating_profit,
            net_profit: metrics.net_profit,
            profit_margin: metrics.profit_margin_pct.value(),
            roi: metrics.roi_pct.value(),
            ebitda: metrics.ebitda,
            contribution_margin: metrics.contribution_margin,
            break_even_point: metrics.break_even_units.value(),
        }
    }
}

/// Ledger header: input field names followed by metric field names
pub fn ledger_columns() -> Vec<&'static str> {
    INPUT_FIELDS.iter().chain(METRIC_FIELDS.iter()).copied().collect()
}

/// Handle to a ledger file
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one run to the ledger.
    ///
    /// A missing, empty or blank file gets the header row first. An
    /// existing file must carry the expected header; its rows are left
    /// untouched and the new row is written after them.
    pub fn append(
        &self,
        input: &FinancialInput,
        metrics: &FinancialMetrics,
    ) -> Result<LedgerEntry> {
        let entry = LedgerEntry::new(input, metrics);

        let existing = if self.path.exists() {
            std::fs::read(&self.path)
                .with_context(|| format!("Failed to read ledger: {}", self.path.display()))?
        } else {
            Vec::new()
        };
        // Whitespace-only content counts as an empty ledger
        let write_header = existing.iter().all(u8::is_ascii_whitespace);

        if !write_header {
            self.check_header(&existing)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(!write_header)
            .truncate(write_header)
            .open(&self.path)
            .with_context(|| format!("Failed to open ledger: {}", self.path.display()))?;

        // A last row without a line terminator would swallow the new row
        if !write_header && existing.last().is_some_and(|b| *b != b'\n') {
            file.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer
            .serialize(&entry)
            .with_context(|| format!("Failed to write ledger row: {}", self.path.display()))?;
        writer.flush()?;

        debug!(path = %self.path.display(), header = write_header, "appended ledger row");
        Ok(entry)
    }

    fn check_header(&self, contents: &[u8]) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new().from_reader(contents);
        let found: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to read ledger header: {}", self.path.display()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let expected: Vec<String> = ledger_columns().into_iter().map(String::from).collect();

        if found != expected {
            return Err(AnalysisError::LedgerSchemaMismatch {
                path: self.path.clone(),
                expected,
                found,
            }
            .into());
        }
        Ok(())
    }

    /// Load every run in insertion order, or `None` when no ledger exists yet
    pub fn load(&self) -> Result<Option<Vec<LedgerEntry>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open ledger: {}", self.path.display()))?;

        let entries = reader
            .deserialize::<LedgerEntry>()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse ledger: {}", self.path.display()))?;

        Ok(Some(entries))
    }
}
