//! Command-line argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::finance::{FinancialInput, LEDGER_FILE};
use crate::pipeline::{
    JoinPolicy, SourcePaths, CLEANED_OUTPUT_FILE, EMPLOYEE_FILE, PERFORMANCE_FILE, TRAINING_FILE,
};

/// Metrica - Workforce data cleaning and financial metrics
#[derive(Parser, Debug)]
#[command(name = "metrica")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase diagnostic log verbosity (-v info, -vv debug, -vvv trace).
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge, clean, and analyze the three workforce tables
    Workforce(WorkforceArgs),

    /// Write the sample workforce tables to a directory
    Sample {
        /// Target directory (created if missing)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Financial metrics calculator with a CSV ledger
    Finance(FinanceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct WorkforceArgs {
    /// Employee information table (CSV or Parquet)
    #[arg(long, default_value = EMPLOYEE_FILE)]
    pub employees: PathBuf,

    /// Training records table (CSV or Parquet)
    #[arg(long, default_value = TRAINING_FILE)]
    pub training: PathBuf,

    /// Performance metrics table (CSV or Parquet)
    #[arg(long, default_value = PERFORMANCE_FILE)]
    pub performance: PathBuf,

    /// Cleaned output file (CSV or Parquet, determined by extension)
    #[arg(short, long, default_value = CLEANED_OUTPUT_FILE)]
    pub output: PathBuf,

    /// How employees without training or performance rows are treated.
    /// "left" keeps every employee, "inner" keeps only fully matched ones.
    #[arg(long, value_enum, default_value_t = JoinPolicy::Left)]
    pub join: JoinPolicy,

    /// Also write the analysis summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Number of cleaned rows shown in the preview table
    #[arg(long, default_value = "5")]
    pub preview_rows: usize,
}

impl WorkforceArgs {
    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths {
            employees: self.employees.clone(),
            training: self.training.clone(),
            performance: self.performance.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FinanceArgs {
    /// Ledger file receiving one row per analysis
    #[arg(long, default_value = LEDGER_FILE, global = true)]
    pub ledger: PathBuf,

    /// Run once without the menu. Omit to start the interactive session.
    #[command(subcommand)]
    pub command: Option<FinanceCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FinanceCommand {
    /// Compute metrics from command-line figures
    Analyze {
        #[command(flatten)]
        input: FinancialInputArgs,

        /// Print the report without appending to the ledger
        #[arg(long, default_value = "false")]
        no_save: bool,
    },

    /// Print every saved analysis
    History,
}

#[derive(Args, Debug, Clone)]
pub struct FinancialInputArgs {
    #[arg(long)]
    pub project_name: String,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub revenue: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub cost_of_goods_sold: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub operating_expenses: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub interest_expenses: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub taxes: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub initial_investment: f64,

    #[arg(long)]
    pub units_sold: u64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub price_per_unit: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub fixed_costs: f64,

    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub variable_cost_per_unit: f64,
}

impl From<FinancialInputArgs> for FinancialInput {
    fn from(args: FinancialInputArgs) -> Self {
        FinancialInput {
            project_name: args.project_name,
            revenue: args.revenue,
            cost_of_goods_sold: args.cost_of_goods_sold,
            operating_expenses: args.operating_expenses,
            interest_expenses: args.interest_expenses,
            taxes: args.taxes,
            initial_investment: args.initial_investment,
            units_sold: args.units_sold,
            price_per_unit: args.price_per_unit,
            fixed_costs: args.fixed_costs,
            variable_cost_per_unit: args.variable_cost_per_unit,
        }
    }
}

/// Validator for currency amounts
pub fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' must be a finite number", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finite_rejects_nan_and_text() {
        assert_eq!(parse_finite(" 12.5 "), Ok(12.5));
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("twelve").is_err());
    }
}
