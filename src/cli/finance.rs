//! Handlers for the `finance` subcommand

use anyhow::Result;

use super::menu::{run_finance_session, SessionOutcome};
use super::prompts::ConsolePrompter;
use crate::finance::{analyze, FinancialInput, FinancialMetrics, Ledger, LedgerEntry};
use crate::report::{display_financial_report, display_overview_chart, ledger_table};
use crate::utils::{print_indented, print_info, print_section, print_success, print_warning};

/// Compute, print, and optionally persist one analysis
pub fn run_analyze(
    input: &FinancialInput,
    ledger: &Ledger,
    save: bool,
) -> Result<(FinancialMetrics, Option<LedgerEntry>)> {
    let metrics = analyze(input);
    display_financial_report(input, &metrics);

    let entry = if save {
        let entry = ledger.append(input, &metrics)?;
        print_success(&format!("Saved to {}", ledger.path().display()));
        Some(entry)
    } else {
        None
    };

    display_overview_chart(input, &metrics);
    Ok((metrics, entry))
}

/// Print every saved analysis. Returns the number of entries shown.
pub fn run_history(ledger: &Ledger) -> Result<usize> {
    print_section("Saved Analyses");
    match ledger.load()? {
        Some(entries) => {
            print_info(&format!(
                "{} saved analyses in {}",
                entries.len(),
                ledger.path().display()
            ));
            print_indented(&ledger_table(&entries).to_string());
            Ok(entries.len())
        }
        None => {
            print_warning("No data file found");
            Ok(0)
        }
    }
}

/// Start the interactive menu on the terminal
pub fn run_interactive(ledger: &Ledger) -> Result<SessionOutcome> {
    let mut prompter = ConsolePrompter;
    run_finance_session(&mut prompter, ledger)
}
