//! Finance menu parsing and the interactive session loop

use std::str::FromStr;

use anyhow::Result;
use console::style;
use thiserror::Error;
use tracing::{info, warn};

use super::prompts::Prompter;
use crate::finance::{analyze, Ledger};
use crate::report::{display_financial_report, display_overview_chart, ledger_table};
use crate::utils::{print_error, print_indented, print_info, print_success, print_warning};

/// Entries of the numbered finance menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewEntry,
    LoadLedger,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid choice {0:?}, enter 1, 2, or 3")]
pub struct InvalidMenuChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidMenuChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::NewEntry),
            "2" => Ok(MenuChoice::LoadLedger),
            "3" => Ok(MenuChoice::Exit),
            other => Err(InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Counters collected over one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    pub entries_saved: usize,
    pub failed_saves: usize,
    pub ledger_views: usize,
    pub invalid_choices: usize,
}

pub fn print_menu() {
    println!();
    println!("    {}", style("Financial Analysis Menu").white().bold());
    println!("      1. Enter new financial data");
    println!("      2. Load existing financial data");
    println!("      3. Exit");
}

/// Run the menu loop until the user chooses to exit.
///
/// Save failures and unknown choices are reported and the loop continues.
/// Errors from the prompter itself (closed terminal) end the session.
pub fn run_finance_session<P: Prompter>(prompter: &mut P, ledger: &Ledger) -> Result<SessionOutcome> {
    let mut outcome = SessionOutcome::default();

    loop {
        print_menu();
        let raw = prompter.menu_choice()?;

        let choice = match raw.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                warn!(choice = %e.0, "invalid menu choice");
                print_warning(&e.to_string());
                outcome.invalid_choices += 1;
                continue;
            }
        };

        match choice {
            MenuChoice::NewEntry => {
                let input = prompter.collect_input()?;
                let metrics = analyze(&input);
                display_financial_report(&input, &metrics);

                match ledger.append(&input, &metrics) {
                    Ok(_) => {
                        outcome.entries_saved += 1;
                        print_success(&format!("Saved to {}", ledger.path().display()));
                    }
                    Err(e) => {
                        outcome.failed_saves += 1;
                        print_error(&format!("Could not save entry: {:#}", e));
                    }
                }

                display_overview_chart(&input, &metrics);
            }
            MenuChoice::LoadLedger => {
                outcome.ledger_views += 1;
                match ledger.load() {
                    Ok(Some(entries)) => {
                        print_info(&format!(
                            "{} saved analyses in {}",
                            entries.len(),
                            ledger.path().display()
                        ));
                        print_indented(&ledger_table(&entries).to_string());
                    }
                    Ok(None) => print_warning("No data file found"),
                    Err(e) => print_error(&format!("{:#}", e)),
                }
            }
            MenuChoice::Exit => {
                info!(?outcome, "finance session finished");
                return Ok(outcome);
            }
        }
    }
}
