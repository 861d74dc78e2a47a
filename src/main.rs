//! Metrica: workforce data cleaning and financial metrics CLI

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use metrica::cli::{
    run_analyze, run_history, run_interactive, run_workforce, Cli, Commands, FinanceArgs,
    FinanceCommand,
};
use metrica::finance::{FinancialInput, Ledger};
use metrica::pipeline::write_sample_datasets;
use metrica::utils::{init_logging, print_banner, print_completion, print_error, print_success};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    match cli.command {
        Commands::Workforce(args) => {
            print_banner(version, "Workforce data cleaning and analysis");
            run_workforce(&args)?;
        }
        Commands::Sample { dir } => {
            print_banner(version, "Sample workforce tables");
            for path in write_sample_datasets(&dir)? {
                print_success(&format!("Wrote {}", path.display()));
            }
        }
        Commands::Finance(FinanceArgs { ledger, command }) => {
            let ledger = Ledger::new(ledger);
            match command {
                Some(FinanceCommand::Analyze { input, no_save }) => {
                    let input = FinancialInput::from(input);
                    run_analyze(&input, &ledger, !no_save)?;
                }
                Some(FinanceCommand::History) => {
                    run_history(&ledger)?;
                }
                None => {
                    print_banner(version, "Financial metrics calculator");
                    let outcome = run_interactive(&ledger)?;
                    print_completion(&format!(
                        "Session closed, {} entries saved",
                        outcome.entries_saved
                    ));
                }
            }
        }
    }

    Ok(())
}
