//! CLI module - argument parsing, prompts, and subcommand handlers

pub mod args;
pub mod finance;
pub mod menu;
pub mod prompts;
pub mod workforce;

pub use args::{Cli, Commands, FinanceArgs, FinanceCommand, FinancialInputArgs, WorkforceArgs};
pub use finance::{run_analyze, run_history, run_interactive};
pub use menu::{run_finance_session, InvalidMenuChoice, MenuChoice, SessionOutcome};
pub use prompts::{ConsolePrompter, Prompter};
pub use workforce::{run_workforce, WorkforceRun};
