//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Input;

use crate::finance::FinancialInput;

/// Source of interactive answers for the finance session.
///
/// The console implementation reads from the terminal; tests drive the
/// session with scripted answers.
pub trait Prompter {
    /// Read the raw menu selection
    fn menu_choice(&mut self) -> Result<String>;

    /// Collect the figures for one analysis
    fn collect_input(&mut self) -> Result<FinancialInput>;
}

/// Prompter backed by the terminal
#[derive(Debug, Default)]
pub struct ConsolePrompter;

fn prompt_amount(label: &str) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(label)
        .validate_with(|v: &f64| -> Result<(), &str> {
            if v.is_finite() {
                Ok(())
            } else {
                Err("Enter a finite number")
            }
        })
        .interact_text()?;
    Ok(value)
}

impl Prompter for ConsolePrompter {
    fn menu_choice(&mut self) -> Result<String> {
        let choice = Input::<String>::new()
            .with_prompt("Choose an option")
            .interact_text()?;
        Ok(choice)
    }

    fn collect_input(&mut self) -> Result<FinancialInput> {
        let project_name = Input::<String>::new()
            .with_prompt("Project/Company Name")
            .interact_text()?;

        Ok(FinancialInput {
            project_name,
            revenue: prompt_amount("Total Revenue")?,
            cost_of_goods_sold: prompt_amount("Cost of Goods Sold (COGS)")?,
            operating_expenses: prompt_amount("Operating Expenses")?,
            interest_expenses: prompt_amount("Interest Expenses")?,
            taxes: prompt_amount("Taxes")?,
            initial_investment: prompt_amount("Initial Investment")?,
            units_sold: Input::<u64>::new()
                .with_prompt("Number of Units Sold")
                .interact_text()?,
            price_per_unit: prompt_amount("Price per Unit")?,
            fixed_costs: prompt_amount("Fixed Costs")?,
            variable_cost_per_unit: prompt_amount("Variable Cost per Unit")?,
        })
    }
}
