//! Financial input record collected once per analysis run

use serde::{Deserialize, Serialize};

/// Business figures entered for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInput {
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
}

/// Input field names in ledger order
pub const INPUT_FIELDS: [&str; 11] = [
    "project_name",
    "revenue",
    "cost_of_goods_sold",
    "operating_expenses",
    "interest_expenses",
    "taxes",
    "initial_investment",
    "units_sold",
    "price_per_unit",
    "fixed_costs",
    "variable_cost_per_unit",
];
