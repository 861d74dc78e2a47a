//! Financial metric engine
//!
//! A pure mapping from [`FinancialInput`] to [`FinancialMetrics`]. Ratios
//! whose denominator is zero come back as [`Metric::Undefined`] with the
//! reason attached, so a run never aborts on a division.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::input::FinancialInput;

/// Why a metric has no numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedMetric {
    #[error("undefined: revenue is zero")]
    ZeroRevenue,
    #[error("undefined: initial investment is zero")]
    ZeroInvestment,
    #[error("undefined: contribution margin is zero")]
    ZeroContributionMargin,
    #[error("unreachable: contribution margin does not cover fixed costs")]
    BreakEvenUnreachable,
}

/// A derived value that may be undefined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Undefined(UndefinedMetric),
}

impl Metric {
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::Undefined(_) => None,
        }
    }

    /// `numerator / denominator * 100`, undefined when the denominator is zero
    fn percentage(numerator: f64, denominator: f64, reason: UndefinedMetric) -> Self {
        if denominator == 0.0 {
            Metric::Undefined(reason)
        } else {
            Metric::Value(numerator / denominator * 100.0)
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{:.2}", v),
            Metric::Undefined(reason) => write!(f, "{}", reason),
        }
    }
}

/// Metrics derived from one [`FinancialInput`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialMetrics {
    pub gross_profit: f64,
    pub operating_profit: f64,
    pub net_profit: f64,
    pub profit_margin_pct: Metric,
    pub roi_pct: Metric,
    pub ebitda: f64,
    pub contribution_margin: f64,
    pub break_even_units: Metric,
}

/// Metric field names in ledger order
pub const METRIC_FIELDS: [&str; 8] = [
    "gross_profit",
    "operating_profit",
    "net_profit",
    "profit_margin",
    "roi",
    "ebitda",
    "contribution_margin",
    "break_even_point",
];

impl FinancialMetrics {
    /// Metrics that could not be computed, with their reasons
    pub fn undefined(&self) -> Vec<(&'static str, UndefinedMetric)> {
        [
            ("profit_margin", self.profit_margin_pct),
            ("roi", self.roi_pct),
            ("break_even_point", self.break_even_units),
        ]
        .into_iter()
        .filter_map(|(name, metric)| match metric {
            Metric::Undefined(reason) => Some((name, reason)),
            Metric::Value(_) => None,
        })
        .collect()
    }
}

/// Units needed to cover fixed costs.
///
/// A non-positive contribution margin with positive fixed costs can never
/// break even and is reported as such instead of a negative unit count.
fn break_even(fixed_costs: f64, contribution_margin: f64) -> Metric {
    if contribution_margin == 0.0 {
        return Metric::Undefined(if fixed_costs > 0.0 {
            UndefinedMetric::BreakEvenUnreachable
        } else {
            UndefinedMetric::ZeroContributionMargin
        });
    }
    if contribution_margin < 0.0 && fixed_costs > 0.0 {
        return Metric::Undefined(UndefinedMetric::BreakEvenUnreachable);
    }
    if fixed_costs == 0.0 {
        return Metric::Value(0.0);
    }
    Metric::Value(fixed_costs / contribution_margin)
}

/// Compute all financial metrics for one input record
pub fn analyze(input: &FinancialInput) -> FinancialMetrics {
    let gross_profit = input.revenue - input.cost_of_goods_sold;
    let operating_profit = gross_profit - input.operating_expenses;
    let net_profit = operating_profit - input.interest_expenses - input.taxes;
    let ebitda = gross_profit - input.operating_expenses;
    let contribution_margin = input.price_per_unit - input.variable_cost_per_unit;

    FinancialMetrics {
        gross_profit,
        operating_profit,
        net_profit,
        profit_margin_pct: Metric::percentage(
            net_profit,
            input.revenue,
            UndefinedMetric::ZeroRevenue,
        ),
        roi_pct: Metric::percentage(
            net_profit,
            input.initial_investment,
            UndefinedMetric::ZeroInvestment,
        ),
        ebitda,
        contribution_margin,
        break_even_units: break_even(input.fixed_costs, contribution_margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_handles_zero_denominator() {
        assert_eq!(
            Metric::percentage(1.0, 0.0, UndefinedMetric::ZeroRevenue),
            Metric::Undefined(UndefinedMetric::ZeroRevenue)
        );
        assert_eq!(
            Metric::percentage(1.0, 4.0, UndefinedMetric::ZeroRevenue),
            Metric::Value(25.0)
        );
    }

    #[test]
    fn break_even_cases() {
        assert_eq!(break_even(300.0, 10.0), Metric::Value(30.0));
        assert_eq!(
            break_even(300.0, 0.0),
            Metric::Undefined(UndefinedMetric::BreakEvenUnreachable)
        );
        assert_eq!(
            break_even(0.0, 0.0),
            Metric::Undefined(UndefinedMetric::ZeroContributionMargin)
        );
        assert_eq!(
            break_even(300.0, -5.0),
            Metric::Undefined(UndefinedMetric::BreakEvenUnreachable)
        );
        assert_eq!(break_even(0.0, -5.0), Metric::Value(0.0));
    }

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(Metric::Value(30.0).to_string(), "30.00");
        assert_eq!(
            Metric::Undefined(UndefinedMetric::ZeroRevenue).to_string(),
            "undefined: revenue is zero"
        );
    }
}
