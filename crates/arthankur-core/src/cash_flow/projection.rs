use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ArthankurError;
use crate::time_value::compound_factor;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::ArthankurResult;

/// Monthly growth applied to revenue.
pub const REVENUE_GROWTH: Rate = dec!(0.05);
/// Monthly growth applied to operating expenses.
pub const OPERATING_EXPENSE_GROWTH: Rate = dec!(0.03);
/// Monthly growth applied to general expenses.
pub const EXPENSE_GROWTH: Rate = dec!(0.02);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Supported projection horizons, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ForecastHorizon {
    Quarter,
    HalfYear,
    Year,
}

impl ForecastHorizon {
    pub fn months(self) -> u32 {
        match self {
            ForecastHorizon::Quarter => 3,
            ForecastHorizon::HalfYear => 6,
            ForecastHorizon::Year => 12,
        }
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = ArthankurError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(ForecastHorizon::Quarter),
            6 => Ok(ForecastHorizon::HalfYear),
            12 => Ok(ForecastHorizon::Year),
            other => Err(ArthankurError::InvalidInput {
                field: "horizon".into(),
                reason: format!("Horizon must be 3, 6 or 12 months, got {other}."),
            }),
        }
    }
}

impl From<ForecastHorizon> for u32 {
    fn from(h: ForecastHorizon) -> u32 {
        h.months()
    }
}

impl std::fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} months", self.months())
    }
}

/// Current monthly run-rate figures to project forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowInput {
    pub revenue: Money,
    pub expenses: Money,
    pub operating_expenses: Money,
    pub capital_expenditure: Money,
    pub horizon: ForecastHorizon,
}

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPeriod {
    /// 1-based month index
    pub period_index: u32,
    pub projected_revenue: Money,
    pub projected_expenses: Money,
    pub projected_operating_expenses: Money,
    pub projected_capital_expenditure: Money,
    /// revenue - expenses - operating expenses - capex
    pub net_cash_flow: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub cumulative_net_cash_flow: Money,
    /// Revenue in the final projected month
    pub terminal_revenue: Money,
    pub negative_periods: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub horizon: ForecastHorizon,
    pub periods: Vec<CashFlowPeriod>,
    pub summary: ForecastSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project monthly cash flow over the chosen horizon.
///
/// This is an illustrative fixed-growth model, not a statistical forecast:
/// revenue compounds at 5% per month, operating expenses at 3%, general
/// expenses at 2%, and capital expenditure is held flat. Period `i` applies
/// `i` months of growth to the current run-rate.
pub fn project_cash_flow(input: &CashFlowInput) -> ArthankurResult<ComputationOutput<Forecast>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let periods = (1..=input.horizon.months())
        .map(|i| project_period(input, i))
        .collect::<ArthankurResult<Vec<_>>>()?;

    let cumulative_net_cash_flow = periods
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.net_cash_flow))
        .ok_or_else(|| ArthankurError::overflow("cumulative net cash flow"))?;
    let negative_periods = periods
        .iter()
        .filter(|p| p.net_cash_flow < Decimal::ZERO)
        .count() as u32;
    let terminal_revenue = periods
        .last()
        .map(|p| p.projected_revenue)
        .unwrap_or(input.revenue);

    if cumulative_net_cash_flow < Decimal::ZERO {
        warnings.push(format!(
            "Cumulative net cash flow is negative over {}.",
            input.horizon
        ));
    }

    let forecast = Forecast {
        horizon: input.horizon,
        periods,
        summary: ForecastSummary {
            cumulative_net_cash_flow,
            terminal_revenue,
            negative_periods,
        },
    };

    let assumptions = serde_json::json!({
        "revenue_growth_per_month": REVENUE_GROWTH.to_string(),
        "operating_expense_growth_per_month": OPERATING_EXPENSE_GROWTH.to_string(),
        "expense_growth_per_month": EXPENSE_GROWTH.to_string(),
        "capital_expenditure": "held flat",
        "horizon_months": input.horizon.months(),
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-growth monthly cash flow projection (illustrative)",
        &assumptions,
        warnings,
        elapsed,
        forecast,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &CashFlowInput) -> ArthankurResult<()> {
    let fields = [
        ("revenue", input.revenue),
        ("expenses", input.expenses),
        ("operating_expenses", input.operating_expenses),
        ("capital_expenditure", input.capital_expenditure),
    ];
    for (field, value) in fields {
        if value < Decimal::ZERO {
            return Err(ArthankurError::InvalidInput {
                field: field.into(),
                reason: "Monthly figure cannot be negative.".into(),
            });
        }
    }
    Ok(())
}

fn grow(base: Money, rate: Rate, period_index: u32, context: &str) -> ArthankurResult<Money> {
    base.checked_mul(compound_factor(rate, period_index)?)
        .ok_or_else(|| ArthankurError::overflow(context))
}

fn project_period(input: &CashFlowInput, period_index: u32) -> ArthankurResult<CashFlowPeriod> {
    let projected_revenue = grow(input.revenue, REVENUE_GROWTH, period_index, "projected revenue")?;
    let projected_expenses =
        grow(input.expenses, EXPENSE_GROWTH, period_index, "projected expenses")?;
    let projected_operating_expenses = grow(
        input.operating_expenses,
        OPERATING_EXPENSE_GROWTH,
        period_index,
        "projected operating expenses",
    )?;
    let projected_capital_expenditure = input.capital_expenditure;

    let net_cash_flow = projected_revenue
        .checked_sub(projected_expenses)
        .and_then(|v| v.checked_sub(projected_operating_expenses))
        .and_then(|v| v.checked_sub(projected_capital_expenditure))
        .ok_or_else(|| ArthankurError::overflow("net cash flow"))?;

    Ok(CashFlowPeriod {
        period_index,
        projected_revenue,
        projected_expenses,
        projected_operating_expenses,
        projected_capital_expenditure,
        net_cash_flow,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(horizon: ForecastHorizon) -> CashFlowInput {
        CashFlowInput {
            revenue: dec!(500_000),
            expenses: dec!(200_000),
            operating_expenses: dec!(150_000),
            capital_expenditure: dec!(50_000),
            horizon,
        }
    }

    #[test]
    fn test_length_matches_horizon() {
        for h in [
            ForecastHorizon::Quarter,
            ForecastHorizon::HalfYear,
            ForecastHorizon::Year,
        ] {
            let out = project_cash_flow(&sample_input(h)).unwrap();
            assert_eq!(out.result.periods.len() as u32, h.months());
            assert_eq!(out.result.periods[0].period_index, 1);
        }
    }

    #[test]
    fn test_first_period_growth() {
        let out = project_cash_flow(&sample_input(ForecastHorizon::Quarter)).unwrap();
        let p = &out.result.periods[0];
        assert_eq!(p.projected_revenue, dec!(525_000));
        assert_eq!(p.projected_expenses, dec!(204_000));
        assert_eq!(p.projected_operating_expenses, dec!(154_500));
        assert_eq!(p.projected_capital_expenditure, dec!(50_000));
        // 525,000 - 204,000 - 154,500 - 50,000
        assert_eq!(p.net_cash_flow, dec!(116_500));
    }

    #[test]
    fn test_capex_held_flat() {
        let out = project_cash_flow(&sample_input(ForecastHorizon::Year)).unwrap();
        assert!(out
            .result
            .periods
            .iter()
            .all(|p| p.projected_capital_expenditure == dec!(50_000)));
    }

    #[test]
    fn test_idempotent() {
        let input = sample_input(ForecastHorizon::HalfYear);
        let a = project_cash_flow(&input).unwrap().result;
        let b = project_cash_flow(&input).unwrap().result;
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_cumulative() {
        let out = project_cash_flow(&sample_input(ForecastHorizon::Quarter)).unwrap();
        let f = &out.result;
        let sum: Decimal = f.periods.iter().map(|p| p.net_cash_flow).sum();
        assert_eq!(f.summary.cumulative_net_cash_flow, sum);
        assert_eq!(f.summary.terminal_revenue, f.periods[2].projected_revenue);
        assert_eq!(f.summary.negative_periods, 0);
    }

    #[test]
    fn test_burning_startup_warns() {
        let input = CashFlowInput {
            revenue: dec!(10_000),
            expenses: dec!(80_000),
            operating_expenses: dec!(40_000),
            capital_expenditure: Decimal::ZERO,
            horizon: ForecastHorizon::Quarter,
        };
        let out = project_cash_flow(&input).unwrap();
        assert_eq!(out.result.summary.negative_periods, 3);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_unsupported_horizon_rejected() {
        assert!(ForecastHorizon::try_from(4).is_err());
        let json = r#"{"revenue":"1","expenses":"0","operating_expenses":"0","capital_expenditure":"0","horizon":5}"#;
        assert!(serde_json::from_str::<CashFlowInput>(json).is_err());
    }

    #[test]
    fn test_horizon_serializes_as_months() {
        let json = serde_json::to_string(&ForecastHorizon::HalfYear).unwrap();
        assert_eq!(json, "6");
    }

    #[test]
    fn test_negative_revenue_rejected() {
        let mut input = sample_input(ForecastHorizon::Quarter);
        input.revenue = dec!(-1);
        assert!(project_cash_flow(&input).is_err());
    }

    #[test]
    fn test_revenue_beyond_decimal_range_is_error() {
        let mut input = sample_input(ForecastHorizon::Year);
        input.revenue = Decimal::MAX;
        assert!(matches!(
            project_cash_flow(&input),
            Err(ArthankurError::FinancialImpossibility(_))
        ));
    }
}
