use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ArthankurError;
use crate::ArthankurResult;

/// All monetary values, in rupees. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Percent-denominated inputs say so in their name.
pub type Rate = Decimal;

/// Dimensionless ratios (e.g. 1.4x quick ratio)
pub type Ratio = Decimal;

/// Day counts (DSO, DPO, cash conversion cycle)
pub type Days = Decimal;

/// Balance-sheet and income-statement figures for one company, as entered
/// on the startup dashboard. Fields left out of a JSON document read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    pub current_assets: Money,
    pub current_liabilities: Money,
    pub inventory: Money,
    pub cash: Money,
    pub accounts_receivable: Money,
    pub accounts_payable: Money,
    pub annual_sales: Money,
    pub annual_purchases: Money,
    pub cost_of_goods_sold: Money,
    pub revenue: Money,
    pub expenses: Money,
    pub operating_expenses: Money,
    pub capital_expenditure: Money,
    pub net_income: Money,
    pub total_debt: Money,
    pub total_equity: Money,
    pub operating_cash_flow: Money,
}

impl FinancialSnapshot {
    /// Reject negative balances. Net income and operating cash flow may be
    /// negative (loss-making startups) and are not checked.
    pub fn validate(&self) -> ArthankurResult<()> {
        let fields = [
            ("current_assets", self.current_assets),
            ("current_liabilities", self.current_liabilities),
            ("inventory", self.inventory),
            ("cash", self.cash),
            ("accounts_receivable", self.accounts_receivable),
            ("accounts_payable", self.accounts_payable),
            ("annual_sales", self.annual_sales),
            ("annual_purchases", self.annual_purchases),
            ("cost_of_goods_sold", self.cost_of_goods_sold),
            ("revenue", self.revenue),
            ("expenses", self.expenses),
            ("operating_expenses", self.operating_expenses),
            ("capital_expenditure", self.capital_expenditure),
            ("total_debt", self.total_debt),
            ("total_equity", self.total_equity),
        ];
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(ArthankurError::invalid(field, "Amount cannot be negative."));
            }
        }
        Ok(())
    }
}

/// Divide, substituting zero when the denominator is zero. The substitution
/// is recorded in `warnings` so callers can tell a real zero from a guarded one.
/// A quotient outside the Decimal range is an error.
pub fn guarded_ratio(
    numerator: Decimal,
    denominator: Decimal,
    context: &str,
    warnings: &mut Vec<String>,
) -> ArthankurResult<Decimal> {
    if denominator.is_zero() {
        warnings.push(format!("{context}: denominator is zero; reported as 0."));
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| ArthankurError::overflow(context))
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
