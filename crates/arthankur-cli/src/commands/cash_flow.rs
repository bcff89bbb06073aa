use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use arthankur_core::cash_flow::projection::{self, CashFlowInput, ForecastHorizon};

use crate::input;

/// Arguments for the monthly cash flow projection
#[derive(Args)]
pub struct CashFlowArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current monthly revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Current monthly general expenses
    #[arg(long, default_value = "0")]
    pub expenses: Decimal,

    /// Current monthly operating expenses
    #[arg(long, alias = "opex", default_value = "0")]
    pub operating_expenses: Decimal,

    /// Monthly capital expenditure (held flat)
    #[arg(long, alias = "capex", default_value = "0")]
    pub capital_expenditure: Decimal,

    /// Projection horizon in months: 3, 6 or 12
    #[arg(long, default_value_t = 12)]
    pub horizon: u32,
}

pub fn run_cash_flow(args: CashFlowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cf_input: CashFlowInput = match input::load(args.input.as_deref())? {
        Some(doc) => doc,
        None => CashFlowInput {
            revenue: args
                .revenue
                .ok_or("--revenue is required (or provide --input)")?,
            expenses: args.expenses,
            operating_expenses: args.operating_expenses,
            capital_expenditure: args.capital_expenditure,
            horizon: ForecastHorizon::try_from(args.horizon)?,
        },
    };
    let result = projection::project_cash_flow(&cf_input)?;
    Ok(serde_json::to_value(result)?)
}
