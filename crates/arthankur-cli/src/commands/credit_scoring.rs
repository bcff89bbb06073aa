use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use arthankur_core::credit_scoring::heuristic::{self, CreditScoreInput};
use arthankur_core::FinancialSnapshot;

use crate::input;

/// Arguments for the heuristic credit score
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CreditScoreArgs {
    /// Path to JSON input file (ratio set, or a snapshot with --from-snapshot)
    #[arg(long)]
    pub input: Option<String>,

    /// Treat the input document as a financial snapshot and derive the ratios
    #[arg(long)]
    pub from_snapshot: bool,

    /// Current ratio
    #[arg(long, default_value = "0")]
    pub current_ratio: Decimal,

    /// Debt to equity
    #[arg(long, alias = "de", default_value = "0")]
    pub debt_to_equity: Decimal,

    /// Net profit margin in percent
    #[arg(long, alias = "profit-margin", default_value = "0")]
    pub profit_margin_pct: Decimal,

    /// Return on equity in percent
    #[arg(long, alias = "roe", default_value = "0")]
    pub return_on_equity_pct: Decimal,

    /// Cash flow in rupees
    #[arg(long, default_value = "0")]
    pub cash_flow: Decimal,
}

pub fn run_credit_score(args: CreditScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.from_snapshot {
        let snapshot: FinancialSnapshot = input::load(args.input.as_deref())?
            .ok_or("--input <snapshot.json> or stdin required with --from-snapshot")?;
        let result = heuristic::score_snapshot(&snapshot)?;
        return Ok(serde_json::to_value(result)?);
    }

    let score_input: CreditScoreInput = match input::load(args.input.as_deref())? {
        Some(doc) => doc,
        None => CreditScoreInput {
            current_ratio: args.current_ratio,
            debt_to_equity: args.debt_to_equity,
            profit_margin_pct: args.profit_margin_pct,
            return_on_equity_pct: args.return_on_equity_pct,
            cash_flow: args.cash_flow,
        },
    };
    let result = heuristic::calculate_credit_score(&score_input)?;
    Ok(serde_json::to_value(result)?)
}
