use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use arthankur_core::format::format_inr;

/// Arguments for rupee formatting
#[derive(Args)]
pub struct FormatInrArgs {
    /// Amount in rupees
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,
}

#[derive(Serialize)]
struct FormattedAmount {
    amount: Decimal,
    formatted: String,
}

pub fn run_format_inr(args: FormatInrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let out = FormattedAmount {
        amount: args.amount,
        formatted: format_inr(args.amount),
    };
    Ok(serde_json::to_value(out)?)
}
