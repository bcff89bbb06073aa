use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use arthankur_core::loans::amortization::{self, LoanTerms};

use crate::input;

/// Arguments shared by the EMI and schedule commands
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 12 for 12% p.a.)
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Loan term in months
    #[arg(long, alias = "months")]
    pub term_months: Option<u32>,
}

fn loan_terms(args: LoanArgs) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    if let Some(terms) = input::load(args.input.as_deref())? {
        return Ok(terms);
    }
    Ok(LoanTerms {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_percent: args
            .annual_rate_percent
            .ok_or("--annual-rate-percent is required (or provide --input)")?,
        term_months: args
            .term_months
            .ok_or("--term-months is required (or provide --input)")?,
    })
}

pub fn run_emi(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = loan_terms(args)?;
    let result = amortization::calculate_emi(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = loan_terms(args)?;
    let result = amortization::build_amortization_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}
