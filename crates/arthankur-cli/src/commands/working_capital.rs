use clap::Args;
use serde_json::Value;

use arthankur_core::working_capital::analysis;
use arthankur_core::FinancialSnapshot;

use crate::input;

/// Arguments for working capital analysis
#[derive(Args)]
pub struct WorkingCapitalArgs {
    /// Path to a JSON financial snapshot
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_working_capital(args: WorkingCapitalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: FinancialSnapshot = input::load(args.input.as_deref())?
        .ok_or("--input <snapshot.json> or stdin required for working capital analysis")?;
    let result = analysis::analyze_working_capital(&snapshot)?;
    Ok(serde_json::to_value(result)?)
}
