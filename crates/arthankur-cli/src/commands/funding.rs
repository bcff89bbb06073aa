use clap::Args;
use serde_json::Value;

use arthankur_core::funding::request::FundingRequest;
use arthankur_core::funding::stats;

use crate::input;

/// Arguments for funding request summary statistics
#[derive(Args)]
pub struct FundingStatsArgs {
    /// Path to a JSON array of funding requests
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_funding_stats(args: FundingStatsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let requests: Vec<FundingRequest> = input::load(args.input.as_deref())?
        .ok_or("--input <requests.json> or stdin required for funding stats")?;
    let result = stats::aggregate_funding_stats(&requests)?;
    Ok(serde_json::to_value(result)?)
}
