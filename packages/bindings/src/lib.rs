use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;

use arthankur_core::ArthankurResult;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse a JSON document, run one engine operation and serialise its output.
fn run_json<I, O>(input_json: &str, op: impl FnOnce(&I) -> ArthankurResult<O>) -> NapiResult<String>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input: I = serde_json::from_str(input_json).map_err(to_napi_error)?;
    let output = op(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    run_json(&input_json, arthankur_core::loans::amortization::calculate_emi)
}

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        arthankur_core::loans::amortization::build_amortization_schedule,
    )
}

// ---------------------------------------------------------------------------
// Cash flow
// ---------------------------------------------------------------------------

#[napi]
pub fn project_cash_flow(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        arthankur_core::cash_flow::projection::project_cash_flow,
    )
}

// ---------------------------------------------------------------------------
// Working capital
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_working_capital(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        arthankur_core::working_capital::analysis::analyze_working_capital,
    )
}

// ---------------------------------------------------------------------------
// Credit scoring
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_credit_score(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        arthankur_core::credit_scoring::heuristic::calculate_credit_score,
    )
}

#[napi]
pub fn score_snapshot(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        arthankur_core::credit_scoring::heuristic::score_snapshot,
    )
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

#[napi]
pub fn aggregate_funding_stats(input_json: String) -> NapiResult<String> {
    let requests: Vec<arthankur_core::funding::request::FundingRequest> =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = arthankur_core::funding::stats::aggregate_funding_stats(&requests)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Takes the amount as a decimal string so large values keep full precision.
#[napi]
pub fn format_inr(amount: String) -> NapiResult<String> {
    let value = Decimal::from_str(amount.trim()).map_err(to_napi_error)?;
    Ok(arthankur_core::format::format_inr(value))
}
