//! CIBIL-style heuristic credit score.
//!
//! Maps five financial ratios onto a bounded synthetic score in [300, 900]
//! by weighted bucket rules. This is a dashboard heuristic loosely modelled
//! on Indian bureau score ranges. It is NOT a credit-bureau computation and
//! carries no regulatory meaning.
//!
//! Score = 600 + sum(weight * 300 * bucket fraction), rounded to the nearest
//! integer and clamped to [300, 900].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{
    guarded_ratio, with_metadata, ComputationOutput, FinancialSnapshot, Money, Ratio,
};
use crate::error::ArthankurError;
use crate::ArthankurResult;

pub const BASE_SCORE: Decimal = dec!(600);
pub const MIN_SCORE: u32 = 300;
pub const MAX_SCORE: u32 = 900;
const POINT_POOL: Decimal = dec!(300);
const PERCENT: Decimal = dec!(100);
/// Stand-in debt to equity for debt with no equity; lands in the worst bucket.
const UNBACKED_DEBT_TO_EQUITY: Ratio = dec!(2);

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// The ratio set the score is computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditScoreInput {
    pub current_ratio: Ratio,
    pub debt_to_equity: Ratio,
    /// Net profit margin, in percent
    pub profit_margin_pct: Decimal,
    /// Return on equity, in percent
    pub return_on_equity_pct: Decimal,
    /// Absolute cash flow in rupees
    pub cash_flow: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditFactor {
    CurrentRatio,
    DebtToEquity,
    ProfitMargin,
    ReturnOnEquity,
    CashFlow,
}

impl CreditFactor {
    /// Share of the 300-point pool this factor controls.
    pub fn weight(self) -> Decimal {
        match self {
            CreditFactor::CurrentRatio => dec!(0.15),
            CreditFactor::DebtToEquity => dec!(0.20),
            CreditFactor::ProfitMargin => dec!(0.25),
            CreditFactor::ReturnOnEquity => dec!(0.15),
            CreditFactor::CashFlow => dec!(0.25),
        }
    }
}

/// Score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
}

impl CreditCategory {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 750 => CreditCategory::Excellent,
            s if s >= 700 => CreditCategory::Good,
            s if s >= 650 => CreditCategory::Fair,
            s if s >= 600 => CreditCategory::Poor,
            _ => CreditCategory::Bad,
        }
    }
}

impl std::fmt::Display for CreditCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditCategory::Excellent => write!(f, "Excellent"),
            CreditCategory::Good => write!(f, "Good"),
            CreditCategory::Fair => write!(f, "Fair"),
            CreditCategory::Poor => write!(f, "Poor"),
            CreditCategory::Bad => write!(f, "Bad"),
        }
    }
}

/// Points earned by one factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: CreditFactor,
    pub value: Decimal,
    pub weight: Decimal,
    /// Fraction of the factor's weight awarded by its bucket
    pub bucket_fraction: Decimal,
    pub points: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditScore {
    /// Integer score in [300, 900]
    pub score: u32,
    pub category: CreditCategory,
    /// Unrounded, unclamped 600 + contributions
    pub raw_score: Decimal,
    pub contributions: Vec<FactorContribution>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score a ratio set. Any finite input produces a score in [300, 900].
pub fn calculate_credit_score(
    input: &CreditScoreInput,
) -> ArthankurResult<ComputationOutput<CreditScore>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let score = score_ratios(input);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Heuristic CIBIL-style score (weighted ratio buckets; not a bureau score)",
        input,
        warnings,
        elapsed,
        score,
    ))
}

/// Derive the ratio set from a snapshot. Zero denominators give a zero ratio
/// and a warning, matching the working capital analyser, except debt to
/// equity: debt carried with no equity behind it is scored as maximum
/// leverage rather than as a zero ratio.
pub fn credit_score_input_from_snapshot(
    s: &FinancialSnapshot,
    warnings: &mut Vec<String>,
) -> ArthankurResult<CreditScoreInput> {
    let debt_to_equity = if s.total_equity.is_zero() && s.total_debt > Decimal::ZERO {
        warnings.push(
            "debt to equity: debt outstanding with zero equity; scored as maximum leverage."
                .into(),
        );
        UNBACKED_DEBT_TO_EQUITY
    } else {
        guarded_ratio(s.total_debt, s.total_equity, "debt to equity", warnings)?
    };
    let net_income_pct = s
        .net_income
        .checked_mul(PERCENT)
        .ok_or_else(|| ArthankurError::overflow("net income percentage"))?;

    Ok(CreditScoreInput {
        current_ratio: guarded_ratio(
            s.current_assets,
            s.current_liabilities,
            "current ratio",
            warnings,
        )?,
        debt_to_equity,
        profit_margin_pct: guarded_ratio(net_income_pct, s.revenue, "profit margin", warnings)?,
        return_on_equity_pct: guarded_ratio(
            net_income_pct,
            s.total_equity,
            "return on equity",
            warnings,
        )?,
        cash_flow: s.operating_cash_flow,
    })
}

/// Derive ratios from a snapshot and score them in one step.
pub fn score_snapshot(
    snapshot: &FinancialSnapshot,
) -> ArthankurResult<ComputationOutput<CreditScore>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    snapshot.validate()?;

    let input = credit_score_input_from_snapshot(snapshot, &mut warnings)?;
    let score = score_ratios(&input);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Heuristic CIBIL-style score from financial snapshot (not a bureau score)",
        &input,
        warnings,
        elapsed,
        score,
    ))
}

// ---------------------------------------------------------------------------
// Bucket rules
// ---------------------------------------------------------------------------

fn current_ratio_bucket(v: Decimal) -> Decimal {
    match v {
        v if v >= dec!(2) => dec!(1.00),
        v if v >= dec!(1.5) => dec!(0.80),
        v if v >= dec!(1) => dec!(0.53),
        _ => dec!(0.27),
    }
}

fn debt_to_equity_bucket(v: Decimal) -> Decimal {
    match v {
        v if v <= dec!(0.5) => dec!(1.00),
        v if v <= dec!(1) => dec!(0.75),
        v if v <= dec!(1.5) => dec!(0.50),
        _ => dec!(0.25),
    }
}

/// Shared by profit margin and return on equity (both in percent).
fn percentage_bucket(v: Decimal) -> Decimal {
    match v {
        v if v >= dec!(20) => dec!(1.00),
        v if v >= dec!(15) => dec!(0.80),
        v if v >= dec!(10) => dec!(0.60),
        v if v >= dec!(5) => dec!(0.40),
        _ => dec!(0.20),
    }
}

fn cash_flow_bucket(v: Decimal) -> Decimal {
    match v {
        v if v >= dec!(2_000_000) => dec!(1.00),
        v if v >= dec!(1_000_000) => dec!(0.80),
        v if v >= dec!(500_000) => dec!(0.60),
        v if v >= dec!(100_000) => dec!(0.40),
        v if v > Decimal::ZERO => dec!(0.20),
        _ => Decimal::ZERO,
    }
}

fn contribution(
    factor: CreditFactor,
    value: Decimal,
    bucket_fraction: Decimal,
) -> FactorContribution {
    let weight = factor.weight();
    FactorContribution {
        factor,
        value,
        weight,
        bucket_fraction,
        points: weight * POINT_POOL * bucket_fraction,
    }
}

fn score_ratios(input: &CreditScoreInput) -> CreditScore {
    let contributions = vec![
        contribution(
            CreditFactor::CurrentRatio,
            input.current_ratio,
            current_ratio_bucket(input.current_ratio),
        ),
        contribution(
            CreditFactor::DebtToEquity,
            input.debt_to_equity,
            debt_to_equity_bucket(input.debt_to_equity),
        ),
        contribution(
            CreditFactor::ProfitMargin,
            input.profit_margin_pct,
            percentage_bucket(input.profit_margin_pct),
        ),
        contribution(
            CreditFactor::ReturnOnEquity,
            input.return_on_equity_pct,
            percentage_bucket(input.return_on_equity_pct),
        ),
        contribution(
            CreditFactor::CashFlow,
            input.cash_flow,
            cash_flow_bucket(input.cash_flow),
        ),
    ];

    let raw_score = BASE_SCORE + contributions.iter().map(|c| c.points).sum::<Decimal>();
    let rounded = raw_score.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let clamped = rounded.clamp(Decimal::from(MIN_SCORE), Decimal::from(MAX_SCORE));
    let score = clamped.to_u32().unwrap_or(MIN_SCORE);

    CreditScore {
        score,
        category: CreditCategory::from_score(score),
        raw_score,
        contributions,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
