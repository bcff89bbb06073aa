use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ArthankurError;
use crate::types::{
    guarded_ratio, with_metadata, ComputationOutput, Days, FinancialSnapshot, Money, Ratio,
};
use crate::ArthankurResult;

const DAYS_PER_YEAR: Decimal = dec!(365);

const CURRENT_RATIO_TARGET: Ratio = dec!(2);
const QUICK_RATIO_TARGET: Ratio = dec!(1);
const DAYS_RECEIVABLE_CEILING: Days = dec!(45);
const DAYS_PAYABLE_FLOOR: Days = dec!(30);
const CASH_CYCLE_CEILING: Days = dec!(90);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Liquidity and cycle metrics derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalMetrics {
    /// Current assets - current liabilities
    pub working_capital: Money,
    /// Current assets / current liabilities
    pub current_ratio: Ratio,
    /// (Current assets - inventory) / current liabilities
    pub quick_ratio: Ratio,
    /// Cash / current liabilities
    pub cash_ratio: Ratio,
    /// AR / annual sales * 365
    pub days_receivable: Days,
    /// AP / annual purchases * 365
    pub days_payable: Days,
    /// 365 / (COGS / inventory)
    pub days_inventory_outstanding: Days,
    /// DIO + days receivable - days payable
    pub cash_conversion_cycle: Days,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingCapitalFlagKind {
    LowCurrentRatio,
    LowQuickRatio,
    SlowReceivables,
    FastPayables,
    LongCashCycle,
}

impl WorkingCapitalFlagKind {
    /// Default English advisory shown by the dashboard.
    pub fn advisory(self) -> &'static str {
        match self {
            WorkingCapitalFlagKind::LowCurrentRatio => {
                "Current ratio is below 2. Consider improving short-term liquidity \
                 by reducing current liabilities or building current assets."
            }
            WorkingCapitalFlagKind::LowQuickRatio => {
                "Quick ratio is below 1. Liquid assets do not cover current \
                 liabilities; reduce reliance on inventory to meet obligations."
            }
            WorkingCapitalFlagKind::SlowReceivables => {
                "Receivables take more than 45 days to collect. Tighten credit \
                 terms or offer early-payment discounts."
            }
            WorkingCapitalFlagKind::FastPayables => {
                "Suppliers are paid in under 30 days. Negotiate longer payment \
                 terms to retain cash."
            }
            WorkingCapitalFlagKind::LongCashCycle => {
                "Cash conversion cycle exceeds 90 days. Review inventory, \
                 receivables and payables together to shorten it."
            }
        }
    }
}

impl std::fmt::Display for WorkingCapitalFlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkingCapitalFlagKind::LowCurrentRatio => write!(f, "Low current ratio"),
            WorkingCapitalFlagKind::LowQuickRatio => write!(f, "Low quick ratio"),
            WorkingCapitalFlagKind::SlowReceivables => write!(f, "Slow receivables"),
            WorkingCapitalFlagKind::FastPayables => write!(f, "Fast payables"),
            WorkingCapitalFlagKind::LongCashCycle => write!(f, "Long cash cycle"),
        }
    }
}

/// A metric that crossed its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalFlag {
    pub kind: WorkingCapitalFlagKind,
    pub observed: Decimal,
    pub threshold: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalOutput {
    pub metrics: WorkingCapitalMetrics,
    pub flags: Vec<WorkingCapitalFlag>,
    /// Advisory text for each flag, in flag order
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive liquidity ratios and the cash conversion cycle from a snapshot
/// and flag the metrics that miss their targets. A zero denominator yields
/// zero for that metric rather than an error.
pub fn analyze_working_capital(
    snapshot: &FinancialSnapshot,
) -> ArthankurResult<ComputationOutput<WorkingCapitalOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    snapshot.validate()?;

    let metrics = compute_metrics(snapshot, &mut warnings)?;
    let flags = evaluate_flags(&metrics);
    let recommendations = flags
        .iter()
        .map(|f| f.kind.advisory().to_string())
        .collect();

    let output = WorkingCapitalOutput {
        metrics,
        flags,
        recommendations,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Working capital liquidity and cash conversion cycle",
        snapshot,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn compute_metrics(
    s: &FinancialSnapshot,
    warnings: &mut Vec<String>,
) -> ArthankurResult<WorkingCapitalMetrics> {
    let working_capital = s.current_assets - s.current_liabilities;

    let current_ratio = guarded_ratio(
        s.current_assets,
        s.current_liabilities,
        "current ratio",
        warnings,
    )?;
    let quick_ratio = guarded_ratio(
        s.current_assets - s.inventory,
        s.current_liabilities,
        "quick ratio",
        warnings,
    )?;
    let cash_ratio = guarded_ratio(s.cash, s.current_liabilities, "cash ratio", warnings)?;

    // DIO = 365 / inventory turnover
    let inventory_turnover = guarded_ratio(
        s.cost_of_goods_sold,
        s.inventory,
        "inventory turnover",
        warnings,
    )?;
    let days_inventory_outstanding = guarded_ratio(
        DAYS_PER_YEAR,
        inventory_turnover,
        "days inventory outstanding",
        warnings,
    )?;

    // Scale before dividing so whole-day answers stay exact in Decimal.
    let days_receivable = guarded_ratio(
        scale_to_days(s.accounts_receivable, "days receivable")?,
        s.annual_sales,
        "days receivable",
        warnings,
    )?;
    let days_payable = guarded_ratio(
        scale_to_days(s.accounts_payable, "days payable")?,
        s.annual_purchases,
        "days payable",
        warnings,
    )?;

    let cash_conversion_cycle = days_inventory_outstanding
        .checked_add(days_receivable)
        .and_then(|v| v.checked_sub(days_payable))
        .ok_or_else(|| ArthankurError::overflow("cash conversion cycle"))?;

    Ok(WorkingCapitalMetrics {
        working_capital,
        current_ratio,
        quick_ratio,
        cash_ratio,
        days_receivable,
        days_payable,
        days_inventory_outstanding,
        cash_conversion_cycle,
    })
}

fn scale_to_days(balance: Money, context: &str) -> ArthankurResult<Decimal> {
    balance
        .checked_mul(DAYS_PER_YEAR)
        .ok_or_else(|| ArthankurError::overflow(context))
}

fn evaluate_flags(m: &WorkingCapitalMetrics) -> Vec<WorkingCapitalFlag> {
    let checks = [
        (
            WorkingCapitalFlagKind::LowCurrentRatio,
            m.current_ratio,
            CURRENT_RATIO_TARGET,
            m.current_ratio < CURRENT_RATIO_TARGET,
        ),
        (
            WorkingCapitalFlagKind::LowQuickRatio,
            m.quick_ratio,
            QUICK_RATIO_TARGET,
            m.quick_ratio < QUICK_RATIO_TARGET,
        ),
        (
            WorkingCapitalFlagKind::SlowReceivables,
            m.days_receivable,
            DAYS_RECEIVABLE_CEILING,
            m.days_receivable > DAYS_RECEIVABLE_CEILING,
        ),
        (
            WorkingCapitalFlagKind::FastPayables,
            m.days_payable,
            DAYS_PAYABLE_FLOOR,
            m.days_payable < DAYS_PAYABLE_FLOOR,
        ),
        (
            WorkingCapitalFlagKind::LongCashCycle,
            m.cash_conversion_cycle,
            CASH_CYCLE_CEILING,
            m.cash_conversion_cycle > CASH_CYCLE_CEILING,
        ),
    ];

    checks
        .into_iter()
        .filter(|(_, _, _, tripped)| *tripped)
        .map(|(kind, observed, threshold, _)| WorkingCapitalFlag {
            kind,
            observed,
            threshold,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
