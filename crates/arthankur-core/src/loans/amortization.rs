use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ArthankurError;
use crate::time_value::annuity_payment;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::ArthankurResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Terms of a fixed-rate installment loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: Money,
    /// Nominal annual rate in percent (12 = 12% p.a.)
    pub annual_rate_percent: Decimal,
    /// Number of monthly installments
    pub term_months: u32,
}

/// EMI and lifetime totals for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Equated monthly installment
    pub monthly_payment: Money,
    /// Total interest = total_payment - principal
    pub total_interest: Money,
    /// Total payment = monthly_payment * term_months
    pub total_payment: Money,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub opening_balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

/// Month-by-month repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: Money,
    pub rows: Vec<ScheduleRow>,
    pub total_interest: Money,
    pub total_payment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Calculate the EMI, total interest and total payment for a fixed-rate
/// loan using the standard annuity formula. A zero rate degenerates to
/// `principal / term_months`.
pub fn calculate_emi(
    terms: &LoanTerms,
) -> ArthankurResult<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;

    if terms.annual_rate_percent.is_zero() {
        warnings.push("Interest rate is zero; EMI is principal divided by term.".into());
    }

    let result = compute_emi(terms)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate EMI (reducing balance annuity)",
        terms,
        warnings,
        elapsed,
        result,
    ))
}

/// Build the full repayment schedule. Interest accrues monthly on the
/// opening balance; the final installment clears whatever balance remains,
/// so the schedule always closes at exactly zero.
pub fn build_amortization_schedule(
    terms: &LoanTerms,
) -> ArthankurResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;

    let emi = compute_emi(terms)?;
    let rate = monthly_rate(terms.annual_rate_percent);

    let mut rows = Vec::with_capacity(terms.term_months as usize);
    let mut balance = terms.principal;
    let mut total_interest = Decimal::ZERO;
    let mut total_payment = Decimal::ZERO;

    for month in 1..=terms.term_months {
        let opening_balance = balance;
        let interest = opening_balance
            .checked_mul(rate)
            .ok_or_else(|| ArthankurError::overflow("monthly interest"))?;
        let (payment, principal, closing_balance) = if month == terms.term_months {
            let final_payment = opening_balance
                .checked_add(interest)
                .ok_or_else(|| ArthankurError::overflow("final installment"))?;
            (final_payment, opening_balance, Decimal::ZERO)
        } else {
            let principal = emi.monthly_payment - interest;
            (emi.monthly_payment, principal, opening_balance - principal)
        };

        total_interest = total_interest
            .checked_add(interest)
            .ok_or_else(|| ArthankurError::overflow("schedule interest total"))?;
        total_payment = total_payment
            .checked_add(payment)
            .ok_or_else(|| ArthankurError::overflow("schedule payment total"))?;
        balance = closing_balance;

        rows.push(ScheduleRow {
            month,
            opening_balance,
            payment,
            interest,
            principal,
            closing_balance,
        });
    }

    let residue = (total_payment - emi.total_payment).abs();
    if residue > dec!(0.01) {
        warnings.push(format!(
            "Final installment differs from EMI by {residue}; totals adjusted to close the balance."
        ));
    }

    let schedule = AmortizationSchedule {
        monthly_payment: emi.monthly_payment,
        rows,
        total_interest,
        total_payment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Reducing-balance amortization schedule",
        terms,
        warnings,
        elapsed,
        schedule,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_terms(terms: &LoanTerms) -> ArthankurResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(ArthankurError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be positive.".into(),
        });
    }
    if terms.annual_rate_percent < Decimal::ZERO {
        return Err(ArthankurError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    if terms.term_months == 0 {
        return Err(ArthankurError::InvalidInput {
            field: "term_months".into(),
            reason: "Loan term must be at least one month.".into(),
        });
    }
    Ok(())
}

fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / MONTHS_PER_YEAR / PERCENT
}

fn compute_emi(terms: &LoanTerms) -> ArthankurResult<AmortizationResult> {
    let rate = monthly_rate(terms.annual_rate_percent);
    let monthly_payment = annuity_payment(rate, terms.term_months, terms.principal)?;
    let total_payment = monthly_payment
        .checked_mul(Decimal::from(terms.term_months))
        .ok_or_else(|| ArthankurError::overflow("total loan payment"))?;
    let total_interest = total_payment - terms.principal;

    Ok(AmortizationResult {
        monthly_payment,
        total_interest,
        total_payment,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
