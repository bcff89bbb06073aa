use rust_decimal::Decimal;

use crate::error::ArthankurError;
use crate::types::{Money, Rate};
use crate::ArthankurResult;

/// (1 + rate)^periods by repeated multiplication, so integer horizons stay
/// exact in Decimal arithmetic. Overflow is reported instead of panicking.
pub fn compound_factor(rate: Rate, periods: u32) -> ArthankurResult<Decimal> {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for period in 0..periods {
        factor = factor.checked_mul(base).ok_or_else(|| {
            ArthankurError::FinancialImpossibility(format!(
                "compound factor overflowed at period {} of {periods}",
                period + 1
            ))
        })?;
    }
    Ok(factor)
}

/// Level payment that retires `principal` over `nper` periods at `rate` per
/// period. Returned as a positive amount for a positive principal.
pub fn annuity_payment(rate: Rate, nper: u32, principal: Money) -> ArthankurResult<Money> {
    if nper == 0 {
        return Err(ArthankurError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(ArthankurError::DivisionByZero {
            context: "annuity payment factor".into(),
        });
    }

    let numerator = principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .ok_or_else(|| {
            ArthankurError::FinancialImpossibility("annuity payment overflowed".into())
        })?;

    numerator
        .checked_div(denominator)
        .ok_or_else(|| ArthankurError::overflow("annuity payment"))
}
