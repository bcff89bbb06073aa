//! Display formatting for rupee amounts.
//!
//! Amounts are shown the way `Intl.NumberFormat("en-IN", { style: "currency",
//! currency: "INR", maximumFractionDigits: 0 })` renders them: a `₹` prefix,
//! no fractional digits, and Indian digit grouping (the last three digits,
//! then groups of two: `₹12,34,567`).

use rust_decimal::RoundingStrategy;

use crate::types::Money;

pub const RUPEE_SYMBOL: &str = "₹";

/// Format an amount as whole rupees with en-IN grouping.
pub fn format_inr(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let grouped = group_indian(&digits);
    if negative {
        format!("-{RUPEE_SYMBOL}{grouped}")
    } else {
        format!("{RUPEE_SYMBOL}{grouped}")
    }
}

/// Insert en-IN separators into a string of ASCII digits.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
