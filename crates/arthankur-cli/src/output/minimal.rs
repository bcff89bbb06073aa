use arthankur_core::format::format_inr;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use super::{format_scalar, result_of};

/// Headline figure per command, in priority order. The first key present
/// (and non-null) in the result is printed on its own.
const PRIORITY_KEYS: &[&str] = &[
    "monthly_payment",
    "score",
    "cumulative_net_cash_flow",
    "current_ratio",
    "total_funding_amount",
    "formatted",
];

/// Keys holding rupee amounts, printed with Indian grouping.
const CURRENCY_KEYS: &[&str] = &[
    "monthly_payment",
    "cumulative_net_cash_flow",
    "total_funding_amount",
];

/// Print just the headline answer.
pub fn print_minimal(value: &Value) {
    let result = result_of(value);

    if let Value::Object(map) = result {
        // Forecast and working capital nest their headline one level down
        let nested = ["summary", "metrics"]
            .iter()
            .filter_map(|k| map.get(*k).and_then(Value::as_object));

        for scope in std::iter::once(map).chain(nested) {
            for key in PRIORITY_KEYS {
                if let Some(val) = scope.get(*key).filter(|v| !v.is_null()) {
                    println!("{}", render(key, val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result));
}

fn render(key: &str, value: &Value) -> String {
    if CURRENCY_KEYS.contains(&key) {
        if let Some(amount) = as_decimal(value) {
            return format_inr(amount);
        }
    }
    format_scalar(value)
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}
