// src/utils.rs
// Display helpers shared by the mainbot records.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed-point text with `places` decimals (half-even) and comma-grouped thousands.
pub fn format_grouped(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(places);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// `$1,234.56`. Negative values keep their sign after the dollar: `$-5.00`.
pub fn format_usd(value: Decimal) -> String {
    format!("${}", format_grouped(value, 2))
}

/// Percentage with one decimal, e.g. `12.5%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(1);
    format!("{}%", rounded)
}

/// Whole days between `created` and `now`, rounded toward the past.
/// Records without a timestamp count as 0 days old.
pub fn days_since(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match created {
        Some(created) => (now - created).num_seconds().div_euclid(SECONDS_PER_DAY),
        None => 0,
    }
}

/// Joins the non-empty name parts with a space.
pub fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truthiness of a JSON value: null, false, 0, "" and empty containers are false.
pub fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
