use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-dollar display with thousands separators: `$1,234,568`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        return "$0".to_string();
    }
    let grouped = group_thousands(&rounded.abs().trunc().to_string());
    if rounded.is_sign_negative() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Axis labels arrive as f64 from the chart backend.
pub fn format_currency_f64(value: f64) -> String {
    Decimal::from_f64(value)
        .map(format_currency)
        .unwrap_or_else(|| format!("${:.0}", value))
}

/// Percentage with trailing zeros dropped: `0.75%`, `7%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
