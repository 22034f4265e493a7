//! Label formatting shared by the chart builders.

use rust_decimal::Decimal;

/// Formats a number without a trailing `.0` and with at most two decimals.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Whole-number count with thousands separators, e.g. `1,234`.
#[must_use]
pub fn format_count(value: f64) -> String {
    let rounded = format!("{:.0}", value.round());
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&rounded),
    }
}

/// Dollar amount with thousands separators; cents only when non-zero.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let rounded = rounded.abs();
    let whole = group_thousands(&rounded.trunc().normalize().to_string());
    let fraction = rounded.fract();
    if fraction.is_zero() {
        return format!("{sign}${whole}");
    }
    let cents = (fraction * Decimal::ONE_HUNDRED)
        .trunc()
        .normalize()
        .to_string();
    format!("{sign}${whole}.{cents:0>2}")
}

/// Shortens `label` to `max_chars` characters, ending with an ellipsis.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
