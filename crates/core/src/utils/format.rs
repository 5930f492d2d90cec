//! Display formatting for profit figures.
//!
//! Renderers show daily profit as an explicitly signed two-decimal
//! amount, rates as signed percentages, and large asset totals as
//! rounded amounts with thousands separators.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Format an amount with an explicit sign: `+50.00`, `-3.20`, `+0.00`.
///
/// Zero takes the positive sign, matching how the tracker has always
/// rendered a flat day.
pub fn format_signed_amount(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    if rounded.is_sign_negative() {
        format!("{:.2}", rounded)
    } else {
        format!("+{:.2}", rounded)
    }
}

/// Format a rate as a signed percentage: `+5.00%`.
pub fn format_signed_percent(value: Decimal) -> String {
    format!("{}%", format_signed_amount(value))
}

/// Format an unavailable rate.
pub fn format_unavailable() -> String {
    "--".to_string()
}

/// Format a large amount rounded to whole units with thousands
/// separators: `12,345`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().to_string();

    let mut grouped = String::with_capacity(text.len() + text.len() / 3);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && (text.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
