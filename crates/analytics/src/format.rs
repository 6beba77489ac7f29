use rust_decimal::{Decimal, RoundingStrategy};

/// The rupee marker used by `format_inr`.
pub const INR_SYMBOL: &str = "₹";

/// Formats a rupee amount with Indian digit grouping, e.g. `₹ 12,34,567`.
pub fn format_inr(amount: Decimal) -> String {
    format_currency(amount, INR_SYMBOL)
}

/// Like `format_inr`, for amounts that may be missing.
pub fn format_inr_opt(amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format_inr(amount),
        None => format!("{INR_SYMBOL}0"),
    }
}

/// Formats `amount` in whole currency units with Indian digit grouping.
///
/// Zero renders as the bare marker followed by `0`. Negative amounts put the
/// sign before the marker: `-₹ 500`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    if amount.is_zero() {
        return format!("{symbol}0");
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let whole = amount
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    format!("{sign}{symbol} {}", group_indian(&whole.to_string()))
}

/// Groups a count the way the `en-IN` locale does, e.g. `12,34,567`.
pub fn format_indian_number(n: u64) -> String {
    group_indian(&n.to_string())
}

/// A KPI delta caption such as `▲ 12.3% vs prior`.
pub fn delta_label(pct: Decimal) -> String {
    let arrow = if pct.is_sign_negative() && !pct.is_zero() { "▼" } else { "▲" };
    let magnitude = pct
        .abs()
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{arrow} {magnitude:.1}% vs prior")
}

/// Last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
