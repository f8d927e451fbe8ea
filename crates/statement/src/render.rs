//! Plain-text statement rendering.
//!
//! Formatting is a presentation concern: amounts stay in minor currency
//! units in the `Statement` and are divided into dollars only here. The
//! format is fixed US-style grouping; locale selection is out of scope.

use std::fmt::Write;

use crate::statement::Statement;

/// Render the line-oriented text bill for a statement.
pub fn plain_text(statement: &Statement) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Statement for {}", statement.customer);

    for line in &statement.lines {
        let _ = writeln!(
            out,
            "  {}: {} ({} seats)",
            line.play_name,
            format_usd(line.amount),
            line.audience
        );
    }

    let _ = writeln!(out, "Amount owed is {}", format_usd(statement.total_amount));
    let _ = writeln!(out, "You earned {} credits", statement.total_credits);
    out
}

/// Format an amount in minor units as US dollars, e.g. 173_000 -> "$1,730.00".
fn format_usd(minor_units: u64) -> String {
    let dollars = (minor_units / 100).to_string();
    let cents = minor_units % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.{cents:02}")
}
