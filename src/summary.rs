//! Plain-text summaries for the `summary` subcommand.

use std::fmt::Write as _;

use crate::domain::{DailyTotals, GroupedView, format_amount};

/// One line per grouped customer: name, transaction count and total amount.
///
/// Lines follow grouping order. Names are padded to the longest name.
#[must_use]
pub fn render_summary(grouped: &GroupedView, currency: &str) -> String {
    let width = grouped
        .groups()
        .iter()
        .map(|group| group.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for group in grouped.groups() {
        let total: f64 = group.transactions.iter().map(|txn| txn.amount).sum();
        let count = group.transactions.len();
        let noun = if count == 1 { "transaction" } else { "transactions" };
        let _ = writeln!(
            out,
            "{:<width$}  {count:>3} {noun:<12}  {currency}{}",
            group.name,
            format_amount(total),
        );
    }
    out
}

/// Daily totals of one customer, one `date  amount` line per day.
#[must_use]
pub fn render_customer_totals(name: &str, totals: &DailyTotals, currency: &str) -> String {
    let mut out = format!("{name}\n");
    for (date, total) in totals.entries() {
        let _ = writeln!(out, "  {date}  {currency}{}", format_amount(*total));
    }
    out
}
