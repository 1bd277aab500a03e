//! Transaction types and display helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CustomerId;

/// Calendar date format used by the dataset (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single transaction from the dataset.
///
/// The date stays as the raw dataset string: grouping by day compares these
/// strings exactly, and parsing only happens when the chart needs an axis
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Foreign key into `Customer.id`.
    pub customer_id: CustomerId,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Transaction amount.
    pub amount: f64,
}

impl Transaction {
    /// Creates a new transaction.
    #[must_use]
    pub fn new(customer_id: impl Into<CustomerId>, date: impl Into<String>, amount: f64) -> Self {
        Self {
            customer_id: customer_id.into(),
            date: date.into(),
            amount,
        }
    }

    /// The amount in its shortest display form (`50`, `12.5`).
    ///
    /// This is the string the amount filter matches against.
    #[must_use]
    pub fn amount_label(&self) -> String {
        format_amount(self.amount)
    }

    /// Parses the date, or `None` when it is not a valid `YYYY-MM-DD` date.
    #[cfg(test)]
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Formats the transaction as a table line: `Date: D, Amount: $A`.
    #[must_use]
    pub fn display_line(&self, currency: &str) -> String {
        format!(
            "Date: {}, Amount: {}{}",
            self.date,
            currency,
            self.amount_label()
        )
    }
}

/// Formats an amount the way a number prints without a fixed precision.
///
/// Whole numbers drop the fractional part and negative zero prints as `0`.
/// Magnitudes from `1e21` up and below `1e-6` use exponent notation with a
/// signed exponent (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    let magnitude = amount.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let exponent = format!("{amount:e}");
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exponent,
        };
    }
    format!("{amount}")
}

/// Smallest magnitude printed with an exponent.
const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitudes below this are printed with an exponent.
const EXPONENT_BELOW: f64 = 1e-6;

/// Parses a `YYYY-MM-DD` date string.
#[must_use]
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}
