//! Filter input state for the customer table.
//!
//! Two independent inputs drive the table:
//!
//! - the name filter, matched case-insensitively as a substring of the
//!   customer name
//! - the amount filter, matched as a raw substring of each transaction's
//!   amount label (`150` matches `"50"`)
//!
//! An empty input leaves its column unfiltered.

use crate::domain::Transaction;

/// Characters besides digits that can appear in an amount label.
const NUMERIC_CHARS: &[char] = &['.', '-', '+', 'e'];

// ============================================================================
// Filter Field
// ============================================================================

/// Identifies one of the two filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Text input filtering the name column.
    Name,
    /// Numeric input filtering the transactions column.
    Amount,
}

impl FilterField {
    /// Placeholder shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Filter by name",
            Self::Amount => "Filter by amount",
        }
    }

    /// Returns `true` if the input accepts this character.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Name => !c.is_control(),
            Self::Amount => c.is_ascii_digit() || NUMERIC_CHARS.contains(&c),
        }
    }
}

// ============================================================================
// Filter State
// ============================================================================

/// Current values of both filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Name filter as typed.
    pub name: String,
    /// Amount filter as typed.
    pub amount: String,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of one input.
    #[must_use]
    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Amount => &self.amount,
        }
    }

    /// Appends a character to an input.
    ///
    /// Returns `true` if the character was accepted.
    pub fn push(&mut self, field: FilterField, c: char) -> bool {
        if !field.accepts(c) {
            return false;
        }
        self.value_mut(field).push(c);
        true
    }

    /// Removes the last character of an input.
    pub fn backspace(&mut self, field: FilterField) {
        self.value_mut(field).pop();
    }

    /// Clears one input.
    pub fn clear(&mut self, field: FilterField) {
        self.value_mut(field).clear();
    }

    /// Replaces the value of one input, dropping characters it rejects.
    pub fn set(&mut self, field: FilterField, value: &str) {
        let filtered: String = value.chars().filter(|&c| field.accepts(c)).collect();
        *self.value_mut(field) = filtered;
    }

    /// Returns `true` if both inputs are empty.
    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.amount.is_empty()
    }

    /// Returns `true` if the customer name passes the name filter.
    #[must_use]
    pub fn name_matches(&self, customer_name: &str) -> bool {
        self.name.is_empty()
            || customer_name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
    }

    /// Returns `true` if the transaction passes the amount filter.
    #[must_use]
    pub fn amount_matches(&self, transaction: &Transaction) -> bool {
        self.amount.is_empty() || transaction.amount_label().contains(&self.amount)
    }

    fn value_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Name => &mut self.name,
            FilterField::Amount => &mut self.amount,
        }
    }
}
