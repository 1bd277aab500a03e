//! Customer selection state.
//!
//! ```text
//! Empty ──activate(row)──► Selected(name) ──activate(row)──► Selected(name')
//! ```
//!
//! There is no transition back to `Empty`. The selection stores only the
//! customer name; the chart re-reads that customer's full transaction list
//! from the grouped view, so table filters never shrink the chart.

use crate::domain::{ChartSeries, DailyTotals, GroupedView, chart_series};

/// The currently selected customer, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected yet.
    #[default]
    Empty,
    /// A customer selected by row activation.
    Selected(String),
}

impl Selection {
    /// Selects a customer by name.
    pub fn select(&mut self, customer_name: impl Into<String>) {
        *self = Self::Selected(customer_name.into());
    }

    /// Name of the selected customer.
    #[must_use]
    pub fn customer_name(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Selected(name) => Some(name),
        }
    }

    /// Returns `true` if a customer is selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// Daily totals for the selected customer.
    ///
    /// Empty when nothing is selected or the name has no group.
    #[must_use]
    pub fn daily_totals(&self, grouped: &GroupedView) -> DailyTotals {
        self.customer_name()
            .and_then(|name| grouped.transactions_for(name))
            .map(DailyTotals::from_transactions)
            .unwrap_or_default()
    }

    /// Chart series for the selected customer.
    #[must_use]
    pub fn chart_series(&self, grouped: &GroupedView) -> ChartSeries {
        self.customer_name()
            .and_then(|name| grouped.transactions_for(name))
            .map(chart_series)
            .unwrap_or_default()
    }
}
