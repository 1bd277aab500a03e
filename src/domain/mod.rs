//! Domain types for LedgerLens.
//!
//! This module contains the dataset records and the pure derivations built
//! on top of them.
//!
//! # Module Organization
//!
//! - [`error`] - Dataset loading errors
//! - [`customer`] - Customer records and identifiers
//! - [`transaction`] - Transaction records and amount formatting
//! - [`dataset`] - The input document and its loaders
//! - [`grouping`] - Transactions grouped by customer name
//! - [`totals`] - Daily totals and chart series

// ============================================================================
// Module Declarations
// ============================================================================

pub mod customer;
pub mod dataset;
pub mod error;
pub mod grouping;
pub mod totals;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use customer::{Customer, CustomerId};
pub use dataset::Dataset;
pub use error::DatasetError;
pub use grouping::{GroupedView, group_by_customer};
pub use totals::{ChartSeries, DailyTotals, DaySlot, chart_series};
pub use transaction::{Transaction, format_amount};
