//! Dataset document loading.
//!
//! The dataset is a single JSON document with two collections:
//!
//! ```json
//! {
//!   "customers":    [{ "id": 1, "name": "Alice" }],
//!   "transactions": [{ "customer_id": 1, "date": "2024-01-01", "amount": 10 }]
//! }
//! ```
//!
//! It is validated into typed records once, at load time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Customer, DatasetError, Transaction};

/// Sample document bundled with the binary.
const BUNDLED_SAMPLE: &str = include_str!("../../data/sample.json");

/// Origin label used in errors and logs for the bundled sample.
pub const BUNDLED_ORIGIN: &str = "bundled sample";

/// The full input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// All customers, in document order.
    pub customers: Vec<Customer>,
    /// All transactions, in document order.
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    /// Creates a dataset from already-typed records.
    #[cfg(test)]
    #[must_use]
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Self {
            customers,
            transactions,
        }
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] if the document is malformed.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, DatasetError> {
        serde_json::from_str(json).map_err(|e| DatasetError::parse(origin, e))
    }

    /// Reads and parses a dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read and
    /// [`DatasetError::Parse`] if its content is malformed.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        let dataset = Self::from_json(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            customers = dataset.customers.len(),
            transactions = dataset.transactions.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Returns the sample dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] if the bundled document is malformed.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_SAMPLE, BUNDLED_ORIGIN)
    }

    /// Loads `path` when given, otherwise the bundled sample.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Dataset::load`] and [`Dataset::bundled`].
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No dataset path given, using {BUNDLED_ORIGIN}");
                Self::bundled()
            }
        }
    }
}
