//! Customer types.
//!
//! Customers come straight from the dataset and are never mutated. Their
//! identifier may be a JSON number or a JSON string; the two kinds never
//! compare equal, so `1` does not resolve a `"1"` foreign key.
//!
//! Any other JSON value (`null`, booleans, fractional numbers, integers
//! outside the `i64` range) parses as [`CustomerId::Unresolvable`], which
//! never matches a customer.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Customer Identifier
// ============================================================================

/// Identifier shared by `Customer.id` and `Transaction.customer_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum CustomerId {
    /// Numeric identifier (`"id": 7`, also `"id": 7.0`).
    Number(i64),
    /// Textual identifier (`"id": "c-7"`).
    Text(String),
    /// A value that cannot identify a customer. Serializes as `null`.
    Unresolvable,
}

impl CustomerId {
    /// Maps a JSON value onto an identifier.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().and_then(whole_i64))
                .map_or(Self::Unresolvable, Self::Number),
            _ => Self::Unresolvable,
        }
    }

    /// Returns `false` for [`CustomerId::Unresolvable`].
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        !matches!(self, Self::Unresolvable)
    }
}

/// `7.0` is the same JSON number as `7`.
fn whole_i64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from_json(&value))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Unresolvable => f.write_str("?"),
        }
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CustomerId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ============================================================================
// Customer
// ============================================================================

/// A customer record from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Identifier referenced by transactions.
    pub id: CustomerId,
    /// Display name, also the grouping key.
    pub name: String,
}

#[cfg(test)]
impl Customer {
    /// Creates a new customer.
    #[must_use]
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::number(r#"{"id": 1, "name": "Alice"}"#, CustomerId::Number(1))]
    #[case::text(r#"{"id": "c-1", "name": "Alice"}"#, CustomerId::Text("c-1".into()))]
    fn test_customer_id_kinds(#[case] json: &str, #[case] expected: CustomerId) {
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, expected);
        assert_eq!(customer.name, "Alice");
    }

    #[rstest]
    #[case::null("null")]
    #[case::fraction("1.5")]
    #[case::beyond_i64("18446744073709551615")]
    #[case::boolean("true")]
    #[case::object(r#"{"id": 1}"#)]
    fn test_unusable_ids_parse_as_unresolvable(#[case] json: &str) {
        let id: CustomerId = serde_json::from_str(json).unwrap();
        assert_eq!(id, CustomerId::Unresolvable);
        assert!(!id.is_resolvable());
    }

    #[rstest]
    #[case::whole_float("1.0", 1)]
    #[case::negative("-3", -3)]
    #[case::min("-9223372036854775808", i64::MIN)]
    fn test_numeric_ids(#[case] json: &str, #[case] expected: i64) {
        let id: CustomerId = serde_json::from_str(json).unwrap();
        assert_eq!(id, CustomerId::Number(expected));
    }

    #[test]
    fn test_unresolvable_serializes_as_null() {
        assert_eq!(serde_json::to_string(&CustomerId::Unresolvable).unwrap(), "null");
    }

    #[test]
    fn test_number_and_text_ids_differ() {
        assert_ne!(CustomerId::from(1), CustomerId::from("1"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(CustomerId::from(42).to_string(), "42");
        assert_eq!(CustomerId::from("abc").to_string(), "abc");
    }
}
