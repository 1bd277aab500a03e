//! Grouping of transactions by customer display name.
//!
//! Transactions whose `customer_id` does not resolve to a known customer are
//! bucketed under [`UNKNOWN_CUSTOMER`]. Several unknown ids share that one
//! bucket, and two customers with the same display name share a bucket too.

use std::collections::HashMap;

use super::{Customer, CustomerId, Transaction};

/// Grouping key for transactions without a matching customer.
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// One customer's bucket of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerGroup {
    /// Grouping key (customer display name).
    pub name: String,
    /// Transactions in dataset order.
    pub transactions: Vec<Transaction>,
}

/// Transactions partitioned by customer name.
///
/// Groups are kept in the order their first transaction appears in the
/// source list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedView {
    groups: Vec<CustomerGroup>,
    index: HashMap<String, usize>,
}

impl GroupedView {
    /// All groups in first-appearance order.
    #[must_use]
    pub fn groups(&self) -> &[CustomerGroup] {
        &self.groups
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no transactions were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks up a customer's full transaction list by name.
    #[must_use]
    pub fn transactions_for(&self, name: &str) -> Option<&[Transaction]> {
        self.index
            .get(name)
            .map(|&i| self.groups[i].transactions.as_slice())
    }

    /// Returns `true` if a group with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Total number of grouped transactions across all buckets.
    #[cfg(test)]
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(|g| g.transactions.len()).sum()
    }

    fn push(&mut self, name: &str, transaction: Transaction) {
        match self.index.get(name) {
            Some(&i) => self.groups[i].transactions.push(transaction),
            None => {
                self.index.insert(name.to_string(), self.groups.len());
                self.groups.push(CustomerGroup {
                    name: name.to_string(),
                    transactions: vec![transaction],
                });
            }
        }
    }
}

/// Groups transactions by the display name of their customer.
///
/// When several customers share an id, the first one in `customers` wins.
/// Unresolvable ids never match, on either side.
#[must_use]
pub fn group_by_customer(customers: &[Customer], transactions: &[Transaction]) -> GroupedView {
    let mut names: HashMap<&CustomerId, &str> = HashMap::with_capacity(customers.len());
    for customer in customers.iter().filter(|c| c.id.is_resolvable()) {
        names.entry(&customer.id).or_insert(customer.name.as_str());
    }

    let mut view = GroupedView::default();
    let mut unresolved = 0usize;
    for transaction in transactions {
        let name = match names.get(&transaction.customer_id) {
            Some(name) => *name,
            None => {
                unresolved += 1;
                UNKNOWN_CUSTOMER
            }
        };
        view.push(name, transaction.clone());
    }

    tracing::debug!(
        groups = view.len(),
        transactions = transactions.len(),
        unresolved,
        "Grouped transactions by customer"
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DatasetMother;
    use insta::assert_debug_snapshot;

    #[test]
    fn test_matched_transactions_grouped_under_name() {
        let customers = vec![Customer::new(1, "Alice"), Customer::new(2, "Bob")];
        let transactions = vec![
            Transaction::new(1, "2024-01-01", 10.0),
            Transaction::new(2, "2024-01-01", 20.0),
            Transaction::new(1, "2024-01-02", 30.0),
        ];

        let view = group_by_customer(&customers, &transactions);

        let alice = view.transactions_for("Alice").unwrap();
        assert_eq!(alice.len(), 2);
        assert_eq!(alice[0].amount, 10.0);
        assert_eq!(alice[1].amount, 30.0);
        assert_eq!(view.transactions_for("Bob").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_ids_coalesce() {
        let customers = vec![Customer::new(1, "Alice")];
        let transactions = vec![
            Transaction::new(7, "2024-01-01", 1.0),
            Transaction::new(1, "2024-01-01", 2.0),
            Transaction::new("ghost", "2024-01-02", 3.0),
        ];

        let view = group_by_customer(&customers, &transactions);

        let unknown = view.transactions_for(UNKNOWN_CUSTOMER).unwrap();
        assert_eq!(unknown.len(), 2);
        assert_eq!(unknown[1].customer_id, CustomerId::from("ghost"));
    }

    #[test]
    fn test_string_id_does_not_match_number_id() {
        let customers = vec![Customer::new(1, "Alice")];
        let transactions = vec![Transaction::new("1", "2024-01-01", 5.0)];

        let view = group_by_customer(&customers, &transactions);

        assert!(!view.contains("Alice"));
        assert!(view.contains(UNKNOWN_CUSTOMER));
    }

    #[test]
    fn test_unresolvable_ids_never_match_each_other() {
        let customers = vec![Customer {
            id: CustomerId::Unresolvable,
            name: "Nobody".into(),
        }];
        let transactions = vec![Transaction::new(CustomerId::Unresolvable, "2024-01-01", 1.0)];

        let view = group_by_customer(&customers, &transactions);

        assert!(!view.contains("Nobody"));
        assert_eq!(view.transactions_for(UNKNOWN_CUSTOMER).unwrap().len(), 1);
    }

    #[test]
    fn test_shared_display_name_merges_bucket() {
        let customers = vec![Customer::new(1, "Sam"), Customer::new(2, "Sam")];
        let transactions = vec![
            Transaction::new(1, "2024-01-01", 1.0),
            Transaction::new(2, "2024-01-01", 2.0),
        ];

        let view = group_by_customer(&customers, &transactions);

        assert_eq!(view.len(), 1);
        assert_eq!(view.transactions_for("Sam").unwrap().len(), 2);
    }

    #[test]
    fn test_key_order_follows_first_appearance() {
        let view = DatasetMother::grouped();
        let names: Vec<&str> = view.groups().iter().map(|g| g.name.as_str()).collect();
        assert_debug_snapshot!(names, @r#"
        [
            "Alice",
            "Bob",
            "Unknown",
            "Alicia",
        ]
        "#);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let dataset = DatasetMother::standard();
        let view = group_by_customer(&dataset.customers, &dataset.transactions);

        assert_eq!(view.transaction_count(), dataset.transactions.len());
    }

    #[test]
    fn test_customers_without_transactions_have_no_group() {
        let customers = vec![Customer::new(1, "Alice"), Customer::new(2, "Idle")];
        let transactions = vec![Transaction::new(1, "2024-01-01", 1.0)];

        let view = group_by_customer(&customers, &transactions);

        assert!(!view.contains("Idle"));
    }

    #[test]
    fn test_regrouping_is_deterministic() {
        let dataset = DatasetMother::standard();
        let first = group_by_customer(&dataset.customers, &dataset.transactions);
        let second = group_by_customer(&dataset.customers, &dataset.transactions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let view = group_by_customer(&[], &[]);
        assert!(view.is_empty());
        assert_eq!(view.transaction_count(), 0);
    }
}
