//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting dataset and app setup across
//! tests.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use rstest::fixture;

use crate::domain::{Customer, Dataset, GroupedView, Transaction, group_by_customer};
use crate::state::{App, AppConfig, StartupOptions};

/// Terminal used by rendering tests.
pub type TestTerminal = Terminal<TestBackend>;

/// Terminal size the app factories lay themselves out for.
pub const TEST_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 40,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    #[must_use]
    pub fn on(customer_id: i64, date: &str, amount: f64) -> Transaction {
        Transaction::new(customer_id, date, amount)
    }

    /// `count` transactions for one customer on consecutive January days.
    #[must_use]
    pub fn many(customer_id: i64, count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|i| {
                let day = i % 28 + 1;
                Transaction::new(customer_id, format!("2024-01-{day:02}"), (i + 1) as f64)
            })
            .collect()
    }
}

pub struct DatasetMother;

impl DatasetMother {
    /// Four customers and eight transactions.
    ///
    /// Groups come out as Alice, Bob, Unknown, Alicia. Carol has no
    /// transactions and customer 99 does not exist.
    #[must_use]
    pub fn standard() -> Dataset {
        Dataset::new(
            vec![
                Customer::new(1, "Alice"),
                Customer::new(2, "Bob"),
                Customer::new(3, "Alicia"),
                Customer::new(4, "Carol"),
            ],
            vec![
                TransactionMother::on(1, "2024-01-01", 10.0),
                TransactionMother::on(1, "2024-01-01", 5.0),
                TransactionMother::on(2, "2024-01-01", 150.0),
                TransactionMother::on(99, "2024-01-03", 42.0),
                TransactionMother::on(1, "2024-01-02", 3.0),
                TransactionMother::on(3, "2024-01-04", 250.0),
                TransactionMother::on(2, "2024-01-05", 7.5),
                TransactionMother::on(3, "2024-01-04", 50.0),
            ],
        )
    }

    #[must_use]
    pub fn grouped() -> GroupedView {
        let dataset = Self::standard();
        group_by_customer(&dataset.customers, &dataset.transactions)
    }

    /// Enough customers to overflow the table viewport.
    #[must_use]
    pub fn crowded(customers: usize, per_customer: usize) -> Dataset {
        let names = (1..=customers)
            .map(|i| Customer::new(i as i64, format!("Customer {i:03}")))
            .collect();
        let transactions = (1..=customers)
            .flat_map(|i| TransactionMother::many(i as i64, per_customer))
            .collect();
        Dataset::new(names, transactions)
    }

    #[must_use]
    pub fn empty() -> Dataset {
        Dataset::new(Vec::new(), Vec::new())
    }
}

pub struct AppMother;

impl AppMother {
    /// App over the standard dataset, laid out for [`TEST_AREA`].
    #[must_use]
    pub fn standard() -> App {
        Self::with_options(StartupOptions::default())
    }

    #[must_use]
    pub fn with_selection(customer: &str) -> App {
        Self::with_options(StartupOptions {
            select: Some(customer.to_string()),
            ..StartupOptions::default()
        })
    }

    #[must_use]
    pub fn with_options(options: StartupOptions) -> App {
        Self::from_dataset(&DatasetMother::standard(), options)
    }

    #[must_use]
    pub fn from_dataset(dataset: &Dataset, options: StartupOptions) -> App {
        let mut app = App::new(dataset, AppConfig::default(), options);
        app.terminal_area = TEST_AREA;
        app.sync_table_scroll();
        app
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> TestTerminal {
    Terminal::new(TestBackend::new(TEST_AREA.width, TEST_AREA.height))
        .expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> TestTerminal {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

#[fixture]
pub fn app() -> App {
    AppMother::standard()
}
