//! Shared test utilities for `ZenBudget`.
//!
//! Provides helpers for setting up in-memory stores with an authenticated
//! session and for building test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::NaiveDate;

use crate::auth::SessionManager;
use crate::config::AppConfig;
use crate::entities::{NewTransaction, Transaction, TransactionKind};
use crate::storage::MemoryStore;
use crate::store::UserStore;

/// The default static configuration, shared by tests.
pub fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig::default())
}

/// Signs up `Test User <test@example.com>` on a fresh in-memory store and
/// returns a loaded [`UserStore`] for them. The standard starting point
/// for data-store tests.
pub async fn setup_user_store() -> UserStore<MemoryStore> {
    let blobs = Arc::new(MemoryStore::new());
    let mut sessions = SessionManager::new(Arc::clone(&blobs));
    sessions
        .signup("Test User", "test@example.com", "hunter2")
        .await
        .unwrap();
    UserStore::load(blobs, test_config(), &sessions).unwrap()
}

/// An income transaction record with fixed description and date.
pub fn income(amount: f64) -> Transaction {
    Transaction {
        id: 0,
        description: "Test income".to_string(),
        amount,
        kind: TransactionKind::Income,
        category: "Salary".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

/// An expense transaction record in the given category.
pub fn expense(amount: f64, category: &str) -> Transaction {
    Transaction {
        id: 0,
        description: "Test expense".to_string(),
        amount,
        kind: TransactionKind::Expense,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

/// An expense record with an explicit id and ISO date, for sort tests.
pub fn transaction_on(id: i64, date: &str) -> Transaction {
    Transaction {
        id,
        date: date.parse().unwrap(),
        ..expense(10.0, "Food")
    }
}

/// Store input for an income transaction (id and date assigned by the store).
pub fn income_input(amount: f64) -> NewTransaction {
    NewTransaction {
        description: "Test income".to_string(),
        amount,
        kind: TransactionKind::Income,
        category: "Salary".to_string(),
        date: None,
    }
}

/// Store input for an expense transaction in the given category.
pub fn expense_input(amount: f64, category: &str) -> NewTransaction {
    NewTransaction {
        description: "Test expense".to_string(),
        amount,
        kind: TransactionKind::Expense,
        category: category.to_string(),
        date: None,
    }
}
