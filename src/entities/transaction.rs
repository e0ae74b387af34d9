//! Transaction entity - Represents all income and expense records.
//!
//! Transactions are created and edited by explicit user action and never
//! deleted. The store keeps them newest-first; amounts are always positive,
//! with [`TransactionKind`] carrying the direction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

/// A single income or expense record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned as max(existing) + 1
    pub id: i64,
    /// Human-readable description of the transaction
    pub description: String,
    /// Transaction amount, always positive; direction comes from `kind`
    pub amount: f64,
    /// Whether this is income or an expense. Serialized as `type` for
    /// compatibility with the original data format.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category from the configured category list
    pub category: String,
    /// ISO calendar date, defaulted to the creation day and editable
    pub date: NaiveDate,
}

/// Input for creating a transaction; the id is assigned by the store and
/// the date defaults to the current calendar day when not supplied.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    /// Human-readable description
    pub description: String,
    /// Transaction amount, must be positive and finite
    pub amount: f64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Category, validated against the configured list
    pub category: String,
    /// Explicit date, or None for "today"
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_kind_serializes_as_type_field() {
        let tx = Transaction {
            id: 1,
            description: "Paycheck".to_string(),
            amount: 2500.0,
            kind: TransactionKind::Income,
            category: "Salary".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["date"], "2025-06-01");
    }

    #[test]
    fn test_round_trips_original_format() {
        let raw = r#"{
            "id": 3,
            "description": "Groceries",
            "amount": 42.5,
            "type": "expense",
            "category": "Food",
            "date": "2025-05-30"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 5, 30).unwrap());
    }
}
