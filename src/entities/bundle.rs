//! The per-user data bundle.
//!
//! Exactly one bundle exists per email; an email never seen before gets the
//! empty bundle. The whole bundle is serialized and overwritten on every
//! mutation (last write wins, single active writer).

use serde::{Deserialize, Serialize};

use crate::entities::{Goal, Subscription, Transaction};

/// The full `{goals, subscriptions, transactions}` record for one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Savings goals, in creation order
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Active subscriptions, in creation order
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    /// Transactions, newest first (a store invariant, not a view concern)
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Assigns the next id for a sequence: one more than the current maximum,
/// or 1 for an empty sequence.
pub fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id_of).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_next_id_empty_sequence() {
        let ids: Vec<i64> = vec![];
        assert_eq!(next_id(&ids, |id| *id), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        // Ids need not be contiguous; only the maximum matters.
        let ids = vec![1_i64, 7, 3];
        assert_eq!(next_id(&ids, |id| *id), 8);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let bundle: UserData = serde_json::from_str(r#"{"goals": []}"#).unwrap();
        assert!(bundle.subscriptions.is_empty());
        assert!(bundle.transactions.is_empty());
    }
}
