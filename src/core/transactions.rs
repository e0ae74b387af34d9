//! Transaction views - filtering, sorting, and summary totals.
//!
//! All functions here are pure: they take a snapshot of the transaction
//! sequence and produce a presentational view without touching the store.

use crate::entities::{Transaction, TransactionKind};

/// Filter over the transaction list.
///
/// The predicate is a conjunction: the kind must match (or be
/// unconstrained) and the category must be in the selected set (an empty
/// set means no category constraint).
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    /// Restrict to one direction, or None for all
    pub kind: Option<TransactionKind>,
    /// Restrict to these categories; empty means no restriction
    pub categories: Vec<String>,
}

impl TransactionFilter {
    /// Whether a transaction passes this filter.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let kind_ok = self.kind.is_none_or(|k| transaction.kind == k);
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&transaction.category);
        kind_ok && category_ok
    }
}

/// Sort key applied after filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent date first
    #[default]
    Newest,
    /// Oldest date first
    Oldest,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
}

/// Income/expense/net totals over a transaction view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    /// Sum of income amounts
    pub total_income: f64,
    /// Sum of expense amounts
    pub total_expenses: f64,
    /// Income minus expenses; negative for a net loss
    pub net: f64,
}

/// Applies a filter and sort to a transaction snapshot.
///
/// Filtering preserves the stored (newest-first) order; the sort step then
/// imposes the requested key. Stability across equal keys is not promised.
#[must_use]
pub fn filter_and_sort(
    transactions: &[Transaction],
    filter: &TransactionFilter,
    order: SortOrder,
) -> Vec<Transaction> {
    let mut view: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => view.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => view.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::AmountDesc => view.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        SortOrder::AmountAsc => view.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
    }

    view
}

/// Computes summary totals over a (typically already filtered) view, so
/// the displayed totals stay consistent with the active filter.
#[must_use]
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => summary.total_income += transaction.amount,
            TransactionKind::Expense => summary.total_expenses += transaction.amount,
        }
    }
    summary.net = summary.total_income - summary.total_expenses;
    summary
}

/// Formats an amount with an explicit sign and currency symbol, e.g.
/// `+$50.00` for income and `-$25.50` for an expense.
#[must_use]
pub fn format_signed_amount(amount: f64, kind: TransactionKind) -> String {
    match kind {
        TransactionKind::Income => format!("+${amount:.2}"),
        TransactionKind::Expense => format!("-${amount:.2}"),
    }
}
