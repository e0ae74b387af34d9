//! Financial-health classification from the savings rate.
//!
//! The dashboard represents the user's finances as a plant that thrives
//! with a high savings rate. Classification is a strict threshold ladder:
//! a rate exactly on a boundary belongs to the bucket above it.

use crate::config::PlantImages;
use crate::entities::{Transaction, TransactionKind};

/// Financial-health buckets, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinancialHealth {
    /// Savings rate below 10%
    Stressed,
    /// No income history yet, or a savings rate below 30%
    Young,
    /// Savings rate below 50%
    Healthy,
    /// Savings rate of 50% or more
    Thriving,
}

impl FinancialHealth {
    /// The dashboard plant illustration for this state.
    #[must_use]
    pub fn plant_image<'a>(&self, plants: &'a PlantImages) -> &'a str {
        match self {
            Self::Stressed => &plants.stressed,
            Self::Young => &plants.young,
            Self::Healthy => &plants.healthy,
            Self::Thriving => &plants.thriving,
        }
    }
}

/// Savings rate over all transactions: `(income - expenses) / income`.
///
/// Returns None when there is no income to divide by.
#[must_use]
pub fn savings_rate(transactions: &[Transaction]) -> Option<f64> {
    let total_income = total_of(transactions, TransactionKind::Income);
    if total_income == 0.0 {
        return None;
    }
    let total_expenses = total_of(transactions, TransactionKind::Expense);
    Some((total_income - total_expenses) / total_income)
}

/// Classifies the user's financial health from their full transaction
/// history. No transactions, or income of zero, classifies as Young.
#[must_use]
pub fn classify(transactions: &[Transaction]) -> FinancialHealth {
    let Some(rate) = savings_rate(transactions) else {
        return FinancialHealth::Young;
    };

    if rate < 0.10 {
        FinancialHealth::Stressed
    } else if rate < 0.30 {
        FinancialHealth::Young
    } else if rate < 0.50 {
        FinancialHealth::Healthy
    } else {
        FinancialHealth::Thriving
    }
}

fn total_of(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}
