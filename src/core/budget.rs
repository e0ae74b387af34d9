//! Budget utilization - spend per configured category against its limit.

use crate::config::BudgetCategory;
use crate::entities::{Transaction, TransactionKind};

/// Utilization of one budget plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    /// Category name
    pub category: String,
    /// Configured spending limit
    pub limit: f64,
    /// Total expense amount recorded in this category
    pub spent: f64,
    /// Limit minus spent; negative when over budget
    pub remaining: f64,
    /// Spend as a percentage of the limit, capped at 100
    pub percentage: f64,
}

/// Computes a [`BudgetReport`] for every configured budget plot.
///
/// Only expense transactions count toward `spent`; income in a budgeted
/// category is ignored. A non-positive limit reports 0% rather than an
/// unbounded ratio.
#[must_use]
pub fn reports(budgets: &[BudgetCategory], transactions: &[Transaction]) -> Vec<BudgetReport> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = transactions
                .iter()
                .filter(|t| t.kind == TransactionKind::Expense && t.category == budget.category)
                .map(|t| t.amount)
                .sum();

            let percentage = if budget.limit <= 0.0 {
                0.0
            } else {
                ((spent / budget.limit) * 100.0).min(100.0)
            };

            BudgetReport {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                remaining: budget.limit - spent,
                percentage,
            }
        })
        .collect()
}
