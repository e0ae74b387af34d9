//! Budget plots and the transaction category list.

use serde::Deserialize;

/// One budget plot: a spending limit for a single category.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetCategory {
    /// Category name, drawn from the transaction category list
    pub category: String,
    /// Monthly spending limit for this category
    pub limit: f64,
}

/// The built-in budget plots.
#[must_use]
pub fn default_budgets() -> Vec<BudgetCategory> {
    [
        ("Food", 400.0),
        ("Transport", 150.0),
        ("Entertainment", 200.0),
        ("Shopping", 250.0),
        ("Utilities", 180.0),
        ("Health", 120.0),
    ]
    .into_iter()
    .map(|(category, limit)| BudgetCategory {
        category: category.to_string(),
        limit,
    })
    .collect()
}

/// The fixed transaction category list.
#[must_use]
pub fn default_categories() -> Vec<String> {
    [
        "Food",
        "Transport",
        "Entertainment",
        "Shopping",
        "Utilities",
        "Health",
        "Rent",
        "Salary",
        "Freelance",
        "Other",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
