//! Derived-view engine - pure computations over a data-bundle snapshot.
//!
//! Nothing in this module mutates data or touches storage; each function
//! recomputes a presentational aggregate from the records it is handed.
//! The one stateful resident is [`signal::IncomeFlag`], the transient
//! income-animation flag with its scheduled auto-reset.

pub mod budget;
pub mod health;
pub mod signal;
pub mod transactions;

pub use budget::BudgetReport;
pub use health::FinancialHealth;
pub use signal::IncomeFlag;
pub use transactions::{SortOrder, Summary, TransactionFilter};
