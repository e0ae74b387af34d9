//! `ZenBudget` - A client-side personal budgeting core
//!
//! This crate provides the data layer of a personal budgeting application:
//! account signup/login against a persisted credential table, a per-user
//! store of savings goals, subscriptions, and transactions, and pure
//! derived-view computations (budget utilization, financial-health
//! classification, transaction filtering and summaries). All state lives in
//! a string-keyed JSON blob store, one bundle per user email.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Credential store and session manager - signup, login, logout
pub mod auth;
/// Static application configuration - budget categories and image pools
pub mod config;
/// Derived-view computations - budgets, health, filters, transient signals
pub mod core;
/// Plain data models persisted as JSON
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// String-keyed JSON blob storage backends
pub mod storage;
/// Per-user data store - goals, subscriptions, transactions
pub mod store;

#[cfg(test)]
pub mod test_utils;
