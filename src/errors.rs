//! Unified error types for the `ZenBudget` core.
//!
//! Every fallible operation in the crate returns [`Result`]. All error kinds
//! are recoverable at the point of the user-facing operation; none are fatal
//! to the process.

use thiserror::Error;

/// Crate-wide error enumeration.
#[derive(Debug, Error)]
pub enum Error {
    /// No credential record matches the given email/password pair. Unknown
    /// emails and wrong passwords are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has a credential record.
    #[error("An account with email '{email}' already exists")]
    DuplicateEmail {
        /// The email that was already registered
        email: String,
    },

    /// A per-user operation was attempted while no session is established.
    #[error("No active session")]
    NoActiveSession,

    /// No savings goal exists with the given id.
    #[error("Savings goal not found: {id}")]
    GoalNotFound {
        /// The goal id that was looked up
        id: i64,
    },

    /// No transaction exists with the given id.
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The transaction id that was looked up
        id: i64,
    },

    /// A transaction referenced a category outside the configured list.
    #[error("Unknown transaction category: '{category}'")]
    UnknownCategory {
        /// The category that failed validation
        category: String,
    },

    /// An amount failed validation (non-positive, NaN, or infinite).
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// A persisted JSON value failed to parse. Callers treat this as
    /// "start from empty", never as a fatal fault.
    #[error("Persisted data under key '{key}' is malformed")]
    MalformedPersistedData {
        /// The storage key holding the malformed value
        key: String,
    },

    /// Configuration error (unreadable or invalid config file, empty pools).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Storage backend failure other than I/O (e.g. serialization).
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable description of the problem
        message: String,
    },

    /// Password hashing or verification failure.
    #[error("Password hashing error: {message}")]
    PasswordHash {
        /// Human-readable description of the problem
        message: String,
    },

    /// I/O error from the file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash {
            message: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
