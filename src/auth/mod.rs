//! Authentication - the credential table and the session state machine.

/// Persisted credential table with argon2id password hashing
pub mod credentials;

/// Session state machine: anonymous, authenticating, authenticated
pub mod session;

pub use credentials::CredentialStore;
pub use session::{SessionManager, SessionState};
