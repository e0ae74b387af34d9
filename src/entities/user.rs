//! Credential and session records.
//!
//! A [`Credential`] is created once at signup and is immutable thereafter;
//! there is no password-change or account-deletion path. A [`Session`] is
//! the small `{name, email}` record identifying the currently authenticated
//! user; at most one exists process-wide at a time.

use serde::{Deserialize, Serialize};

/// One row of the persisted credential table, keyed by email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Display name chosen at signup
    pub name: String,
    /// Unique, case-sensitive account key
    pub email: String,
    /// Argon2id hash of the account password (PHC string format)
    pub password_hash: String,
}

/// The record identifying the currently authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Display name of the authenticated user
    pub name: String,
    /// Email of the authenticated user, used as the data-bundle key
    pub email: String,
}

impl Session {
    /// Builds the session record for a credential, dropping the hash.
    #[must_use]
    pub fn for_credential(credential: &Credential) -> Self {
        Self {
            name: credential.name.clone(),
            email: credential.email.clone(),
        }
    }
}
