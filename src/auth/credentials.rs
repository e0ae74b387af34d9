//! Credential store - the persisted email → account mapping.
//!
//! The whole table lives under one storage key and is rewritten atomically
//! on every append. Records are immutable once created: there is no
//! update, password-change, or delete path. Passwords are stored as
//! argon2id hashes, never in plaintext.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use tracing::{info, warn};

use crate::entities::Credential;
use crate::errors::{Error, Result};
use crate::storage::{BlobStore, USERS_KEY};

/// Read/append access to the persisted credential table.
#[derive(Debug)]
pub struct CredentialStore<S> {
    store: Arc<S>,
}

impl<S: BlobStore> CredentialStore<S> {
    /// Wraps a blob store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reads the whole credential table, falling back to an empty table
    /// when nothing (or something malformed) is persisted.
    pub fn all(&self) -> Result<Vec<Credential>> {
        match self.store.read_json::<Vec<Credential>>(USERS_KEY) {
            Ok(table) => Ok(table.unwrap_or_default()),
            Err(Error::MalformedPersistedData { .. }) => {
                warn!("credential table is malformed; starting from empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Finds the credential record for `email` (exact, case-sensitive).
    pub fn find(&self, email: &str) -> Result<Option<Credential>> {
        Ok(self.all()?.into_iter().find(|c| c.email == email))
    }

    /// Whether a record for `email` exists.
    pub fn exists(&self, email: &str) -> Result<bool> {
        Ok(self.find(email)?.is_some())
    }

    /// Appends a new credential record and rewrites the whole table.
    ///
    /// Fails with [`Error::DuplicateEmail`] without touching storage when
    /// the email is already registered.
    pub fn append(&self, record: Credential) -> Result<()> {
        let mut table = self.all()?;
        if table.iter().any(|c| c.email == record.email) {
            return Err(Error::DuplicateEmail {
                email: record.email,
            });
        }

        let email = record.email.clone();
        table.push(record);
        self.store.write_json(USERS_KEY, &table)?;
        info!(%email, "registered new account");
        Ok(())
    }
}

/// Hashes a password with argon2id, producing a PHC-format string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC-format hash.
///
/// An unparseable hash verifies as false rather than erroring; for the
/// caller it is indistinguishable from a wrong password.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        warn!("stored password hash failed to parse");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
