//! Session manager - authenticates users and owns the session record.
//!
//! The manager is a three-state machine (anonymous → authenticating →
//! authenticated). Login and signup model an eventual network round trip
//! with a fixed artificial delay before resolving; a failed attempt always
//! lands back in the anonymous state. The session record is persisted so a
//! fresh process can restore it on start.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::auth::credentials::{self, CredentialStore};
use crate::entities::{Credential, Session};
use crate::errors::{Error, Result};
use crate::storage::{BlobStore, SESSION_KEY};

/// Artificial latency applied to login and signup, modeling the network
/// round trip the mock backend stands in for.
pub const AUTH_LATENCY: Duration = Duration::from_secs(1);

/// Authentication state of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No user is signed in
    Anonymous,
    /// A login or signup attempt is in flight
    Authenticating,
    /// A user is signed in
    Authenticated(Session),
}

/// Owns the current session record and the credential table.
#[derive(Debug)]
pub struct SessionManager<S> {
    store: Arc<S>,
    credentials: CredentialStore<S>,
    state: SessionState,
}

impl<S: BlobStore> SessionManager<S> {
    /// Creates a manager, restoring a persisted session if one exists.
    ///
    /// A malformed persisted session is discarded with a warning and the
    /// manager starts anonymous.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        let state = match store.read_json::<Session>(SESSION_KEY) {
            Ok(Some(session)) => {
                info!(email = %session.email, "restored persisted session");
                SessionState::Authenticated(session)
            }
            Ok(None) => SessionState::Anonymous,
            Err(_) => {
                warn!("persisted session is malformed; starting anonymous");
                SessionState::Anonymous
            }
        };

        Self {
            credentials: CredentialStore::new(Arc::clone(&store)),
            store,
            state,
        }
    }

    /// Authenticates an email/password pair against the credential table.
    ///
    /// Unknown emails and wrong passwords fail identically with
    /// [`Error::InvalidCredentials`]; a failed attempt leaves the manager
    /// anonymous with the persisted session slot cleared.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session> {
        self.state = SessionState::Authenticating;
        debug!(%email, "login attempt");
        sleep(AUTH_LATENCY).await;

        let matched = self
            .credentials
            .find(email)?
            .filter(|c| credentials::verify_password(password, &c.password_hash));

        match matched {
            Some(credential) => self.establish(&credential),
            None => {
                self.abandon()?;
                Err(Error::InvalidCredentials)
            }
        }
    }

    /// Registers a new account and establishes a session for it.
    ///
    /// Behaves as an implicit successful login: once the credential is
    /// appended there is no separate password check.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<Session> {
        self.state = SessionState::Authenticating;
        debug!(%email, "signup attempt");
        sleep(AUTH_LATENCY).await;

        if self.credentials.exists(email)? {
            self.abandon()?;
            return Err(Error::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let credential = Credential {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: credentials::hash_password(password)?,
        };
        self.credentials.append(credential.clone())?;
        self.establish(&credential)
    }

    /// Clears the persisted session and returns to the anonymous state.
    /// Always succeeds, signed in or not.
    pub fn logout(&mut self) -> Result<()> {
        if let SessionState::Authenticated(session) = &self.state {
            info!(email = %session.email, "logged out");
        }
        self.store.remove(SESSION_KEY)?;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// The session record, when authenticated.
    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        match &self.state {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// The current authentication state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// The credential table this manager authenticates against.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    fn establish(&mut self, credential: &Credential) -> Result<Session> {
        let session = Session::for_credential(credential);
        self.store.write_json(SESSION_KEY, &session)?;
        info!(email = %session.email, "session established");
        self.state = SessionState::Authenticated(session.clone());
        Ok(session)
    }

    fn abandon(&mut self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        self.state = SessionState::Anonymous;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::MemoryStore;

    fn manager() -> SessionManager<MemoryStore> {
        SessionManager::new(Arc::new(MemoryStore::new()))
    }

    async fn manager_with_account() -> SessionManager<MemoryStore> {
        let mut manager = manager();
        manager
            .signup("Test User", "test@example.com", "hunter2")
            .await
            .unwrap();
        manager
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_establishes_session() {
        let manager = manager_with_account().await;

        assert!(manager.is_authenticated());
        let session = manager.current().unwrap();
        assert_eq!(session.name, "Test User");
        assert_eq!(session.email, "test@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_duplicate_email() {
        let mut manager = manager_with_account().await;
        let table_before = manager.credentials().all().unwrap();

        let result = manager.signup("Other", "test@example.com", "other").await;
        assert!(matches!(result, Err(Error::DuplicateEmail { .. })));
        // The stored table is untouched and the manager is anonymous
        assert_eq!(manager.credentials().all().unwrap(), table_before);
        assert_eq!(*manager.state(), SessionState::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_with_wrong_password() {
        let mut manager = manager_with_account().await;
        manager.logout().unwrap();

        let result = manager.login("test@example.com", "wrong").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
        assert!(!manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_with_unknown_email() {
        let mut manager = manager_with_account().await;
        manager.logout().unwrap();

        // Indistinguishable from a wrong password - no user enumeration
        let result = manager.login("nobody@example.com", "hunter2").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_round_trip() {
        let mut manager = manager_with_account().await;
        manager.logout().unwrap();
        assert_eq!(*manager.state(), SessionState::Anonymous);

        let session = manager.login("test@example.com", "hunter2").await.unwrap();
        assert_eq!(session.email, "test@example.com");
        assert!(manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_drops_existing_session() {
        let mut manager = manager_with_account().await;
        assert!(manager.is_authenticated());

        let _ = manager.login("test@example.com", "wrong").await;
        assert_eq!(*manager.state(), SessionState::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_restores_across_managers() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut manager = SessionManager::new(Arc::clone(&store));
            manager
                .signup("Test User", "test@example.com", "hunter2")
                .await
                .unwrap();
        }

        // A fresh manager over the same storage starts authenticated
        let restored = SessionManager::new(store);
        assert!(restored.is_authenticated());
        assert_eq!(restored.current().unwrap().email, "test@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_persisted_session() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = SessionManager::new(Arc::clone(&store));
        manager
            .signup("Test User", "test@example.com", "hunter2")
            .await
            .unwrap();

        manager.logout().unwrap();
        assert_eq!(*manager.state(), SessionState::Anonymous);

        // A subsequent process start restores the anonymous state
        let fresh = SessionManager::new(store);
        assert!(!fresh.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_while_anonymous_succeeds() {
        let mut manager = manager();
        manager.logout().unwrap();
        assert_eq!(*manager.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_malformed_persisted_session_starts_anonymous() {
        let store = Arc::new(MemoryStore::new());
        store.put(SESSION_KEY, "{broken").unwrap();

        let manager = SessionManager::new(store);
        assert_eq!(*manager.state(), SessionState::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stored_password_is_hashed() {
        let manager = manager_with_account().await;
        let table = manager.credentials().all().unwrap();
        assert_eq!(table.len(), 1);
        assert_ne!(table[0].password_hash, "hunter2");
        assert!(table[0].password_hash.starts_with("$argon2"));
    }
}
