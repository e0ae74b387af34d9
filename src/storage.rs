//! String-keyed JSON blob storage.
//!
//! The entire application state lives in a flat key/value space of
//! JSON-serialized blobs: `users` holds the credential table, `session` the
//! current session record (or nothing), and `userData_<email>` one bundle
//! per user. Every write is a whole-value overwrite; there is no
//! versioning and the last writer wins.
//!
//! Two backends are provided: [`FileStore`], which maps each key to one
//! JSON file in a root directory, and [`MemoryStore`], the in-memory test
//! double (the analog of an in-memory database in integration tests).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::{Error, Result};

/// Storage key for the credential table.
pub const USERS_KEY: &str = "users";

/// Storage key for the current session record.
pub const SESSION_KEY: &str = "session";

/// Storage key for one user's data bundle.
#[must_use]
pub fn user_data_key(email: &str) -> String {
    format!("userData_{email}")
}

/// A flat, string-keyed store of JSON blobs.
///
/// Implementations only move raw strings; the provided methods layer JSON
/// encoding on top so that every caller shares the same malformed-data
/// policy: a value that fails to parse surfaces as
/// [`Error::MalformedPersistedData`], which callers recover from by
/// starting from the empty value.
pub trait BlobStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Unconditionally overwrites the value under `key`.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`; absent keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Reads and decodes the JSON value under `key`.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    warn!(key, %err, "persisted value failed to parse");
                    Err(Error::MalformedPersistedData {
                        key: key.to_string(),
                    })
                }
            },
        }
    }

    /// Encodes `value` as JSON and overwrites the blob under `key`.
    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value).map_err(|err| Error::Storage {
            message: format!("failed to serialize value for key '{key}': {err}"),
        })?;
        self.put(key, &raw)
    }
}

/// File-backed blob store: one JSON file per key inside a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (and creates, if needed) a store rooted at `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "opened file store");
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys may contain characters with path meaning ('@' is fine, '/'
        // and '\' are not); replace separators so a key never escapes the
        // store root.
        let safe: String = key
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        // Write to a sibling temp file and rename so readers never observe
        // a partially written blob.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory blob store used by tests and ephemeral contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| Error::Storage {
            message: "memory store lock poisoned".to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| Error::Storage {
            message: "memory store lock poisoned".to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| Error::Storage {
            message: "memory store lock poisoned".to_string(),
        })?;
        values.remove(key);
        Ok(())
    }
}
