//! Storage hook for persisting session state.
//!
//! Reelhub doesn't decide where your session lives — that depends on the
//! host application (a desktop app wants a file, a test wants memory, an
//! embedded webview wants whatever the platform offers).
//!
//! Instead, this module defines the [`StorageBackend`] trait: a tiny
//! string key/value contract, deliberately shaped like the web's
//! `localStorage` (`get`/`set`/`remove`). The session store is written
//! against the trait, and two implementations ship in the box:
//!
//! - [`MemoryStorage`] — a mutex-guarded map, for tests and throwaway
//!   sessions.
//! - [`FileStorage`] — one small file per key in a directory, for
//!   sessions that survive a restart.
//!
//! # Why a trait?
//!
//! A trait is like an interface in other languages — it defines WHAT
//! something can do without specifying HOW. The session store never
//! learns whether it's talking to a file, a map, or something custom,
//! which is exactly what lets tests run without touching the disk.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::SessionError;

/// A string key/value store for session state.
///
/// # Trait bounds
///
/// - `Send + Sync` → the backend can be shared across async tasks
///   (requests holding the session store may run on different threads).
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the application context that owns it.
///
/// # Contract
///
/// - `get` of a key that was never set returns `Ok(None)`, not an error.
/// - `remove` of a missing key is a no-op, not an error.
/// - Values are opaque strings; the session store decides what they mean.
pub trait StorageBackend: Send + Sync + 'static {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes the value stored under `key`. Removing a missing key
    /// succeeds silently.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

// Boxed backends are backends too. The application context holds a
// `Box<dyn StorageBackend>` chosen at build time; this impl lets that
// box be handed straight to `SessionStore::new`.
impl StorageBackend for Box<dyn StorageBackend> {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove(key)
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// An in-memory backend: a mutex-guarded map.
///
/// Sessions stored here vanish when the process exits. That's the point —
/// tests and short-lived tools shouldn't leave tokens on disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// A file-per-key backend rooted at a directory.
///
/// Each key becomes one small file (`<dir>/access_token`, etc.), which
/// keeps writes independent: replacing the token can't corrupt the
/// roles. Keys must be plain file-name-safe strings — the session store
/// only ever uses its three fixed keys, so this is not a general store.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (creating if needed) a storage directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| {
            SessionError::storage(dir.display().to_string(), source)
        })?;
        Ok(Self { dir })
    }

    /// Opens the platform-default location: `<user data dir>/reelhub`.
    ///
    /// On Linux that's `~/.local/share/reelhub`, on macOS
    /// `~/Library/Application Support/reelhub`.
    pub fn default_location() -> Result<Self, SessionError> {
        let base = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        Self::new(base.join("reelhub"))
    }

    /// The directory this backend writes into.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SessionError::storage(key, source)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        std::fs::write(self.path_for(key), value)
            .map_err(|source| SessionError::storage(key, source))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            // Removing a key that isn't there satisfies the contract.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::storage(key, source)),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // MemoryStorage
    // =====================================================================

    #[test]
    fn test_memory_get_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("absent").unwrap(), None);
    }

    #[test]
    fn test_memory_set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_set_replaces_previous_value() {
        let storage = MemoryStorage::new();
        storage.set("k", "old").unwrap();
        storage.set("k", "new").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_memory_remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("absent").is_ok());
    }

    // =====================================================================
    // FileStorage
    // =====================================================================

    #[test]
    fn test_file_storage_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set("access_token", "tok-1").unwrap();
        assert_eq!(
            storage.get("access_token").unwrap().as_deref(),
            Some("tok-1")
        );

        // A fresh backend over the same directory sees the value —
        // that's the whole point of the file backend.
        let reopened = FileStorage::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get("access_token").unwrap().as_deref(),
            Some("tok-1")
        );
    }

    #[test]
    fn test_file_storage_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("nothing_here").unwrap(), None);
    }

    #[test]
    fn test_file_storage_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);

        // Second remove of the same key still succeeds.
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_file_storage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        storage.set("k", "v").unwrap();
        assert!(nested.join("k").exists());
    }
}
