//! Credential storage.
//!
//! Holds the bearer token for the current session: pure get/set/clear with
//! no expiry or validation. An optional backing file makes the credential
//! survive restarts; if the file cannot be read or written the store keeps
//! working in memory and only logs the failure. `get` never errors.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::path::PathBuf;
use std::sync::Mutex;

/// In-process credential store with optional single-file persistence.
pub struct CredentialStore {
    token: Mutex<Option<String>>,
    path: Option<PathBuf>,
}

impl CredentialStore {
    /// Store that lives only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { token: Mutex::new(None), path: None }
    }

    /// Store backed by a single well-known file. An existing file seeds
    /// the in-memory value; a missing or unreadable file starts empty.
    #[must_use]
    pub fn with_persistence(path: PathBuf) -> Self {
        let token = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "credential file unreadable — starting without a stored credential");
                None
            }
        };
        Self { token: Mutex::new(token), path: Some(path) }
    }

    /// Current credential, if any.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Replace the credential. A previous value is silently dropped.
    pub fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner) =
            Some(token.to_owned());
        if let Some(path) = &self.path {
            if let Err(e) = std::fs::write(path, token) {
                tracing::warn!(path = %path.display(), error = %e, "could not persist credential — keeping it in memory");
            }
        }
    }

    /// Drop the credential from memory and from the backing file.
    pub fn clear(&self) {
        *self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "could not remove persisted credential");
                }
            }
        }
    }
}
