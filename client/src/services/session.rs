//! # Session Store
//!
//! The logged-in marker is a single phone-number string in a local
//! key-value store. Presence of the value is the sole "logged in"
//! signal; it is written exactly once, on successful registration, and
//! read on startup to pick the initial screen.

use parking_lot::RwLock;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Session persistence failure.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to persist session: {0}")]
    Io(#[from] io::Error),
}

/// Read/write access to the persisted phone number.
///
/// Single-writer (the registration success path), many-reader. Injected
/// explicitly into the API client and the repository; nothing reads it
/// through a global.
pub trait SessionStore: Send + Sync {
    /// The persisted phone number, if any.
    fn phone(&self) -> Option<String>;

    /// Persist the phone number. Overwrites any previous value.
    fn set_phone(&self, phone: &str) -> Result<(), SessionError>;

    /// Whether a session exists.
    fn is_logged_in(&self) -> bool {
        self.phone().is_some()
    }
}

/// File-backed session store: one string value at a caller-supplied path.
///
/// The file is read once at construction; reads afterwards are served
/// from the in-memory cache and writes go through to disk.
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = Self::load(&path);
        Self {
            path,
            cached: RwLock::new(cached),
        }
    }

    fn load(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(error = %err, path = %path.display(), "failed to read session file");
                }
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn phone(&self) -> Option<String> {
        self.cached.read().clone()
    }

    fn set_phone(&self, phone: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, phone)?;
        *self.cached.write() = Some(phone.to_string());
        tracing::info!(path = %self.path.display(), "session persisted");
        Ok(())
    }
}

/// In-memory session store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionStore {
    phone: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a session.
    pub fn with_phone(phone: &str) -> Self {
        Self {
            phone: RwLock::new(Some(phone.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn phone(&self) -> Option<String> {
        self.phone.read().clone()
    }

    fn set_phone(&self, phone: &str) -> Result<(), SessionError> {
        *self.phone.write() = Some(phone.to_string());
        Ok(())
    }
}
