//! # Token Vault
//!
//! The single durable client-side item: the bearer token.
//!
//! ## Storage Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Token Vault Lifecycle                             │
//! │                                                                         │
//! │  startup          login              logout / 401                       │
//! │  ───────          ─────              ────────────                       │
//! │  load()           save(token)        clear()                            │
//! │     │                │                  │                               │
//! │     ▼                ▼                  ▼                               │
//! │  Some(t) → adopt   <data>/session.token  file removed                   │
//! │  None    → logged  written atomically    absence ⇒ logged out           │
//! │            out                           on next startup                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing else is ever persisted: collections are caches rebuilt by the
//! synchronizer on every session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// File name of the persisted token inside the data dir.
pub const TOKEN_FILE: &str = "session.token";

/// Durable storage for the bearer token.
#[derive(Debug)]
pub struct TokenVault {
    path: PathBuf,
}

impl TokenVault {
    /// Creates a vault rooted at the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        TokenVault {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    /// Loads the persisted token, if any. Absence means logged out.
    pub fn load(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        debug!(path = %self.path.display(), "persisted token found");
        Some(token.to_string())
    }

    /// Persists the token, creating the data dir on first use.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Removes the persisted token. Removing an absent token is fine.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
