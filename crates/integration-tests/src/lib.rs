//! Integration tests for the Brew Haven cart.
//!
//! These tests exercise the full stack against a real store file: load a
//! session, mutate, drop it, and reload from disk, the way consecutive page
//! loads would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brewhaven-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs;
use std::path::{Path, PathBuf};

use brewhaven_storefront::FileStore;
use uuid::Uuid;

/// A uniquely named store file under the system temp directory, removed on
/// drop.
#[derive(Debug)]
pub struct TempStore {
    path: PathBuf,
}

impl TempStore {
    /// Pick a fresh path; the file itself is created lazily by the store.
    #[must_use]
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("brewhaven-test-{}.json", Uuid::new_v4()));
        Self { path }
    }

    /// Open a [`FileStore`] over this path.
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::open(&self.path)
    }

    /// The store file's path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
