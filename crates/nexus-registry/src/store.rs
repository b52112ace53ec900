//! File-backed registry store with atomic rewrites.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::record::RegistrationRecord;

/// Failures while reading or writing the registry file.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("registry I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a valid registry object.
    #[error("registry file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The atomic rename of the rewritten file failed.
    #[error("registry rewrite failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// The durable user registry.
///
/// Holds only the file path; every operation loads the full mapping from
/// disk and, for writes, rewrites it atomically.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    path: PathBuf,
}

impl UserRegistry {
    /// Opens a registry at `path`, initializing an empty store if the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the initial empty store cannot be written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let registry = Self { path: path.into() };
        if !registry.path.exists() {
            info!(path = %registry.path.display(), "initializing empty user registry");
            registry.save(&BTreeMap::new())?;
        }
        Ok(registry)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the entire registry from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file is unreadable or corrupt.
    pub fn load(&self) -> Result<BTreeMap<String, RegistrationRecord>, StorageError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrites the entire registry atomically.
    ///
    /// The mapping is serialized into a temporary file in the same directory
    /// and renamed over the store, so readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on any I/O failure.
    pub fn save(
        &self,
        records: &BTreeMap<String, RegistrationRecord>,
    ) -> Result<(), StorageError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut file = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
            None => tempfile::NamedTempFile::new_in(".")?,
        };
        serde_json::to_writer_pretty(&mut file, records)?;
        file.flush()?;
        file.persist(&self.path)?;
        debug!(count = records.len(), "registry saved");
        Ok(())
    }

    /// Whether `user_id` holds a registration record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be loaded.
    pub fn is_registered(&self, user_id: &str) -> Result<bool, StorageError> {
        Ok(self.load()?.contains_key(user_id))
    }

    /// Registers `user_id` under `username`, silently replacing any prior
    /// record, and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be loaded or rewritten.
    pub fn register(
        &self,
        user_id: &str,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<RegistrationRecord, StorageError> {
        let mut records = self.load()?;
        let record = RegistrationRecord::new(username, now);
        records.insert(user_id.to_string(), record.clone());
        self.save(&records)?;
        info!(user_id, username, "user registered");
        Ok(record)
    }
}
