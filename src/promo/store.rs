//! Persistence for the promo expiry timestamp.

use super::PromoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Load/save the single persisted promo expiry.
pub trait ExpiryStore: Debug {
    /// Stored expiry, or `None` if nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `PromoError` when the backing storage exists but cannot be read.
    fn load(&self) -> Result<Option<DateTime<Utc>>, PromoError>;

    /// Persist a new expiry, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `PromoError` when the backing storage cannot be written.
    fn save(&mut self, expires_at: DateTime<Utc>) -> Result<(), PromoError>;
}

/// On-disk representation.
#[derive(Debug, Serialize, Deserialize)]
struct StoredExpiry {
    expires_at: DateTime<Utc>,
}

/// Expiry stored as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileExpiryStore {
    path: PathBuf,
}

impl FileExpiryStore {
    /// Store backed by `path`. Nothing is touched until load/save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpiryStore for FileExpiryStore {
    fn load(&self) -> Result<Option<DateTime<Utc>>, PromoError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PromoError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // Corrupt contents are treated like a missing value: a fresh expiry gets written.
        match serde_json::from_str::<StoredExpiry>(&contents) {
            Ok(stored) => Ok(Some(stored.expires_at)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable promo state");
                Ok(None)
            }
        }
    }

    fn save(&mut self, expires_at: DateTime<Utc>) -> Result<(), PromoError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PromoError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let json = serde_json::to_string(&StoredExpiry { expires_at })?;
        std::fs::write(&self.path, json).map_err(|source| PromoError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Expiry held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryExpiryStore {
    value: Option<DateTime<Utc>>,
}

impl MemoryExpiryStore {
    /// Store pre-seeded with `value`.
    pub fn with_value(value: DateTime<Utc>) -> Self {
        Self { value: Some(value) }
    }

    /// Currently stored value.
    pub fn value(&self) -> Option<DateTime<Utc>> {
        self.value
    }
}

impl ExpiryStore for MemoryExpiryStore {
    fn load(&self) -> Result<Option<DateTime<Utc>>, PromoError> {
        Ok(self.value)
    }

    fn save(&mut self, expires_at: DateTime<Utc>) -> Result<(), PromoError> {
        self.value = Some(expires_at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn missing_file_loads_none() {
        let store = FileExpiryStore::new("/nonexistent/loopreel/promo.json");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_returns_same_instant() {
        let dir = std::env::temp_dir().join("loopreel_promo_store_roundtrip");
        let _ = fs::remove_dir_all(&dir);
        let mut store = FileExpiryStore::new(dir.join("nested").join("promo.json"));

        store.save(instant()).unwrap();
        let loaded = store.load().unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(loaded, Some(instant()));
    }

    #[test]
    fn corrupt_file_loads_none() {
        let path = std::env::temp_dir().join("loopreel_promo_store_corrupt.json");
        fs::write(&path, "not-a-timestamp").unwrap();
        let store = FileExpiryStore::new(&path);
        let loaded = store.load().unwrap();
        let _ = fs::remove_file(&path);
        assert!(loaded.is_none());
    }

    #[test]
    fn memory_store_keeps_last_value() {
        let mut store = MemoryExpiryStore::default();
        assert!(store.load().unwrap().is_none());
        store.save(instant()).unwrap();
        assert_eq!(store.value(), Some(instant()));
    }
}
