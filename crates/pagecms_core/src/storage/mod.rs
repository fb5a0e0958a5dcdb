//! Key/value persistence boundary.
//!
//! # Responsibility
//! - Define the storage contract the stores depend on: string keys mapped
//!   to opaque string values, the browser-local-storage shape.
//! - Keep SQLite details inside the persistence boundary.
//!
//! # Invariants
//! - Stores only ever touch the well-known keys declared here.
//! - `get`/`set`/`remove` complete synchronously before returning.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key holding the JSON-serialized ordered section array.
pub const SECTIONS_KEY: &str = "pagecms-dynamic-sections";
/// Key holding the JSON-serialized site configuration.
pub const SITE_CONFIG_KEY: &str = "pagecms-site-config";
/// Key holding the persisted theme preference.
pub const THEME_KEY: &str = "pagecms-theme";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string key/value storage.
///
/// Mirrors the `localStorage` surface the persisted state layout was
/// designed for: one value per key, whole-value replacement on write.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}
