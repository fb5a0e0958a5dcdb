//! Persistent stores over the key/value boundary.
//!
//! # Responsibility
//! - Own the two persisted JSON blobs: the section array and the site
//!   configuration.
//! - Translate unreadable persisted state into logged default fallbacks
//!   instead of errors.
//!
//! # Invariants
//! - Every mutation serializes the whole owning blob back immediately.
//! - Reads never cache; each call deserializes the current persisted value.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod config_store;
pub mod section_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure: transport or serialization.
///
/// Deserialization failures of persisted blobs are deliberately *not*
/// represented here; they degrade to defaults (see the store docs).
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize store state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Result of a by-id mutation.
///
/// A missing id is an expected outcome (stale reference, concurrent
/// writer), not an error; callers decide whether to log or ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MutationOutcome {
    Applied,
    NotFound,
}
