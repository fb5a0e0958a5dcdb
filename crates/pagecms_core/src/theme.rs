//! Explicit theme configuration.
//!
//! # Responsibility
//! - Carry the light/dark mode as a plain value threaded through rendering
//!   calls; there is no ambient/global theme state.
//! - Persist the operator's preference under its own storage key.
//!
//! # Invariants
//! - A missing or unreadable preference defaults to light mode.

use crate::storage::{KeyValueStorage, StorageResult, THEME_KEY};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme configuration passed explicitly to every consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}

/// Loads the persisted theme preference, defaulting to light.
pub fn load_theme<S: KeyValueStorage>(storage: &S) -> StorageResult<Theme> {
    let Some(raw) = storage.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };

    match serde_json::from_str(&raw) {
        Ok(mode) => Ok(Theme::new(mode)),
        Err(err) => {
            warn!("event=theme_load module=theme status=fallback error={err}");
            Ok(Theme::default())
        }
    }
}

/// Persists `mode` as the active theme preference.
pub fn save_theme<S: KeyValueStorage>(storage: &mut S, mode: ThemeMode) -> StorageResult<Theme> {
    // serde_json never fails on a unit enum variant.
    let raw = serde_json::to_string(&mode).unwrap_or_else(|_| "\"light\"".to_string());
    storage.set(THEME_KEY, &raw)?;
    Ok(Theme::new(mode))
}
