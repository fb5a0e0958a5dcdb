//! Site configuration store.
//!
//! # Responsibility
//! - Persist the palette configuration under its own storage key.
//! - Support palette curation: adding and removing custom colors.

use super::StoreResult;
use crate::model::section::now_epoch_ms;
use crate::model::site_config::{SiteColor, SiteConfig};
use crate::storage::{KeyValueStorage, SITE_CONFIG_KEY};
use log::warn;

/// Which palette a color operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Brand,
    Background,
}

/// Persisted `SiteConfig` with default fallback semantics.
pub struct SiteConfigStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SiteConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the configuration; missing or unreadable state yields the
    /// in-code default (logged), never an error.
    pub fn load(&self) -> StoreResult<SiteConfig> {
        let Some(raw) = self.storage.get(SITE_CONFIG_KEY)? else {
            return Ok(SiteConfig::default());
        };

        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("event=site_config_load module=store status=fallback error={err}");
                Ok(SiteConfig::default())
            }
        }
    }

    /// Persists `config`, refreshing its `updated_at` stamp.
    pub fn save(&mut self, mut config: SiteConfig) -> StoreResult<SiteConfig> {
        config.updated_at = now_epoch_ms().max(config.updated_at + 1);
        let raw = serde_json::to_string(&config)?;
        self.storage.set(SITE_CONFIG_KEY, &raw)?;
        Ok(config)
    }

    /// Appends a custom color to the selected palette.
    pub fn add_color(&mut self, color: SiteColor, kind: ColorKind) -> StoreResult<SiteConfig> {
        let mut config = self.load()?;
        match kind {
            ColorKind::Brand => config.brand_colors.push(color),
            ColorKind::Background => config.background_colors.push(color),
        }
        self.save(config)
    }

    /// Removes a color by token id from the selected palette.
    pub fn remove_color(&mut self, color_id: &str, kind: ColorKind) -> StoreResult<SiteConfig> {
        let mut config = self.load()?;
        let palette = match kind {
            ColorKind::Brand => &mut config.brand_colors,
            ColorKind::Background => &mut config.background_colors,
        };
        palette.retain(|color| color.id != color_id);
        self.save(config)
    }

    pub fn background_colors(&self) -> StoreResult<Vec<SiteColor>> {
        Ok(self.load()?.background_colors)
    }

    pub fn brand_colors(&self) -> StoreResult<Vec<SiteColor>> {
        Ok(self.load()?.brand_colors)
    }

    /// Drops the persisted configuration, reverting to defaults.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.storage.remove(SITE_CONFIG_KEY)?;
        Ok(())
    }
}
