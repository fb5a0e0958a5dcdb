//! Local-storage-backed ordered section collection.
//!
//! # Responsibility
//! - Be the sole source of truth for what the page-assembly surface
//!   renders.
//! - Keep the persisted JSON array in sync with every mutation.
//!
//! # Invariants
//! - `list` returns sections sorted ascending by `order`; ties keep the
//!   persisted insertion order (stable sort).
//! - `id`, `layout`, `schema` and `created_at` are never patchable.
//! - Malformed persisted data falls back to the empty default collection
//!   as a whole; entries are never partially repaired.

use super::{MutationOutcome, StoreResult};
use crate::model::section::{DynamicSection, SectionId, SectionStyling};
use crate::storage::{KeyValueStorage, SECTIONS_KEY};
use log::warn;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Whole-value patch for a section's mutable top-level attributes.
///
/// `None` leaves an attribute untouched. `fields` replaces the value map
/// wholesale, matching the editing surface's save granularity.
#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub name: Option<String>,
    pub fields: Option<BTreeMap<String, Value>>,
    pub styling: Option<SectionStyling>,
    pub is_visible: Option<bool>,
    pub include_in_navigation: Option<bool>,
    /// `Some(None)` clears a previously set navigation label.
    pub navigation_label: Option<Option<String>>,
    pub order: Option<f64>,
}

impl SectionPatch {
    fn apply(self, section: &mut DynamicSection) {
        if let Some(name) = self.name {
            section.name = name;
        }
        if let Some(fields) = self.fields {
            section.fields = fields;
        }
        if let Some(styling) = self.styling {
            section.styling = styling;
        }
        if let Some(is_visible) = self.is_visible {
            section.is_visible = is_visible;
        }
        if let Some(include) = self.include_in_navigation {
            section.include_in_navigation = include;
        }
        if let Some(label) = self.navigation_label {
            section.navigation_label = label;
        }
        if let Some(order) = self.order {
            section.order = order;
        }
    }
}

/// Ordered collection of sections persisted under one storage key.
pub struct SectionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SectionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Gives back the underlying storage handle.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns all sections sorted ascending by `order`.
    ///
    /// A missing key yields the empty collection. Unreadable JSON is logged
    /// and also yields the empty collection; only storage transport errors
    /// surface as `Err`.
    pub fn list(&self) -> StoreResult<Vec<DynamicSection>> {
        let mut sections = self.load()?;
        sections.sort_by(|a, b| a.order.partial_cmp(&b.order).unwrap_or(Ordering::Equal));
        Ok(sections)
    }

    /// Finds one section by id.
    pub fn get(&self, id: SectionId) -> StoreResult<Option<DynamicSection>> {
        Ok(self.load()?.into_iter().find(|section| section.id == id))
    }

    /// Appends a section and persists the collection.
    ///
    /// A section still carrying the factory's `order == 0.0` sentinel is
    /// placed after everything else (`max(order) + 1`); any other value is
    /// respected, which is how duplicates land at `source + 0.5`.
    ///
    /// Returns the stored section including its assigned `order`.
    pub fn add(&mut self, mut section: DynamicSection) -> StoreResult<DynamicSection> {
        let mut sections = self.load()?;
        if section.order == 0.0 {
            let max = sections.iter().map(|s| s.order).fold(0.0_f64, f64::max);
            section.order = max + 1.0;
        }
        sections.push(section.clone());
        self.persist(&sections)?;
        Ok(section)
    }

    /// Applies `patch` to the section with `id` and refreshes `updated_at`.
    pub fn update(&mut self, id: SectionId, patch: SectionPatch) -> StoreResult<MutationOutcome> {
        let mut sections = self.load()?;
        let Some(section) = sections.iter_mut().find(|section| section.id == id) else {
            return Ok(MutationOutcome::NotFound);
        };

        patch.apply(section);
        section.touch();
        self.persist(&sections)?;
        Ok(MutationOutcome::Applied)
    }

    /// Removes the section with `id`; absent ids leave the store untouched.
    pub fn delete(&mut self, id: SectionId) -> StoreResult<MutationOutcome> {
        let mut sections = self.load()?;
        let before = sections.len();
        sections.retain(|section| section.id != id);
        if sections.len() == before {
            return Ok(MutationOutcome::NotFound);
        }

        self.persist(&sections)?;
        Ok(MutationOutcome::Applied)
    }

    /// Reassigns `order` by position for every id in `ids` (1, 2, 3, ...).
    ///
    /// Callers supply the full current id sequence; a two-element swap of
    /// that sequence exchanges exactly those two positions. Idempotent:
    /// reapplying the same sequence changes nothing further. Ids not
    /// present in the store are ignored. Ordinals start at 1 so no stored
    /// section ever holds the `0.0` sentinel `add` treats as "not yet
    /// placed".
    pub fn reorder(&mut self, ids: &[SectionId]) -> StoreResult<()> {
        let mut sections = self.load()?;
        let mut changed = false;

        for section in &mut sections {
            let Some(position) = ids.iter().position(|id| *id == section.id) else {
                continue;
            };
            let target = (position + 1) as f64;
            if section.order != target {
                section.order = target;
                section.touch();
                changed = true;
            }
        }

        if changed {
            self.persist(&sections)?;
        }
        Ok(())
    }

    fn load(&self) -> StoreResult<Vec<DynamicSection>> {
        let Some(raw) = self.storage.get(SECTIONS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(sections) => Ok(sections),
            Err(err) => {
                warn!(
                    "event=sections_load module=store status=fallback error={err} raw_len={}",
                    raw.len()
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&mut self, sections: &[DynamicSection]) -> StoreResult<()> {
        let raw = serde_json::to_string(sections)?;
        self.storage.set(SECTIONS_KEY, &raw)?;
        Ok(())
    }
}
