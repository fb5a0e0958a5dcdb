//! Section management service.
//!
//! # Responsibility
//! - Provide the operations the management surface performs: create,
//!   edit, duplicate, hide, delete, reorder.
//! - Gate every field edit behind schema validation before it persists.
//!
//! # Invariants
//! - Invalid field values never reach the store.
//! - Duplicates keep their `source.order + 0.5` placement through `add`.

use crate::factory;
use crate::model::section::{DynamicSection, SectionId, SectionLayout, SectionStyling};
use crate::model::template;
use crate::store::section_store::{SectionPatch, SectionStore};
use crate::store::{MutationOutcome, StoreError};
use crate::storage::KeyValueStorage;
use crate::validate::validate_section;
use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from section management operations.
#[derive(Debug)]
pub enum ServiceError {
    /// No template exists for the requested layout.
    TemplateNotFound(SectionLayout),
    /// Target section does not exist.
    SectionNotFound(SectionId),
    /// Field values failed schema validation; nothing was persisted.
    ValidationFailed(Vec<String>),
    /// Swap position outside the current section count.
    InvalidPosition { index: usize, len: usize },
    /// Store-level failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(layout) => write!(f, "no template for layout: {layout}"),
            Self::SectionNotFound(id) => write!(f, "section not found: {id}"),
            Self::ValidationFailed(errors) => {
                write!(f, "section validation failed: {}", errors.join("; "))
            }
            Self::InvalidPosition { index, len } => {
                write!(f, "position {index} out of range for {len} sections")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case facade over one `SectionStore`.
pub struct SectionService<S: KeyValueStorage> {
    store: SectionStore<S>,
}

impl<S: KeyValueStorage> SectionService<S> {
    pub fn new(store: SectionStore<S>) -> Self {
        Self { store }
    }

    /// Lists sections in render order.
    pub fn list(&self) -> Result<Vec<DynamicSection>, ServiceError> {
        Ok(self.store.list()?)
    }

    /// Creates a section of `layout` named `name` and places it last.
    pub fn create(
        &mut self,
        layout: SectionLayout,
        name: impl Into<String>,
    ) -> Result<DynamicSection, ServiceError> {
        let template =
            template::template_for(layout).ok_or(ServiceError::TemplateNotFound(layout))?;
        let section = self.store.add(factory::create_section(template, name))?;
        info!(
            "event=section_created module=service status=ok layout={} id={}",
            section.layout, section.id
        );
        Ok(section)
    }

    /// Duplicates the section with `id`, placing the copy right after it.
    pub fn duplicate(&mut self, id: SectionId) -> Result<DynamicSection, ServiceError> {
        let source = self
            .store
            .get(id)?
            .ok_or(ServiceError::SectionNotFound(id))?;
        let copy = self.store.add(factory::duplicate_section(&source))?;
        info!(
            "event=section_duplicated module=service status=ok source={id} copy={}",
            copy.id
        );
        Ok(copy)
    }

    /// Replaces a section's field values after validating them against the
    /// section's schema snapshot. Invalid input is rejected wholesale.
    pub fn update_fields(
        &mut self,
        id: SectionId,
        fields: BTreeMap<String, Value>,
    ) -> Result<(), ServiceError> {
        let mut candidate = self
            .store
            .get(id)?
            .ok_or(ServiceError::SectionNotFound(id))?;
        candidate.fields = fields;

        let report = validate_section(&candidate);
        if !report.is_valid {
            warn!(
                "event=section_update module=service status=rejected id={id} errors={}",
                report.errors.len()
            );
            return Err(ServiceError::ValidationFailed(report.errors));
        }

        self.apply(
            id,
            SectionPatch {
                fields: Some(candidate.fields),
                ..SectionPatch::default()
            },
        )
    }

    pub fn rename(&mut self, id: SectionId, name: impl Into<String>) -> Result<(), ServiceError> {
        self.apply(
            id,
            SectionPatch {
                name: Some(name.into()),
                ..SectionPatch::default()
            },
        )
    }

    /// Flips visibility; returns the new state.
    pub fn toggle_visibility(&mut self, id: SectionId) -> Result<bool, ServiceError> {
        let section = self
            .store
            .get(id)?
            .ok_or(ServiceError::SectionNotFound(id))?;
        let next = !section.is_visible;
        self.apply(
            id,
            SectionPatch {
                is_visible: Some(next),
                ..SectionPatch::default()
            },
        )?;
        Ok(next)
    }

    /// Sets navigation participation and (optionally) a custom label.
    pub fn set_navigation(
        &mut self,
        id: SectionId,
        include: bool,
        label: Option<String>,
    ) -> Result<(), ServiceError> {
        self.apply(
            id,
            SectionPatch {
                include_in_navigation: Some(include),
                navigation_label: Some(label),
                ..SectionPatch::default()
            },
        )
    }

    /// Replaces a section's styling configuration. Styling is presentation
    /// only and bypasses field validation by design.
    pub fn update_styling(
        &mut self,
        id: SectionId,
        styling: SectionStyling,
    ) -> Result<(), ServiceError> {
        self.apply(
            id,
            SectionPatch {
                styling: Some(styling),
                ..SectionPatch::default()
            },
        )
    }

    /// Deletes a section. A stale id reports `NotFound` without failing.
    pub fn delete(&mut self, id: SectionId) -> Result<MutationOutcome, ServiceError> {
        let outcome = self.store.delete(id)?;
        if outcome == MutationOutcome::Applied {
            info!("event=section_deleted module=service status=ok id={id}");
        }
        Ok(outcome)
    }

    /// Reassigns order from a full id sequence.
    pub fn reorder(&mut self, ids: &[SectionId]) -> Result<(), ServiceError> {
        Ok(self.store.reorder(ids)?)
    }

    /// Swaps the sections at two render positions.
    ///
    /// Stand-in for drag-and-drop: builds the current id sequence, swaps
    /// the two indexes, and reorders.
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), ServiceError> {
        let mut ids: Vec<SectionId> = self
            .store
            .list()?
            .iter()
            .map(|section| section.id)
            .collect();
        let len = ids.len();
        for index in [from, to] {
            if index >= len {
                return Err(ServiceError::InvalidPosition { index, len });
            }
        }
        ids.swap(from, to);
        self.reorder(&ids)
    }

    fn apply(&mut self, id: SectionId, patch: SectionPatch) -> Result<(), ServiceError> {
        match self.store.update(id, patch)? {
            MutationOutcome::Applied => Ok(()),
            MutationOutcome::NotFound => Err(ServiceError::SectionNotFound(id)),
        }
    }
}
