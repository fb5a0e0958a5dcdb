//! Content core for a section-based landing page.
//! This crate is the single source of truth for section CRUD invariants.

pub mod factory;
pub mod leads;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod storage;
pub mod store;
pub mod theme;
pub mod validate;

pub use factory::{create_section, default_styling, duplicate_section};
pub use leads::{validate_lead, LeadCaptureBackend, LeadCaptureError, LeadRequest, LeadResponse};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::section::{
    DynamicSection, FieldSpec, FieldType, Padding, SectionId, SectionLayout, SectionStyling,
    TextColor,
};
pub use model::site_config::{SiteColor, SiteConfig};
pub use model::template::{template_for, templates, SectionTemplate};
pub use render::{navigation_items, render_page, render_section, NavItem, ResolvedStyling};
pub use service::section_service::{SectionService, ServiceError};
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, SECTIONS_KEY, SITE_CONFIG_KEY,
    THEME_KEY,
};
pub use store::config_store::{ColorKind, SiteConfigStore};
pub use store::section_store::{SectionPatch, SectionStore};
pub use store::{MutationOutcome, StoreError};
pub use theme::{load_theme, save_theme, Theme, ThemeMode};
pub use validate::{validate_section, ValidationReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
