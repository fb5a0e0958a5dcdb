//! Domain model for section-based page content.
//!
//! # Responsibility
//! - Define the canonical section record, its field schema and styling.
//! - Hold the static section template registry and the site palette config.
//!
//! # Invariants
//! - Every section is identified by a stable `SectionId`.
//! - A section's `schema` is a creation-time snapshot; registry edits never
//!   rewrite existing sections.

pub mod section;
pub mod site_config;
pub mod template;
