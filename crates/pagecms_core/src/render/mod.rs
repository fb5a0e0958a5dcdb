//! Section rendering: layout dispatch, styling resolution, navigation.
//!
//! # Responsibility
//! - Map each section's layout tag to the renderer presenting it.
//! - Assemble the full page and its navigation from the stored sections.
//!
//! # Invariants
//! - Dispatch is total: unrecognized layouts render a visible placeholder
//!   instead of failing.
//! - The theme is passed in explicitly at every call; rendering reads no
//!   ambient state.

use crate::model::section::{DynamicSection, SectionLayout};
use crate::model::site_config::SiteConfig;
use crate::theme::Theme;

mod sections;
pub mod styling;

pub use styling::{resolve, ResolvedStyling};

/// One entry in the page header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    /// In-page anchor, `#` included.
    pub anchor: String,
}

/// Renders one section to an HTML fragment.
pub fn render_section(section: &DynamicSection, config: &SiteConfig, theme: &Theme) -> String {
    let resolved = styling::resolve(&section.styling, config, theme);
    match section.layout {
        SectionLayout::Hero => sections::render_hero(section, &resolved),
        SectionLayout::Bento => sections::render_bento(section, &resolved),
        SectionLayout::Grid => sections::render_grid(section, &resolved),
        SectionLayout::Columns => sections::render_columns(section, &resolved),
        SectionLayout::Unknown => sections::render_placeholder(section, &resolved),
    }
}

/// Renders the visible sections, in order, as one page body.
///
/// Callers pass sections as returned by `SectionStore::list`; hidden
/// sections are skipped here, not deleted.
pub fn render_page(sections: &[DynamicSection], config: &SiteConfig, theme: &Theme) -> String {
    sections
        .iter()
        .filter(|section| section.is_visible)
        .map(|section| render_section(section, config, theme))
        .collect()
}

/// Derives header navigation from the stored sections.
///
/// Only visible sections that opted into navigation appear; the label
/// falls back from `navigation_label` to the section name.
pub fn navigation_items(sections: &[DynamicSection]) -> Vec<NavItem> {
    sections
        .iter()
        .filter(|section| section.is_visible && section.include_in_navigation)
        .map(|section| NavItem {
            label: section.nav_label().to_string(),
            anchor: format!("#{}", section.anchor()),
        })
        .collect()
}
