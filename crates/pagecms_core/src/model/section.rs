//! Section record model.
//!
//! # Responsibility
//! - Define the mutable unit of page content (`DynamicSection`) and the
//!   schema/styling shapes it carries.
//! - Keep the serialized form byte-compatible with the persisted JSON
//!   layout (camelCase keys, one array under one storage key).
//!
//! # Invariants
//! - `id` is stable and never reused for another section.
//! - `schema` is a per-instance snapshot of the template's field specs.
//! - `updated_at` strictly increases on every mutation, even when two
//!   mutations land in the same millisecond.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a section.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SectionId = Uuid;

/// Layout tag selecting which renderer presents a section.
///
/// `Unknown` absorbs layout tags written by newer versions (or corrupted
/// data) so one bad record cannot poison the whole persisted collection;
/// dispatch renders a visible placeholder for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    /// Full-width hero with title, description and CTAs.
    Hero,
    /// Bento box layout with mixed-size cards.
    Bento,
    /// Evenly spaced feature grid.
    Grid,
    /// Two-column text + media layout.
    Columns,
    /// Unrecognized layout tag from persisted data.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for SectionLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Hero => "hero",
            Self::Bento => "bento",
            Self::Grid => "grid",
            Self::Columns => "columns",
            Self::Unknown => "unknown",
        };
        f.write_str(tag)
    }
}

/// Editor input kind for one section field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea,
    RichText,
    Image,
    Link,
    Select,
    Boolean,
    List,
}

/// Declaration of one editable field within a section template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Unique key within the owning template.
    pub name: String,
    /// Human-readable label shown by the editor and used in error text.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Choice list, meaningful only for `FieldType::Select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

/// Text color mode for a rendered section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Vertical padding size for a rendered section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

fn full_opacity() -> u8 {
    100
}

/// Visual styling configuration carried by every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyling {
    /// Palette token resolved against `SiteConfig::background_colors`.
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Background image opacity, 0-100.
    #[serde(default = "full_opacity")]
    pub image_opacity: u8,
    #[serde(default)]
    pub enable_parallax: bool,
    #[serde(default)]
    pub text_color: TextColor,
    #[serde(default)]
    pub padding: Padding,
}

/// The mutable unit of page content.
///
/// Field values live in `fields`, keyed by the `FieldSpec::name` entries of
/// `schema`. `schema` is copied from the template at creation time and is
/// never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicSection {
    pub id: SectionId,
    pub name: String,
    pub layout: SectionLayout,
    /// Render position, ascending. Fractional values support insertion
    /// between neighbors (duplication uses `source.order + 0.5`).
    pub order: f64,
    pub is_visible: bool,
    pub include_in_navigation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_label: Option<String>,
    pub fields: BTreeMap<String, Value>,
    pub schema: Vec<FieldSpec>,
    pub styling: SectionStyling,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds, strictly increasing per mutation.
    pub updated_at: i64,
}

impl DynamicSection {
    /// Refreshes `updated_at`.
    ///
    /// Guarded so two mutations within the same millisecond still produce
    /// strictly increasing timestamps.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms().max(self.updated_at + 1);
    }

    /// Label used when this section appears in page navigation.
    pub fn nav_label(&self) -> &str {
        self.navigation_label.as_deref().unwrap_or(&self.name)
    }

    /// In-page anchor id for navigation targets.
    pub fn anchor(&self) -> String {
        format!("section-{}", self.id)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trips_and_absorbs_unknown_tags() {
        let json = serde_json::to_value(SectionLayout::Hero).unwrap();
        assert_eq!(json, "hero");

        let future: SectionLayout = serde_json::from_value("carousel".into()).unwrap();
        assert_eq!(future, SectionLayout::Unknown);
    }

    #[test]
    fn field_type_uses_kebab_case_tags() {
        let json = serde_json::to_value(FieldType::RichText).unwrap();
        assert_eq!(json, "rich-text");
    }

    #[test]
    fn touch_strictly_increases_updated_at() {
        let mut section = crate::factory::create_section(
            crate::model::template::template_for(SectionLayout::Hero).unwrap(),
            "hero",
        );
        let first = section.updated_at;
        section.touch();
        let second = section.updated_at;
        section.touch();
        assert!(first < second);
        assert!(second < section.updated_at);
    }

    #[test]
    fn nav_label_falls_back_to_name() {
        let mut section = crate::factory::create_section(
            crate::model::template::template_for(SectionLayout::Grid).unwrap(),
            "Features",
        );
        assert_eq!(section.nav_label(), "Features");
        section.navigation_label = Some("Why us".to_string());
        assert_eq!(section.nav_label(), "Why us");
    }
}
