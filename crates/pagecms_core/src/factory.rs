//! Section construction from templates.
//!
//! # Responsibility
//! - Build new `DynamicSection` instances from a template plus a name.
//! - Build duplicates that land directly after their source section.
//!
//! # Invariants
//! - Every constructed section carries a freshly generated random id.
//! - `fields` holds one entry per schema field after construction.
//! - Constructed sections use `order = 0.0` as a "not yet placed" sentinel;
//!   the store assigns the real position on `add`.

use crate::model::section::{
    now_epoch_ms, DynamicSection, Padding, SectionLayout, SectionStyling, TextColor,
};
use crate::model::template::SectionTemplate;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Builds a new section from `template`, named `name`.
///
/// Every schema field gets an initial value: the spec's default when one is
/// declared, an empty string otherwise. Always succeeds; name emptiness is
/// enforced by the editing surface, not here.
pub fn create_section(template: &SectionTemplate, name: impl Into<String>) -> DynamicSection {
    let now = now_epoch_ms();
    let mut fields = BTreeMap::new();
    for spec in &template.default_fields {
        let value = spec
            .default_value
            .clone()
            .unwrap_or_else(|| Value::String(String::new()));
        fields.insert(spec.name.clone(), value);
    }

    DynamicSection {
        id: Uuid::new_v4(),
        name: name.into(),
        layout: template.layout,
        order: 0.0,
        is_visible: true,
        include_in_navigation: false,
        navigation_label: None,
        fields,
        schema: template.default_fields.clone(),
        styling: default_styling(template.layout),
        created_at: now,
        updated_at: now,
    }
}

/// Builds an independent copy of `source`.
///
/// The duplicate gets a fresh id, a `" (Copy)"` name suffix, fresh
/// timestamps, and `order = source.order + 0.5` so the store places it
/// immediately after the source without touching any other ordinal.
/// Fields, schema and styling are owned clones; later edits to the
/// duplicate never reach the source.
pub fn duplicate_section(source: &DynamicSection) -> DynamicSection {
    let now = now_epoch_ms();
    DynamicSection {
        id: Uuid::new_v4(),
        name: format!("{} (Copy)", source.name),
        order: source.order + 0.5,
        created_at: now,
        updated_at: now,
        ..source.clone()
    }
}

/// Layout-specific default styling for newly created sections.
pub fn default_styling(layout: SectionLayout) -> SectionStyling {
    match layout {
        SectionLayout::Hero => SectionStyling {
            background_color: "gradient-dark".to_string(),
            background_image: Some("/bg.jpg".to_string()),
            image_opacity: 40,
            enable_parallax: true,
            text_color: TextColor::Light,
            padding: Padding::Large,
        },
        SectionLayout::Bento => SectionStyling {
            background_color: "gray-900".to_string(),
            background_image: None,
            image_opacity: 20,
            enable_parallax: false,
            text_color: TextColor::Light,
            padding: Padding::Large,
        },
        SectionLayout::Grid => SectionStyling {
            background_color: "gray-50".to_string(),
            background_image: None,
            image_opacity: 100,
            enable_parallax: false,
            text_color: TextColor::Auto,
            padding: Padding::Large,
        },
        SectionLayout::Columns => SectionStyling {
            background_color: "white".to_string(),
            background_image: None,
            image_opacity: 100,
            enable_parallax: false,
            text_color: TextColor::Auto,
            padding: Padding::Large,
        },
        SectionLayout::Unknown => SectionStyling {
            background_color: "white".to_string(),
            background_image: None,
            image_opacity: 100,
            enable_parallax: false,
            text_color: TextColor::Auto,
            padding: Padding::Medium,
        },
    }
}
