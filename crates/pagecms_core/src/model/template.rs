//! Section template registry.
//!
//! # Responsibility
//! - Define the fixed catalog of section layouts the editor can create.
//! - Provide the authoritative field schema and default values per layout.
//!
//! # Invariants
//! - The registry is immutable after process start and holds exactly four
//!   templates: hero, bento, grid, columns.
//! - Sections snapshot their schema at creation; registry data is never
//!   read again for an existing section.

use crate::model::section::{FieldSpec, FieldType, SectionLayout};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Static description of one creatable section layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTemplate {
    pub layout: SectionLayout,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon hint for the editor's template picker.
    pub icon: &'static str,
    pub default_fields: Vec<FieldSpec>,
}

static TEMPLATES: Lazy<Vec<SectionTemplate>> = Lazy::new(|| {
    vec![
        SectionTemplate {
            layout: SectionLayout::Hero,
            name: "Hero Section",
            description: "Full-width hero section with title, description, and CTAs",
            icon: "Layout",
            default_fields: vec![
                field("badge", "Badge Text", FieldType::Text)
                    .placeholder("e.g., New Feature"),
                field("title", "Main Title", FieldType::Text).required(),
                field("subtitle", "Subtitle", FieldType::Text),
                field("description", "Description", FieldType::Textarea).required(),
                field("primaryCta", "Primary CTA Text", FieldType::Text),
                field("primaryCtaLink", "Primary CTA Link", FieldType::Link),
                field("secondaryCta", "Secondary CTA Text", FieldType::Text),
                field("secondaryCtaLink", "Secondary CTA Link", FieldType::Link),
                field("backgroundImage", "Background Image", FieldType::Image),
            ],
        },
        SectionTemplate {
            layout: SectionLayout::Bento,
            name: "Bento Grid",
            description: "Modern bento box layout with mixed-size cards",
            icon: "Grid3x3",
            default_fields: vec![
                field("title", "Section Title", FieldType::Text).required(),
                field("subtitle", "Section Subtitle", FieldType::Text),
                field("cards", "Bento Cards", FieldType::List).default_value(json!([
                    {
                        "size": "large",
                        "title": "",
                        "description": "",
                        "icon": "",
                        "color": "blue",
                        "image": ""
                    }
                ])),
            ],
        },
        SectionTemplate {
            layout: SectionLayout::Grid,
            name: "Feature Grid",
            description: "Evenly spaced grid layout for features or services",
            icon: "LayoutGrid",
            default_fields: vec![
                field("title", "Section Title", FieldType::Text).required(),
                field("subtitle", "Section Subtitle", FieldType::Text),
                field("description", "Section Description", FieldType::Textarea),
                field("columns", "Columns per Row", FieldType::Select)
                    .options(&["2", "3", "4"])
                    .default_value(json!("3")),
                field("items", "Grid Items", FieldType::List).default_value(json!([
                    {
                        "icon": "",
                        "title": "",
                        "description": "",
                        "link": ""
                    }
                ])),
            ],
        },
        SectionTemplate {
            layout: SectionLayout::Columns,
            name: "Two Column Layout",
            description: "Side-by-side layout with text and media",
            icon: "Columns",
            default_fields: vec![
                field("title", "Section Title", FieldType::Text).required(),
                field("subtitle", "Section Subtitle", FieldType::Text),
                field("layout", "Layout Direction", FieldType::Select)
                    .options(&["text-left", "text-right"])
                    .default_value(json!("text-left")),
                field("content", "Main Content", FieldType::RichText).required(),
                field("image", "Featured Image", FieldType::Image),
                field("imageAlt", "Image Alt Text", FieldType::Text),
                field("ctaText", "CTA Button Text", FieldType::Text),
                field("ctaLink", "CTA Button Link", FieldType::Link),
                field("features", "Feature List", FieldType::List).default_value(json!([])),
            ],
        },
    ]
});

/// Returns the full template catalog in presentation order.
pub fn templates() -> &'static [SectionTemplate] {
    &TEMPLATES
}

/// Looks up the template for a layout tag.
///
/// Returns `None` for `SectionLayout::Unknown`; no template can create it.
pub fn template_for(layout: SectionLayout) -> Option<&'static SectionTemplate> {
    TEMPLATES.iter().find(|template| template.layout == layout)
}

fn field(name: &str, label: &str, field_type: FieldType) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        label: label.to_string(),
        field_type,
        placeholder: None,
        required: false,
        options: None,
        default_value: None,
    }
}

impl FieldSpec {
    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    fn options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|option| option.to_string()).collect());
        self
    }

    fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}
