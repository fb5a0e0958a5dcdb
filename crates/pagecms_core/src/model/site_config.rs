//! Site configuration model and stock palette.
//!
//! # Responsibility
//! - Define the palette shape styling tokens resolve against.
//! - Provide the in-code default configuration used whenever the persisted
//!   config is missing or unreadable.

use serde::{Deserialize, Serialize};

/// One named palette entry.
///
/// `hex` holds either a hex color or a full CSS `linear-gradient(...)`
/// value for gradient tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteColor {
    pub id: String,
    pub name: String,
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SiteColor {
    pub fn new(id: &str, name: &str, hex: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hex: hex.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Site-wide configuration: identity strings plus the two palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub id: String,
    pub site_name: String,
    pub site_description: String,
    pub brand_colors: Vec<SiteColor>,
    pub background_colors: Vec<SiteColor>,
    /// Unix epoch milliseconds of the last save; 0 until first saved.
    pub updated_at: i64,
}

impl SiteConfig {
    /// Finds a background palette entry by token id.
    pub fn background_color(&self, id: &str) -> Option<&SiteColor> {
        self.background_colors.iter().find(|color| color.id == id)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            id: "site-config-1".to_string(),
            site_name: "My Site".to_string(),
            site_description: "Marketing landing page".to_string(),
            brand_colors: vec![
                SiteColor::new("primary", "Primary Blue", "#2563eb", "Main brand color"),
                SiteColor::new("secondary", "Secondary Blue", "#1d4ed8", "Secondary brand color"),
                SiteColor::new("accent", "Accent Green", "#10b981", "Accent color"),
                SiteColor::new("warning", "Warning Orange", "#f59e0b", "Warning/alert color"),
                SiteColor::new("success", "Success Green", "#059669", "Success color"),
                SiteColor::new("error", "Error Red", "#dc2626", "Error color"),
            ],
            background_colors: vec![
                SiteColor::new("white", "Pure White", "#ffffff", "Clean white background"),
                SiteColor::new("gray-50", "Light Gray", "#f9fafb", "Very light gray"),
                SiteColor::new("gray-100", "Soft Gray", "#f3f4f6", "Soft gray background"),
                SiteColor::new("gray-900", "Dark Gray", "#111827", "Dark background"),
                SiteColor::new("black", "Pure Black", "#000000", "Deep black background"),
                SiteColor::new("blue-900", "Dark Blue", "#1e3a8a", "Dark blue background"),
                SiteColor::new("purple-900", "Dark Purple", "#581c87", "Dark purple background"),
                SiteColor::new("green-900", "Dark Green", "#14532d", "Dark green background"),
                SiteColor::new(
                    "gradient-blue",
                    "Blue Gradient",
                    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
                    "Blue to purple gradient",
                ),
                SiteColor::new(
                    "gradient-sunset",
                    "Sunset Gradient",
                    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
                    "Pink to red gradient",
                ),
                SiteColor::new(
                    "gradient-ocean",
                    "Ocean Gradient",
                    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
                    "Ocean blue gradient",
                ),
                SiteColor::new(
                    "gradient-dark",
                    "Dark Gradient",
                    "linear-gradient(135deg, #232526 0%, #414345 100%)",
                    "Dark gradient",
                ),
            ],
            updated_at: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_covers_factory_tokens() {
        let config = SiteConfig::default();
        for token in ["white", "gray-50", "gray-900", "gradient-dark"] {
            assert!(config.background_color(token).is_some(), "missing {token}");
        }
    }

    #[test]
    fn gradient_tokens_carry_css_gradients() {
        let config = SiteConfig::default();
        let gradient = config.background_color("gradient-dark").unwrap();
        assert!(gradient.hex.starts_with("linear-gradient("));
    }
}
