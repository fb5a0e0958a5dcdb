//! Styling resolution: styling config -> concrete presentation values.
//!
//! # Responsibility
//! - Turn palette tokens, padding sizes and text-color modes into CSS the
//!   renderers can emit directly.
//!
//! # Invariants
//! - Resolution never fails: an unknown palette token degrades to a white
//!   background (logged at debug), `auto` text color resolves through the
//!   injected theme.

use crate::model::section::{Padding, SectionStyling, TextColor};
use crate::model::site_config::SiteConfig;
use crate::theme::Theme;
use log::debug;

const FALLBACK_BACKGROUND: &str = "#ffffff";
const LIGHT_TEXT: &str = "#f9fafb";
const DARK_TEXT: &str = "#111827";

/// Concrete presentation values for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyling {
    /// CSS background value: hex color or `linear-gradient(...)`.
    pub background_css: String,
    pub background_image: Option<String>,
    /// 0-100, applied to the background image layer.
    pub image_opacity: u8,
    pub enable_parallax: bool,
    /// CSS text color after `auto` resolution.
    pub text_css: &'static str,
    pub padding_css: &'static str,
}

impl ResolvedStyling {
    /// Inline style string for the section container element.
    pub fn container_style(&self) -> String {
        format!(
            "background: {}; color: {}; padding: {};",
            self.background_css, self.text_css, self.padding_css
        )
    }
}

/// Resolves `styling` against the site palette and the injected theme.
pub fn resolve(styling: &SectionStyling, config: &SiteConfig, theme: &Theme) -> ResolvedStyling {
    let background_css = match config.background_color(&styling.background_color) {
        Some(color) => color.hex.clone(),
        None => {
            debug!(
                "event=styling_resolve module=render status=fallback token={}",
                styling.background_color
            );
            FALLBACK_BACKGROUND.to_string()
        }
    };

    let text_css = match styling.text_color {
        TextColor::Light => LIGHT_TEXT,
        TextColor::Dark => DARK_TEXT,
        TextColor::Auto => {
            if theme.is_dark() {
                LIGHT_TEXT
            } else {
                DARK_TEXT
            }
        }
    };

    ResolvedStyling {
        background_css,
        background_image: styling.background_image.clone(),
        image_opacity: styling.image_opacity.min(100),
        enable_parallax: styling.enable_parallax && styling.background_image.is_some(),
        text_css,
        padding_css: padding_css(styling.padding),
    }
}

fn padding_css(padding: Padding) -> &'static str {
    match padding {
        Padding::None => "0",
        Padding::Small => "2rem 0",
        Padding::Medium => "4rem 0",
        Padding::Large => "6rem 0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::default_styling;
    use crate::model::section::SectionLayout;
    use crate::theme::{Theme, ThemeMode};

    #[test]
    fn hero_styling_resolves_to_gradient_with_parallax() {
        let config = SiteConfig::default();
        let resolved = resolve(
            &default_styling(SectionLayout::Hero),
            &config,
            &Theme::default(),
        );

        assert!(resolved.background_css.starts_with("linear-gradient("));
        assert!(resolved.enable_parallax);
        assert_eq!(resolved.image_opacity, 40);
        assert_eq!(resolved.text_css, LIGHT_TEXT);
    }

    #[test]
    fn unknown_token_falls_back_to_white() {
        let config = SiteConfig::default();
        let mut styling = default_styling(SectionLayout::Grid);
        styling.background_color = "no-such-token".to_string();

        let resolved = resolve(&styling, &config, &Theme::default());
        assert_eq!(resolved.background_css, FALLBACK_BACKGROUND);
    }

    #[test]
    fn auto_text_color_follows_theme() {
        let config = SiteConfig::default();
        let styling = default_styling(SectionLayout::Columns);

        let light = resolve(&styling, &config, &Theme::new(ThemeMode::Light));
        let dark = resolve(&styling, &config, &Theme::new(ThemeMode::Dark));
        assert_eq!(light.text_css, DARK_TEXT);
        assert_eq!(dark.text_css, LIGHT_TEXT);
    }

    #[test]
    fn parallax_requires_a_background_image() {
        let config = SiteConfig::default();
        let mut styling = default_styling(SectionLayout::Hero);
        styling.background_image = None;

        let resolved = resolve(&styling, &config, &Theme::default());
        assert!(!resolved.enable_parallax);
    }
}
