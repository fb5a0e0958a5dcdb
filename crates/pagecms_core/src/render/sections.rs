//! Per-layout HTML renderers.
//!
//! # Responsibility
//! - Turn one section's field values into the HTML fragment for its
//!   layout.
//!
//! # Invariants
//! - Plain field values are HTML-escaped; only `rich-text` content passes
//!   through raw (it is operator-authored markup by definition).
//! - Renderers never fail; missing or mistyped values render as empty.

use super::styling::ResolvedStyling;
use crate::model::section::DynamicSection;
use serde_json::Value;

pub(super) fn render_hero(section: &DynamicSection, styling: &ResolvedStyling) -> String {
    let mut html = open_container(section, styling, "hero");

    let badge = text_field(section, "badge");
    if !badge.is_empty() {
        html.push_str(&format!("<span class=\"badge\">{}</span>", escape(badge)));
    }

    html.push_str(&format!("<h1>{}</h1>", escape(text_field(section, "title"))));

    let subtitle = text_field(section, "subtitle");
    if !subtitle.is_empty() {
        html.push_str(&format!("<h2 class=\"subtitle\">{}</h2>", escape(subtitle)));
    }

    html.push_str(&format!(
        "<p class=\"description\">{}</p>",
        escape(text_field(section, "description"))
    ));

    html.push_str(&cta(
        text_field(section, "primaryCta"),
        text_field(section, "primaryCtaLink"),
        "cta-primary",
    ));
    html.push_str(&cta(
        text_field(section, "secondaryCta"),
        text_field(section, "secondaryCtaLink"),
        "cta-secondary",
    ));

    html.push_str("</section>");
    html
}

pub(super) fn render_bento(section: &DynamicSection, styling: &ResolvedStyling) -> String {
    let mut html = open_container(section, styling, "bento");
    html.push_str(&heading(section));
    html.push_str("<div class=\"bento-grid\">");

    for card in list_field(section, "cards") {
        let size = item_text(card, "size");
        let size = if size.is_empty() { "medium" } else { size };
        html.push_str(&format!(
            "<div class=\"bento-card bento-{}\" data-color=\"{}\">",
            escape(size),
            escape(item_text(card, "color"))
        ));
        html.push_str(&format!("<h3>{}</h3>", escape(item_text(card, "title"))));
        html.push_str(&format!("<p>{}</p>", escape(item_text(card, "description"))));
        let image = item_text(card, "image");
        if !image.is_empty() {
            html.push_str(&format!("<img src=\"{}\" alt=\"\">", escape(image)));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></section>");
    html
}

pub(super) fn render_grid(section: &DynamicSection, styling: &ResolvedStyling) -> String {
    let mut html = open_container(section, styling, "grid");
    html.push_str(&heading(section));

    let description = text_field(section, "description");
    if !description.is_empty() {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>",
            escape(description)
        ));
    }

    let columns = match text_field(section, "columns") {
        "" => "3",
        value => value,
    };
    html.push_str(&format!(
        "<div class=\"feature-grid\" style=\"grid-template-columns: repeat({}, 1fr);\">",
        escape(columns)
    ));

    for item in list_field(section, "items") {
        html.push_str("<div class=\"feature-item\">");
        html.push_str(&format!("<h3>{}</h3>", escape(item_text(item, "title"))));
        html.push_str(&format!("<p>{}</p>", escape(item_text(item, "description"))));
        let link = item_text(item, "link");
        if !link.is_empty() {
            html.push_str(&format!(
                "<a href=\"{}\">Learn more</a>",
                escape(link)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></section>");
    html
}

pub(super) fn render_columns(section: &DynamicSection, styling: &ResolvedStyling) -> String {
    let direction = match text_field(section, "layout") {
        "text-right" => "text-right",
        _ => "text-left",
    };

    let mut html = open_container(section, styling, "columns");
    html.push_str(&heading(section));
    html.push_str(&format!("<div class=\"two-column {direction}\">"));

    html.push_str("<div class=\"column-text\">");
    // Rich text is operator-authored markup; emitted as-is.
    html.push_str(text_field(section, "content"));
    let features: Vec<String> = list_field(section, "features")
        .iter()
        .filter_map(|feature| feature.as_str())
        .filter(|feature| !feature.is_empty())
        .map(|feature| format!("<li>{}</li>", escape(feature)))
        .collect();
    if !features.is_empty() {
        html.push_str(&format!("<ul class=\"features\">{}</ul>", features.concat()));
    }
    html.push_str(&cta(
        text_field(section, "ctaText"),
        text_field(section, "ctaLink"),
        "cta-primary",
    ));
    html.push_str("</div>");

    let image = text_field(section, "image");
    if !image.is_empty() {
        html.push_str(&format!(
            "<div class=\"column-media\"><img src=\"{}\" alt=\"{}\"></div>",
            escape(image),
            escape(text_field(section, "imageAlt"))
        ));
    }

    html.push_str("</div></section>");
    html
}

/// Graceful stand-in for corrupted or future-versioned layout tags.
pub(super) fn render_placeholder(section: &DynamicSection, styling: &ResolvedStyling) -> String {
    let mut html = open_container(section, styling, "unknown");
    html.push_str(&format!(
        "<p class=\"unknown-section\">Unknown section type: {}</p>",
        escape(&section.name)
    ));
    html.push_str("</section>");
    html
}

fn open_container(section: &DynamicSection, styling: &ResolvedStyling, kind: &str) -> String {
    let mut html = format!(
        "<section id=\"{}\" class=\"section section-{kind}\" style=\"{}\">",
        section.anchor(),
        styling.container_style()
    );
    if let Some(image) = &styling.background_image {
        let parallax = if styling.enable_parallax { " parallax" } else { "" };
        html.push_str(&format!(
            "<div class=\"section-bg{parallax}\" style=\"background-image: url({}); opacity: {};\"></div>",
            escape(image),
            f64::from(styling.image_opacity) / 100.0
        ));
    }
    html
}

fn heading(section: &DynamicSection) -> String {
    let mut html = format!("<h2>{}</h2>", escape(text_field(section, "title")));
    let subtitle = text_field(section, "subtitle");
    if !subtitle.is_empty() {
        html.push_str(&format!("<p class=\"subtitle\">{}</p>", escape(subtitle)));
    }
    html
}

fn cta(text: &str, link: &str, class: &str) -> String {
    if text.is_empty() || link.is_empty() {
        return String::new();
    }
    format!(
        "<a class=\"{class}\" href=\"{}\">{}</a>",
        escape(link),
        escape(text)
    )
}

fn text_field<'a>(section: &'a DynamicSection, name: &str) -> &'a str {
    section
        .fields
        .get(name)
        .and_then(|value| value.as_str())
        .unwrap_or("")
}

fn list_field<'a>(section: &'a DynamicSection, name: &str) -> &'a [Value] {
    section
        .fields
        .get(name)
        .and_then(|value| value.as_array())
        .map(|items| items.as_slice())
        .unwrap_or(&[])
}

fn item_text<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(|value| value.as_str()).unwrap_or("")
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_neutralizes_markup_characters() {
        assert_eq!(
            escape("<script>\"&'</script>"),
            "&lt;script&gt;&quot;&amp;&#39;&lt;/script&gt;"
        );
    }
}
