use pagecms_core::{
    create_section, navigation_items, render_page, render_section, template_for, SectionLayout,
    SiteConfig, Theme,
};
use serde_json::json;

fn section(layout: SectionLayout, name: &str) -> pagecms_core::DynamicSection {
    create_section(template_for(layout).unwrap(), name)
}

#[test]
fn hero_renders_title_and_ctas() {
    let mut hero = section(SectionLayout::Hero, "Welcome");
    hero.fields.insert("title".into(), json!("Ship with confidence"));
    hero.fields.insert("primaryCta".into(), json!("Get started"));
    hero.fields.insert("primaryCtaLink".into(), json!("/signup"));

    let html = render_section(&hero, &SiteConfig::default(), &Theme::default());

    assert!(html.contains("<h1>Ship with confidence</h1>"));
    assert!(html.contains("href=\"/signup\""));
    assert!(html.contains("class=\"section section-hero\""));
    assert!(html.contains("linear-gradient("));
    assert!(html.contains("parallax"));
}

#[test]
fn field_values_are_html_escaped() {
    let mut hero = section(SectionLayout::Hero, "xss");
    hero.fields
        .insert("title".into(), json!("<script>alert(1)</script>"));

    let html = render_section(&hero, &SiteConfig::default(), &Theme::default());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn grid_renders_items_with_the_configured_column_count() {
    let mut grid = section(SectionLayout::Grid, "Features");
    grid.fields.insert("title".into(), json!("Features"));
    grid.fields.insert("columns".into(), json!("4"));
    grid.fields.insert(
        "items".into(),
        json!([
            { "title": "Fast", "description": "", "link": "/fast" },
            { "title": "Safe", "description": "", "link": "" }
        ]),
    );

    let html = render_section(&grid, &SiteConfig::default(), &Theme::default());
    assert!(html.contains("repeat(4, 1fr)"));
    assert!(html.contains("<h3>Fast</h3>"));
    assert!(html.contains("href=\"/fast\""));
}

#[test]
fn unknown_layout_renders_a_placeholder() {
    let mut stray = section(SectionLayout::Hero, "Mystery");
    stray.layout = SectionLayout::Unknown;

    let html = render_section(&stray, &SiteConfig::default(), &Theme::default());
    assert!(html.contains("Unknown section type"));
    assert!(html.contains("Mystery"));
}

#[test]
fn page_skips_hidden_sections_but_keeps_order() {
    let mut visible = section(SectionLayout::Grid, "shown");
    visible.fields.insert("title".into(), json!("Shown"));
    let mut hidden = section(SectionLayout::Columns, "hidden");
    hidden.is_visible = false;
    hidden.fields.insert("title".into(), json!("Hidden"));

    let html = render_page(
        &[visible, hidden],
        &SiteConfig::default(),
        &Theme::default(),
    );
    assert!(html.contains("Shown"));
    assert!(!html.contains("Hidden"));
}

#[test]
fn navigation_lists_only_visible_opted_in_sections() {
    let mut a = section(SectionLayout::Hero, "Home");
    a.include_in_navigation = true;
    let mut b = section(SectionLayout::Grid, "Features");
    b.include_in_navigation = true;
    b.navigation_label = Some("Why us".to_string());
    let mut c = section(SectionLayout::Columns, "Hidden");
    c.include_in_navigation = true;
    c.is_visible = false;
    let d = section(SectionLayout::Bento, "Not in nav");

    let items = navigation_items(&[a.clone(), b.clone(), c, d]);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].label, "Home");
    assert_eq!(items[0].anchor, format!("#section-{}", a.id));
    assert_eq!(items[1].label, "Why us");
    assert_eq!(items[1].anchor, format!("#section-{}", b.id));
}

#[test]
fn columns_direction_follows_the_layout_field() {
    let mut columns = section(SectionLayout::Columns, "About");
    columns.fields.insert("layout".into(), json!("text-right"));
    columns.fields.insert("content".into(), json!("<p>Body</p>"));

    let html = render_section(&columns, &SiteConfig::default(), &Theme::default());
    assert!(html.contains("two-column text-right"));
    // Rich text passes through unescaped.
    assert!(html.contains("<p>Body</p>"));
}
