use pagecms_core::{
    create_section, duplicate_section, template_for, templates, SectionLayout, TextColor,
};
use serde_json::{json, Value};

#[test]
fn created_section_has_one_field_per_schema_entry() {
    for template in templates() {
        let section = create_section(template, "sample");

        assert_eq!(section.fields.len(), template.default_fields.len());
        for spec in &template.default_fields {
            assert!(
                section.fields.contains_key(&spec.name),
                "missing field {} in {}",
                spec.name,
                template.name
            );
        }
        assert_eq!(section.schema, template.default_fields);
    }
}

#[test]
fn hero_welcome_scenario_matches_defaults() {
    let template = template_for(SectionLayout::Hero).unwrap();
    let section = create_section(template, "Welcome");

    assert_eq!(section.name, "Welcome");
    assert_eq!(section.fields["title"], json!(""));
    assert_eq!(section.styling.background_color, "gradient-dark");
    assert!(section.styling.enable_parallax);
    assert_eq!(section.styling.text_color, TextColor::Light);
    assert_eq!(section.styling.image_opacity, 40);
    assert!(section.is_visible);
    assert!(!section.include_in_navigation);
    assert_eq!(section.order, 0.0);
    assert_eq!(section.created_at, section.updated_at);
}

#[test]
fn declared_defaults_override_the_empty_string() {
    let template = template_for(SectionLayout::Grid).unwrap();
    let section = create_section(template, "features");

    assert_eq!(section.fields["columns"], json!("3"));
    assert_eq!(section.fields["title"], json!(""));
    let items = section.fields["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn ids_are_unique_across_creations() {
    let template = template_for(SectionLayout::Bento).unwrap();
    let first = create_section(template, "a");
    let second = create_section(template, "b");
    assert_ne!(first.id, second.id);
}

#[test]
fn duplicate_offsets_order_and_renames() {
    let template = template_for(SectionLayout::Columns).unwrap();
    let mut source = create_section(template, "About");
    source.order = 3.0;

    let copy = duplicate_section(&source);

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.name, "About (Copy)");
    assert_eq!(copy.order, 3.5);
    assert_eq!(copy.fields, source.fields);
    assert_eq!(copy.styling, source.styling);
    assert_eq!(copy.schema, source.schema);
}

#[test]
fn duplicate_is_a_deep_copy() {
    let template = template_for(SectionLayout::Bento).unwrap();
    let source = create_section(template, "Stats");

    let mut copy = duplicate_section(&source);
    copy.fields
        .insert("title".to_string(), Value::String("edited".to_string()));
    if let Some(Value::Array(cards)) = copy.fields.get_mut("cards") {
        cards.push(json!({ "size": "small", "title": "extra" }));
    }

    assert_eq!(source.fields["title"], json!(""));
    assert_eq!(source.fields["cards"].as_array().unwrap().len(), 1);
}
