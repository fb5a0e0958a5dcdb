use pagecms_core::{
    MemoryStorage, MutationOutcome, SectionLayout, SectionService, SectionStore, ServiceError,
};
use serde_json::json;
use std::collections::BTreeMap;
use uuid::Uuid;

fn service() -> SectionService<MemoryStorage> {
    SectionService::new(SectionStore::new(MemoryStorage::new()))
}

#[test]
fn create_looks_up_the_template_and_places_last() {
    let mut service = service();

    let hero = service.create(SectionLayout::Hero, "Welcome").unwrap();
    let grid = service.create(SectionLayout::Grid, "Features").unwrap();

    assert_eq!(hero.layout, SectionLayout::Hero);
    assert!(hero.order < grid.order);
    assert_eq!(service.list().unwrap().len(), 2);
}

#[test]
fn create_rejects_the_unknown_layout() {
    let mut service = service();
    let err = service.create(SectionLayout::Unknown, "x").unwrap_err();
    assert!(matches!(err, ServiceError::TemplateNotFound(_)));
}

#[test]
fn duplicate_lands_right_after_the_source() {
    let mut service = service();
    let a = service.create(SectionLayout::Hero, "A").unwrap();
    service.create(SectionLayout::Grid, "B").unwrap();

    let copy = service.duplicate(a.id).unwrap();

    assert_eq!(copy.order, a.order + 0.5);
    let names: Vec<_> = service
        .list()
        .unwrap()
        .into_iter()
        .map(|section| section.name)
        .collect();
    assert_eq!(names, vec!["A", "A (Copy)", "B"]);
}

#[test]
fn duplicate_of_missing_section_fails() {
    let mut service = service();
    let err = service.duplicate(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ServiceError::SectionNotFound(_)));
}

#[test]
fn update_fields_gates_on_validation() {
    let mut service = service();
    let hero = service.create(SectionLayout::Hero, "hero").unwrap();

    // Required fields still empty: the edit must be refused and nothing
    // persisted.
    let mut bad = hero.fields.clone();
    bad.insert("primaryCtaLink".into(), json!("not a url"));
    let err = service.update_fields(hero.id, bad).unwrap_err();
    match err {
        ServiceError::ValidationFailed(errors) => {
            assert!(errors.contains(&"Main Title is required".to_string()));
            assert!(errors.contains(&"Primary CTA Link must be a valid URL".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
    let stored = &service.list().unwrap()[0];
    assert_eq!(stored.fields, hero.fields);
    assert_eq!(stored.updated_at, hero.updated_at);

    let mut good: BTreeMap<_, _> = hero.fields.clone();
    good.insert("title".into(), json!("Launch"));
    good.insert("description".into(), json!("Ship faster."));
    service.update_fields(hero.id, good).unwrap();

    let stored = &service.list().unwrap()[0];
    assert_eq!(stored.fields["title"], json!("Launch"));
    assert!(stored.updated_at > hero.updated_at);
}

#[test]
fn toggle_visibility_flips_and_reports_state() {
    let mut service = service();
    let section = service.create(SectionLayout::Bento, "stats").unwrap();

    assert!(!service.toggle_visibility(section.id).unwrap());
    assert!(service.toggle_visibility(section.id).unwrap());
}

#[test]
fn set_navigation_and_rename_round_trip() {
    let mut service = service();
    let section = service.create(SectionLayout::Grid, "Features").unwrap();

    service
        .set_navigation(section.id, true, Some("Why us".to_string()))
        .unwrap();
    service.rename(section.id, "Feature Grid").unwrap();

    let stored = &service.list().unwrap()[0];
    assert!(stored.include_in_navigation);
    assert_eq!(stored.navigation_label.as_deref(), Some("Why us"));
    assert_eq!(stored.name, "Feature Grid");
}

#[test]
fn update_styling_bypasses_field_validation() {
    let mut service = service();
    // Required fields are still empty; styling edits must go through anyway.
    let section = service.create(SectionLayout::Hero, "hero").unwrap();

    let mut styling = section.styling.clone();
    styling.background_color = "black".to_string();
    styling.enable_parallax = false;
    service.update_styling(section.id, styling.clone()).unwrap();

    let stored = &service.list().unwrap()[0];
    assert_eq!(stored.styling, styling);
    assert!(stored.updated_at > section.updated_at);
}

#[test]
fn delete_reports_not_found_without_failing() {
    let mut service = service();
    service.create(SectionLayout::Hero, "keep").unwrap();

    let outcome = service.delete(Uuid::new_v4()).unwrap();
    assert_eq!(outcome, MutationOutcome::NotFound);
    assert_eq!(service.list().unwrap().len(), 1);
}

#[test]
fn move_section_swaps_two_positions() {
    let mut service = service();
    service.create(SectionLayout::Hero, "a").unwrap();
    service.create(SectionLayout::Grid, "b").unwrap();
    service.create(SectionLayout::Bento, "c").unwrap();

    service.move_section(0, 2).unwrap();

    let names: Vec<_> = service
        .list()
        .unwrap()
        .into_iter()
        .map(|section| section.name)
        .collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

#[test]
fn move_section_rejects_out_of_range_positions() {
    let mut service = service();
    service.create(SectionLayout::Hero, "only").unwrap();

    let err = service.move_section(0, 5).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidPosition { index: 5, len: 1 }
    ));
}
