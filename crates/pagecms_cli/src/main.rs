//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pagecms_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pagecms_core::{templates, SectionService, SectionStore, SqliteStorage};

fn main() {
    println!("pagecms_core version={}", pagecms_core::core_version());
    for template in templates() {
        println!(
            "template layout={} name={:?} fields={}",
            template.layout,
            template.name,
            template.default_fields.len()
        );
    }

    // In-memory probe: exercise the create path end to end.
    match SqliteStorage::open_in_memory() {
        Ok(storage) => {
            let mut service = SectionService::new(SectionStore::new(storage));
            match service.create(pagecms_core::SectionLayout::Hero, "Smoke Hero") {
                Ok(section) => println!("created id={} order={}", section.id, section.order),
                Err(err) => eprintln!("create failed: {err}"),
            }
        }
        Err(err) => eprintln!("storage open failed: {err}"),
    }
}
