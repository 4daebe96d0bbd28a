use super::*;

// ========================================================================
// Helper: store seeded with a small website
// ========================================================================

fn labels(entries: &[(&str, &str, &str)]) -> LabelMap {
    let mut map = LabelMap::new();
    for (section, key, value) in entries {
        map.entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
    map
}

fn sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("hero", true, 0),
        SectionConfig::new("story", true, 1),
        SectionConfig::new("rsvp", false, 2),
    ]
}

fn create_test_store() -> DraftStore {
    shared::logger::init_test_logger();
    DraftStore::from_content(WebsiteContent {
        website_labels: labels(&[
            ("hero", "title", "Sam & Alex"),
            ("rsvp", "deadline", "June 1"),
        ]),
        website_sections: sections(),
    })
}
