use scrivener_core::{Outline, Report, Section, Topic};

#[test]
fn outline_deserializes_from_structured_output() {
    let json = r#"{
        "sections": [
            {"title": "Introduction", "description": "Sets the scene."},
            {"title": "Ownership", "description": "Moves, borrows and lifetimes."}
        ]
    }"#;

    let outline: Outline = serde_json::from_str(json).unwrap();
    assert_eq!(outline.len(), 2);
    assert_eq!(outline.sections()[0].title(), "Introduction");
    assert_eq!(outline.sections()[1].planned_words(), 4);
}

#[test]
fn outline_without_sections_is_empty() {
    let outline: Outline = serde_json::from_str("{}").unwrap();
    assert!(outline.is_empty());
}

#[test]
fn schema_requires_title_and_description() {
    let schema = Outline::json_schema();
    let required = &schema["properties"]["sections"]["items"]["required"];
    assert_eq!(required, &serde_json::json!(["title", "description"]));
}

#[test]
fn report_stats_count_sections_and_final_words() {
    let outline = Outline::new(vec![
        Section::new("Intro", "a"),
        Section::new("Body", "b"),
        Section::new("End", "c"),
    ]);
    let report = Report::new(
        Topic::new("Stats").unwrap(),
        outline,
        vec!["x".into(), "y".into(), "z".into()],
        "x\n\n----\n\ny\n\n----\n\nz".into(),
        "one two  three\nfour".into(),
    );

    let stats = report.stats();
    assert_eq!(*stats.sections(), 3);
    assert_eq!(*stats.words(), 4);
}
