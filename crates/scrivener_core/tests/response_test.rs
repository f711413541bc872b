use scrivener_core::{GenerateResponse, Output};

#[test]
fn response_text_joins_every_output() {
    let response = GenerateResponse::builder()
        .outputs(vec![
            Output::Text("Hello, ".to_string()),
            Output::Text("world".to_string()),
        ])
        .build()
        .unwrap();

    assert_eq!(response.text(), "Hello, world");
}

#[test]
fn output_serializes_as_tagged_text() {
    let value = serde_json::to_value(Output::Text("hi".to_string())).unwrap();
    assert_eq!(value, serde_json::json!({"type": "Text", "data": "hi"}));

    let back: Output = serde_json::from_value(value).unwrap();
    assert_eq!(back.as_text(), "hi");
}

#[test]
fn unknown_output_types_are_rejected() {
    let json = serde_json::json!({"type": "Json", "data": {"a": 1}});
    assert!(serde_json::from_value::<Output>(json).is_err());
}
