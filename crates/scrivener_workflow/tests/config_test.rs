use scrivener_error::ScrivenerErrorKind;
use scrivener_workflow::{DEFAULT_SEPARATOR, Prompts, ScrivenerConfig, WorkflowConfig};
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_bundled_file() {
    let config = ScrivenerConfig::load_from(None).unwrap();

    assert_eq!(config.workflow().model(), "openai/gpt-oss-120b");
    assert_eq!(*config.workflow().max_concurrency(), 8);
    assert_eq!(config.workflow().separator(), DEFAULT_SEPARATOR);
    assert_eq!(*config.workflow().temperature(), Some(0.7));
    assert_eq!(config.workflow().prompts(), &Prompts::default());
    assert_eq!(config.server().bind(), "127.0.0.1:8501");
    assert_eq!(*config.server().max_reports(), 100);
}

#[test]
fn explicit_file_overrides_defaults() {
    let file = config_file(
        r#"
[workflow]
max_concurrency = 3
max_tokens = 2048

[workflow.prompts]
polish_user = "Edit this please: {draft}"

[server]
bind = "0.0.0.0:9000"
max_reports = 5
"#,
    );

    let config = ScrivenerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(*config.workflow().max_concurrency(), 3);
    assert_eq!(*config.workflow().max_tokens(), Some(2048));
    assert_eq!(
        config.workflow().prompts().polish_user(),
        "Edit this please: {draft}"
    );
    // Untouched prompts keep their defaults.
    assert_eq!(
        config.workflow().prompts().outline_user(),
        Prompts::default().outline_user()
    );
    assert_eq!(config.server().bind(), "0.0.0.0:9000");
    assert_eq!(*config.server().max_reports(), 5);
}

#[test]
fn template_without_placeholder_is_rejected() {
    let file = config_file(
        r#"
[workflow.prompts]
expand_user = "Write about {title}"
"#,
    );

    let err = ScrivenerConfig::load_from(Some(file.path())).unwrap_err();
    assert!(matches!(err.kind(), ScrivenerErrorKind::Config(_)));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = ScrivenerConfig::load_from(Some(std::path::Path::new(
        "/nonexistent/scrivener-test.toml",
    )))
    .unwrap_err();
    assert!(matches!(err.kind(), ScrivenerErrorKind::Config(_)));
}

#[test]
fn default_workflow_config_is_bounded() {
    let config = WorkflowConfig::default();
    assert_eq!(*config.max_concurrency(), 8);
    assert_eq!(config.temperature(), &None);
}
