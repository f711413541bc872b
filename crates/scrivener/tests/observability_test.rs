use scrivener::ObservabilityConfig;

#[test]
fn default_config_is_human_readable_info() {
    let config = ObservabilityConfig::default();

    assert_eq!(config.service_name, "scrivener");
    assert_eq!(config.log_level, "info");
    assert!(!config.json_logs);
}

#[test]
fn verbose_switches_level() {
    let config = ObservabilityConfig::default().with_log_level("debug");
    assert_eq!(config.log_level, "debug");
}
