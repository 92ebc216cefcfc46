//! Dashboard configuration loading

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use vitalwatch::dashboard::Config;

#[test]
fn file_values_override_defaults_and_missing_fields_default() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
api_url = "https://hub.example.org"
api_token = "secret"
history_interval = 120
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.api_url, "https://hub.example.org");
    assert_eq!(config.api_token, Some("secret".to_string()));
    assert_eq!(config.history_interval, 120);

    // Unspecified fields fall back to defaults
    assert_eq!(config.alert_interval, 30);
    assert_eq!(config.history_hours, 24);
    assert_eq!(config.history_limit, 100);
    assert_eq!(config.sim_scenario, "random");
}

#[test]
fn parse_errors_name_the_offending_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "api_url = [not valid toml").unwrap();

    let error = Config::load(Some(file.path())).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("Failed to parse config file"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let error = Config::load(Some(std::path::Path::new("/nonexistent/dashboard.toml")));
    assert!(error.is_err());
}
