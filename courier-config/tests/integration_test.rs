//! Integration tests for courier-config

use courier_config::*;
use std::env;
use std::io::Write;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
            webhook_url = "https://hooks.test/toml"
            timeout_secs = 15
            username = "Courier"
        "#,
    );

    let settings = SettingsLoader::new().file(file.path()).load().unwrap();

    assert_eq!(settings.url(), Some("https://hooks.test/toml"));
    assert_eq!(settings.timeout_secs, 15);
    assert_eq!(settings.username.as_deref(), Some("Courier"));
}

#[test]
fn test_json_file_then_override() {
    let file = write_temp(
        ".json",
        r#"{"webhook_url": "https://hooks.test/json", "timeout_secs": 15}"#,
    );

    let settings = SettingsLoader::new()
        .file(file.path())
        .set("timeout_secs", 45)
        .load()
        .unwrap();

    assert_eq!(settings.url(), Some("https://hooks.test/json"));
    assert_eq!(settings.timeout_secs, 45);
}

#[test]
fn test_dotenv_file_uses_prefix() {
    let file = write_temp(
        ".env",
        "COURIER_WEBHOOK_URL=https://hooks.test/dotenv\nCOURIER_ATTACH_ON_ERROR=true\nOTHER=1\n",
    );

    let settings = SettingsLoader::new()
        .dotenv(Some(file.path().to_path_buf()))
        .load()
        .unwrap();

    assert_eq!(settings.url(), Some("https://hooks.test/dotenv"));
    assert!(settings.attach_on_error);
}

#[test]
fn test_env_settings_file_uses_prefix() {
    let file = write_temp(
        ".env",
        "COURIER_WEBHOOK_URL=https://hooks.test/envfile\nCOURIER_TIMEOUT_SECS=12\nCOURIER_USERNAME=\"Build \\\"bot\\\"\"\nOTHER=1\n",
    );

    let from_file = SettingsLoader::new().file(file.path()).load().unwrap();
    let from_dotenv = SettingsLoader::new()
        .dotenv(Some(file.path().to_path_buf()))
        .load()
        .unwrap();

    assert_eq!(from_file.url(), Some("https://hooks.test/envfile"));
    assert_eq!(from_file.timeout_secs, 12);
    assert_eq!(from_file.username.as_deref(), Some("Build \"bot\""));
    assert_eq!(from_file, from_dotenv);
}

#[test]
fn test_process_env_with_custom_prefix() {
    unsafe {
        env::set_var("COURIERTEST_WEBHOOK_URL", "https://hooks.test/env");
        env::set_var("COURIERTEST_TIMEOUT_SECS", "9");
    }

    let settings = SettingsLoader::new()
        .with_prefix("COURIERTEST")
        .env()
        .load()
        .unwrap();

    assert_eq!(settings.url(), Some("https://hooks.test/env"));
    assert_eq!(settings.timeout_secs, 9);

    unsafe {
        env::remove_var("COURIERTEST_WEBHOOK_URL");
        env::remove_var("COURIERTEST_TIMEOUT_SECS");
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let result = SettingsLoader::new().file("/nonexistent/courier.toml").load();
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_missing_url_fails_validation() {
    let file = write_temp(".toml", "timeout_secs = 5\n");
    let result = SettingsLoader::new().file(file.path()).load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError("webhook_url".to_string());
    assert!(err.to_string().contains("webhook_url"));
}
