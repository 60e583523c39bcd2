/*!
 * Tests for app configuration loading and defaults
 */

use dolmetscher::app_config::{Config, LogLevel};

#[test]
fn test_default_shouldMatchOriginalDeploymentDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "ko");
    assert_eq!(config.target_language, "de");
    assert_eq!(config.translation.timeout_secs, 10);
    assert_eq!(config.history.local_cap, 50);
    assert_eq!(config.history.display_limit, 10);
    assert_eq!(config.history.remote.table, "translations");
    assert!(!config.history.remote.is_enabled());
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_saveAndLoad_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.source_language = "de".to_string();
    config.target_language = "ko".to_string();
    config.history.remote.url = "https://project.example.co".to_string();
    config.history.remote.api_key = "public-key".to_string();

    config.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.source_language, "de");
    assert_eq!(loaded.target_language, "ko");
    assert!(loaded.history.remote.is_enabled());
    assert_eq!(loaded.history.remote.api_key, "public-key");
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    assert!(!path.exists());
    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.source_language, "ko");

    // A second load reads the file it just wrote
    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(reloaded.target_language, "de");
}

#[test]
fn test_fromJson_withPartialConfig_shouldFillDefaults() {
    let json = r#"{
        "source_language": "de",
        "history": { "display_limit": 5 }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.source_language, "de");
    assert_eq!(config.target_language, "de");
    assert_eq!(config.history.display_limit, 5);
    assert_eq!(config.history.local_cap, 50);
    assert_eq!(config.translation.timeout_secs, 10);
}

#[test]
fn test_fromJson_withUnknownLogLevel_shouldFailParsing() {
    let json = r#"{ "log_level": "verbose" }"#;
    assert!(serde_json::from_str::<Config>(json).is_err());
}
