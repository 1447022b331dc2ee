/*!
 * Tests for translator configuration
 */

use std::path::PathBuf;

use automtl::TranslatorConfig;

use crate::common::create_temp_dir;

#[test]
fn test_config_default_shouldUseDocumentedValues() {
    let config = TranslatorConfig::default();

    assert_eq!(config.ms_between_calls, 20);
    assert!(config.title_case);
    assert!(!config.cache_dir.as_os_str().is_empty());
}

#[test]
fn test_config_parse_withEmptyObject_shouldFillDefaults() {
    let config: TranslatorConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.ms_between_calls, 20);
    assert!(config.title_case);
}

#[test]
fn test_config_parse_withPartialObject_shouldKeepGivenValues() {
    let config: TranslatorConfig =
        serde_json::from_str(r#"{"ms_between_calls": 500, "title_case": false}"#).unwrap();

    assert_eq!(config.ms_between_calls, 500);
    assert!(!config.title_case);
}

#[test]
fn test_config_fromFile_withSavedConfig_shouldRoundTrip() {
    let temp_dir = create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("config.json");

    let config = TranslatorConfig {
        ms_between_calls: 100,
        title_case: false,
        cache_dir: PathBuf::from("/tmp/automtl-test"),
    };
    config.save_to_file(&config_path).unwrap();

    let loaded = TranslatorConfig::from_file(&config_path).unwrap();
    assert_eq!(loaded.ms_between_calls, 100);
    assert!(!loaded.title_case);
    assert_eq!(loaded.cache_dir, PathBuf::from("/tmp/automtl-test"));
}

#[test]
fn test_config_fromFile_withMissingFile_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let result = TranslatorConfig::from_file(temp_dir.path().join("nope.json"));
    assert!(result.is_err());
}

#[test]
fn test_config_fromFile_withInvalidJson_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, "not json").unwrap();

    assert!(TranslatorConfig::from_file(&config_path).is_err());
}

#[test]
fn test_config_validate_withEmptyCacheDir_shouldFail() {
    let config = TranslatorConfig {
        cache_dir: PathBuf::new(),
        ..TranslatorConfig::default()
    };
    assert!(config.validate().is_err());
}
