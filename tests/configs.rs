use billtext::config::{IngestSettings, RecordPolicy, CONFIG_FILE_NAME};
use billtext::types::ExtractedRecord;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_fields_take_defaults() {
    let settings: IngestSettings = serde_json::from_str("{}").expect("Failed to parse config");
    assert_eq!(settings.api_base_url, "https://api.congress.gov/v3");
    assert_eq!(settings.request_delay_ms, 1000);
    assert_eq!(settings.min_content_length, 20);
    assert_eq!(settings.api_key, None);
}

#[test]
fn test_load_settings_from_file() {
    let json = r#"
    {
        "api_base_url": "http://localhost:9000/v3",
        "request_delay_ms": 0,
        "min_content_length": 5
    }
    "#;

    let mut tmp_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(tmp_file, "{}", json).expect("Failed to write to temp file");

    let settings = IngestSettings::load_from_file(tmp_file.path()).expect("Failed to load");
    assert_eq!(settings.api_base_url, "http://localhost:9000/v3");
    assert_eq!(settings.request_delay_ms, 0);
    assert_eq!(settings.record_policy().min_content_length, 5);
}

#[test]
fn test_load_default_with_env_var() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{ "min_content_length": 42 }"#,
    )
    .expect("Failed to write config");

    std::env::set_var("CONFIGS_PATH", dir.path());
    let settings = IngestSettings::load_default();
    std::env::remove_var("CONFIGS_PATH");

    assert_eq!(settings.expect("Failed to load default").min_content_length, 42);
}

#[test]
fn test_invalid_file_reports_error() {
    let mut tmp_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(tmp_file, "not json").expect("Failed to write to temp file");

    let err = IngestSettings::load_from_file(tmp_file.path()).unwrap_err();
    assert!(err.contains(CONFIG_FILE_NAME));
}

#[test]
fn test_record_policy_counts_characters() {
    let policy = RecordPolicy {
        min_content_length: 20,
    };
    let records = vec![
        ExtractedRecord::new("SEC. 1. Short title", "Example Act"),
        ExtractedRecord::new("SEC. 2. Findings", "Congress finds the following."),
        ExtractedRecord::new("SEC. 3", "ééééééééééééééééééé"),
    ];
    let kept = policy.apply(records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].heading, "SEC. 2. Findings");

    let keep_all = RecordPolicy {
        min_content_length: 0,
    };
    assert!(keep_all.keeps(&ExtractedRecord::new("SEC. 4", "")));
}
