use crate::types::ExtractedRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "billtext.json";
pub const API_KEY_ENV: &str = "CONGRESS_DOT_GOV_API_KEY";
pub const CONFIGS_PATH_ENV: &str = "CONFIGS_PATH";

fn default_api_base_url() -> String {
    "https://api.congress.gov/v3".to_string()
}

// 5,000 requests/hour is roughly one request per second.
fn default_request_delay_ms() -> u64 {
    1000
}

fn default_min_content_length() -> usize {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            request_delay_ms: default_request_delay_ms(),
            min_content_length: default_min_content_length(),
        }
    }
}

impl IngestSettings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {CONFIG_FILE_NAME}: {e}"))?;
        let settings: IngestSettings = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
        Ok(settings.with_env_overrides())
    }

    /// Reads `$CONFIGS_PATH/billtext.json` when `CONFIGS_PATH` is set, defaults otherwise.
    pub fn load_default() -> Result<Self, String> {
        match std::env::var(CONFIGS_PATH_ENV) {
            Ok(dir) => Self::load_from_file(Path::new(&dir).join(CONFIG_FILE_NAME)),
            Err(_) => Ok(Self::default().with_env_overrides()),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        self
    }

    pub fn record_policy(&self) -> RecordPolicy {
        RecordPolicy {
            min_content_length: self.min_content_length,
        }
    }
}

/// Relevance filter applied before records are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordPolicy {
    pub min_content_length: usize,
}

impl RecordPolicy {
    pub fn keeps(&self, record: &ExtractedRecord) -> bool {
        record.content.chars().count() >= self.min_content_length
    }

    pub fn apply(&self, records: Vec<ExtractedRecord>) -> Vec<ExtractedRecord> {
        records.into_iter().filter(|r| self.keeps(r)).collect()
    }
}
