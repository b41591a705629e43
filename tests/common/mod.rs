#![allow(dead_code)]
use async_trait::async_trait;
use billtext::runtime::fetcher::Fetcher;
use billtext::runtime::types::RecordStore;
use billtext::types::ExtractedRecord;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_fixture(filename: &str) -> String {
    let path = Path::new(&fixtures_dir()).join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Serves canned bodies keyed by URL path, ignoring the query string.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pub responses: Arc<Mutex<HashMap<String, String>>>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, url: &str, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, String> {
        self.requested.lock().unwrap().push(url.to_string());
        let key = url.split('?').next().unwrap_or(url);
        self.responses
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| format!("HTTP error 404 fetching {key}"))
    }
}

#[derive(Clone, Default)]
pub struct MockRecordStore {
    pub stored: Arc<Mutex<Vec<(String, Vec<ExtractedRecord>)>>>,
    pub fail_with: Option<String>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn stored(&self) -> Vec<(String, Vec<ExtractedRecord>)> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn store_records(
        &self,
        bill_id: &str,
        records: &[ExtractedRecord],
    ) -> Result<(), String> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone());
        }
        self.stored
            .lock()
            .unwrap()
            .push((bill_id.to_string(), records.to_vec()));
        Ok(())
    }
}
