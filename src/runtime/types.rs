use crate::config::RecordPolicy;
use crate::runtime::fetcher::Fetcher;
use crate::types::ExtractedRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for extracted records, keyed by bill identifier.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn store_records(
        &self,
        bill_id: &str,
        records: &[ExtractedRecord],
    ) -> Result<(), String>;
}

pub struct IngestContext<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub store: &'a dyn RecordStore,
    pub api_base_url: &'a str,
    pub api_key: Option<&'a str>,
    pub policy: RecordPolicy,
    pub request_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Completed,
    Skipped,
    Failed(String),
}

impl UnitStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UnitStatus::Completed => "completed",
            UnitStatus::Skipped => "skipped",
            UnitStatus::Failed(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome {
    pub bill_id: String,
    pub status: UnitStatus,
    pub records_stored: usize,
}
