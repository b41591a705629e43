use crate::bill_id::BillId;
use crate::error::IngestError;
use crate::runtime::fetcher::Fetcher;
use crate::types::{TextVersion, TextVersionsResponse};
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::Url;

pub const FORMATTED_XML: &str = "Formatted XML";

/// Locates and downloads the latest published markup of a bill.
pub struct CongressApi<'a> {
    fetcher: &'a dyn Fetcher,
    base_url: &'a str,
    api_key: Option<&'a str>,
}

impl<'a> CongressApi<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, base_url: &'a str, api_key: Option<&'a str>) -> Self {
        Self {
            fetcher,
            base_url,
            api_key,
        }
    }

    pub fn text_versions_url(&self, bill: &BillId) -> Result<String, IngestError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/bill/{}/{}/{}/text",
            bill.congress,
            bill.bill_type.api_code(),
            bill.number
        ))
        .map_err(|e| IngestError::Fetch(format!("Invalid API base URL {base}: {e}")))?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("format", "json");
            if let Some(key) = self.api_key {
                qp.append_pair("api_key", key);
            }
        }
        Ok(url.to_string())
    }

    pub async fn fetch_text_versions(&self, bill: &BillId) -> Result<Vec<TextVersion>, IngestError> {
        let url = self.text_versions_url(bill)?;
        let body = self.fetcher.fetch(&url).await.map_err(IngestError::Fetch)?;
        let response: TextVersionsResponse = serde_json::from_str(&body).map_err(|e| {
            IngestError::Fetch(format!("Failed to parse text versions for {bill}: {e}"))
        })?;
        Ok(response.text_versions)
    }

    /// Raw markup of the most recent text version.
    pub async fn fetch_bill_xml(&self, bill: &BillId) -> Result<String, IngestError> {
        let versions = self.fetch_text_versions(bill).await?;
        let latest =
            latest_version(&versions).ok_or_else(|| IngestError::NoTextVersions(bill.to_string()))?;
        let xml_url = formatted_xml_url(latest)
            .ok_or_else(|| IngestError::NoFormattedXml(bill.to_string()))?;

        tracing::info!(
            "Fetching XML for bill {} ({}, {}) from: {}",
            bill,
            latest.type_.as_deref().unwrap_or("unknown version"),
            latest.date.as_deref().unwrap_or("undated"),
            xml_url
        );
        let xml = self.fetcher.fetch(xml_url).await.map_err(IngestError::Fetch)?;
        tracing::info!("Fetched {} chars of XML for {}", xml.len(), bill);
        Ok(xml)
    }
}

fn parse_version_date(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().fixed_offset())
}

/// Latest dated version; the first entry when none carries a usable date.
pub fn latest_version(versions: &[TextVersion]) -> Option<&TextVersion> {
    versions
        .iter()
        .filter_map(|v| {
            v.date
                .as_deref()
                .and_then(parse_version_date)
                .map(|date| (date, v))
        })
        // ties resolve to the earliest entry
        .rev()
        .max_by_key(|(date, _)| *date)
        .map(|(_, v)| v)
        .or_else(|| versions.first())
}

pub fn formatted_xml_url(version: &TextVersion) -> Option<&str> {
    version
        .formats
        .iter()
        .find(|f| f.type_ == FORMATTED_XML && !f.url.trim().is_empty())
        .map(|f| f.url.as_str())
}
