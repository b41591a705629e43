use async_trait::async_trait;
use reqwest::{Client, Url};

/// Retrieves a document body by URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// `url` with its `api_key` query parameter masked, for logs and error messages.
pub fn redact_api_key(url: &str) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };
    if !parsed.query_pairs().any(|(key, _)| key == "api_key") {
        return url.to_string();
    }

    let pairs = parsed
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect::<Vec<_>>();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, String> {
        let response = self.client.get(url).send().await.map_err(|e| {
            format!(
                "Network error fetching {}: {}",
                redact_api_key(url),
                e.without_url()
            )
        })?;

        if !response.status().is_success() {
            return Err(format!(
                "HTTP error {} fetching {}",
                response.status().as_u16(),
                redact_api_key(url)
            ));
        }

        response.text().await.map_err(|e| {
            format!(
                "Error reading response body from {}: {}",
                redact_api_key(url),
                e.without_url()
            )
        })
    }
}
