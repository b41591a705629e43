use thiserror::Error;

/// Raw markup could not be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Markup parse error at byte {position}: {message}")]
pub struct MarkupParseError {
    pub position: u64,
    pub message: String,
}

impl MarkupParseError {
    pub fn new(position: u64, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid bill id {0:?}")]
    InvalidBillId(String),
    #[error("Fetch failed: {0}")]
    Fetch(String),
    #[error("No text versions published for {0}")]
    NoTextVersions(String),
    #[error("No Formatted XML text for {0}")]
    NoFormattedXml(String),
    #[error(transparent)]
    Markup(#[from] MarkupParseError),
    #[error("Store failed: {0}")]
    Store(String),
}
