use serde::{Deserialize, Serialize};

/// One addressable unit of a bill: a section, a subsection or a preamble clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub heading: String,
    pub content: String,
}

impl ExtractedRecord {
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVersionsResponse {
    #[serde(default)]
    pub text_versions: Vec<TextVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextVersion {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub formats: Vec<TextFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub type_: String,
    pub url: String,
}
