//! Structural parser for bill and resolution markup.
//!
//! Turns the government XML dialect into an ordered list of `(heading, content)` records:
//! one per section, or one per subsection when a section is subdivided. Resolutions also
//! yield one record per preamble `whereas` clause, ahead of the body.

pub mod normalize;
pub mod reading_order;
pub mod sections;

use crate::error::MarkupParseError;
use crate::markup::{parse_markup, MarkupNode};
use crate::types::ExtractedRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Bill,
    Resolution,
}

impl DocumentKind {
    pub fn tag(self) -> &'static str {
        match self {
            DocumentKind::Bill => "bill",
            DocumentKind::Resolution => "resolution",
        }
    }
}

/// The root carried neither a `bill` nor a `resolution` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedDocumentKind {
    pub root_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub kind: Option<DocumentKind>,
    pub records: Vec<ExtractedRecord>,
    pub unrecognized: Option<UnrecognizedDocumentKind>,
}

impl Extraction {
    fn unrecognized(root_names: Vec<String>) -> Self {
        Self {
            kind: None,
            records: Vec::new(),
            unrecognized: Some(UnrecognizedDocumentKind { root_names }),
        }
    }
}

/// Parse raw markup and extract its records.
pub fn parse_bill_xml(xml: &str) -> Result<Extraction, MarkupParseError> {
    let root = parse_markup(xml)?;
    Ok(extract_sections(&root))
}

/// Dispatch on the document kind found directly under `root`.
pub fn extract_sections(root: &MarkupNode) -> Extraction {
    for kind in [DocumentKind::Bill, DocumentKind::Resolution] {
        if let Some(document) = root.child(kind.tag()) {
            let mut records = Vec::new();
            if kind == DocumentKind::Resolution {
                records.extend(sections::extract_preamble(document));
            }
            records.extend(sections::extract_body(document));
            return Extraction {
                kind: Some(kind),
                records,
                unrecognized: None,
            };
        }
    }

    let root_names = root
        .element_children()
        .filter_map(|child| child.name().map(str::to_string))
        .collect::<Vec<_>>();
    tracing::warn!("Unknown top-level node: {:?}", root_names);
    Extraction::unrecognized(root_names)
}
