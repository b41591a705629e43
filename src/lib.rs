pub mod bill_id;
pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod runtime;
pub mod types;

pub use error::{IngestError, MarkupParseError};
pub use parser::{parse_bill_xml, DocumentKind, Extraction};
pub use types::ExtractedRecord;
