use super::normalize::normalize_text;
use super::reading_order::read_in_order;
use crate::markup::MarkupNode;
use crate::types::ExtractedRecord;

const BODY_TAGS: &[&str] = &["legis-body", "resolution-body"];
const SHORT_TITLE_HEADER: &str = "short title";
pub const WHEREAS_HEADING: &str = "Whereas";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingFields {
    pub enumeration: String,
    pub header: String,
}

/// Enumeration and header of a section or subsection; absent fields are empty.
pub fn heading_fields(node: &MarkupNode) -> HeadingFields {
    let enumeration = node
        .child("enum")
        .map(|e| normalize_text(&e.direct_text()))
        .unwrap_or_default();

    // Same normalization as the reducer, so the echo in subsection content matches.
    let header = match node.child("header") {
        Some(h) if h.has_element_children() => read_in_order(h),
        Some(h) => normalize_text(&h.direct_text()),
        None => String::new(),
    };

    HeadingFields {
        enumeration,
        header,
    }
}

pub fn numeric_heading(section_enum: &str) -> String {
    format!("SEC. {section_enum}")
}

pub fn full_heading(numeric: &str, header: &str) -> String {
    format!("{numeric} {header}").trim().to_string()
}

/// `SEC. 2` + `(a)` + `In General` becomes `SEC. 2 (a) In General`.
pub fn subsection_heading(numeric: &str, sub: &HeadingFields) -> String {
    let mut heading = numeric.to_string();
    if !sub.enumeration.is_empty() {
        heading.push_str(&format!(" ({})", strip_enum_parens(&sub.enumeration)));
    }
    if !sub.header.is_empty() {
        heading.push(' ');
        heading.push_str(&sub.header);
    }
    heading
}

fn strip_enum_parens(enumeration: &str) -> &str {
    let inner = enumeration.strip_prefix('(').unwrap_or(enumeration);
    inner.strip_suffix(')').unwrap_or(inner)
}

/// One record per `whereas` clause of every `preamble`.
pub fn extract_preamble(document: &MarkupNode) -> Vec<ExtractedRecord> {
    document
        .children_named("preamble")
        .flat_map(|preamble| preamble.children_named("whereas"))
        .map(|whereas| ExtractedRecord::new(WHEREAS_HEADING, read_in_order(whereas)))
        .collect()
}

/// Walk every body container and its sections in document order.
pub fn extract_body(document: &MarkupNode) -> Vec<ExtractedRecord> {
    let mut records = Vec::new();
    for body in document
        .element_children()
        .filter(|child| child.name().is_some_and(|name| BODY_TAGS.contains(&name)))
    {
        for section in body.children_named("section") {
            extract_section(section, &mut records);
        }
    }
    records
}

fn extract_section(section: &MarkupNode, records: &mut Vec<ExtractedRecord>) {
    let fields = heading_fields(section);
    let numeric = numeric_heading(&fields.enumeration);
    let heading = full_heading(&numeric, &fields.header);

    let subsections = section.children_named("subsection").collect::<Vec<_>>();
    if subsections.is_empty() {
        if fields.header.eq_ignore_ascii_case(SHORT_TITLE_HEADER) {
            let content = find_short_title(section);
            if !content.is_empty() {
                records.push(ExtractedRecord::new(heading, content));
            }
        } else {
            records.push(ExtractedRecord::new(heading, section_text(section)));
        }
        return;
    }

    for subsection in subsections {
        let sub = heading_fields(subsection);
        let content = strip_heading_echo(read_in_order(subsection), &sub);
        if !content.is_empty() {
            records.push(ExtractedRecord::new(
                subsection_heading(&numeric, &sub),
                content,
            ));
        }
    }
}

/// The reducer also visits `enum` and `header`, so subsection text opens with them.
fn strip_heading_echo(content: String, sub: &HeadingFields) -> String {
    let prefix = format!("{} {}", sub.enumeration, sub.header);
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return content;
    }
    if let Some(rest) = content.strip_prefix(prefix) {
        return rest.trim().to_string();
    }
    content
}

/// Reduced `text` child of a section without subsections.
fn section_text(section: &MarkupNode) -> String {
    section
        .child("text")
        .map(read_in_order)
        .unwrap_or_default()
}

/// First `short-title` held by a `quote` anywhere in the section, without the citing sentence.
pub fn find_short_title(section: &MarkupNode) -> String {
    section
        .descendants_named("quote")
        .into_iter()
        .find_map(|quote| quote.child("short-title"))
        .map(read_in_order)
        .unwrap_or_default()
}
