//! Flattens a markup subtree into one line of text, visiting children in document order.

use super::normalize::normalize_text;
use crate::markup::MarkupNode;

const DEFINED_TERM_LEAD: &str = "The term";

type InlineHandler = fn(&MarkupNode, &mut String);

/// Element-specific handlers. Anything not listed is treated as a nested structural unit.
const INLINE_HANDLERS: &[(&str, InlineHandler)] = &[
    ("external-xref", push_inline),
    ("short-title", push_inline),
    ("emphasis", push_inline),
    ("symbol", push_inline),
    ("quote", push_quoted),
    ("term", push_quoted),
    ("enum", push_enum),
    ("header", push_header),
    ("paragraph", push_paragraph),
];

fn handler_for(tag: &str) -> InlineHandler {
    for &(name, handler) in INLINE_HANDLERS {
        if name == tag {
            return handler;
        }
    }
    push_nested
}

/// Reduce `node` to normalized text.
///
/// Text leaves are dropped when their parent also carries an `enum` or `header` child: in
/// bill markup those loose strings repeat the enumeration and heading verbatim.
pub fn read_in_order(node: &MarkupNode) -> String {
    let children = match node {
        MarkupNode::Text(text) => return normalize_text(text),
        MarkupNode::Element { children, .. } => children,
    };

    let skip_loose_text = node.has_child("enum") || node.has_child("header");
    let mut out = String::new();
    for child in children {
        match child {
            MarkupNode::Text(text) => {
                if !skip_loose_text {
                    out.push_str(text);
                }
            }
            MarkupNode::Element { name, .. } => handler_for(name)(child, &mut out),
        }
    }

    normalize_text(&out)
}

fn push_inline(node: &MarkupNode, out: &mut String) {
    out.push_str(&read_in_order(node));
}

fn push_quoted(node: &MarkupNode, out: &mut String) {
    let quoted = read_in_order(node);
    if !quoted.is_empty() {
        out.push_str(&format!(" \"{quoted}\""));
    }
}

fn push_enum(node: &MarkupNode, out: &mut String) {
    out.push_str(&format!(" {} ", read_in_order(node)));
}

fn push_header(node: &MarkupNode, out: &mut String) {
    out.push(' ');
    out.push_str(&read_in_order(node));
}

fn push_paragraph(node: &MarkupNode, out: &mut String) {
    out.push(' ');
    out.push_str(&read_paragraph(node));
}

fn push_nested(node: &MarkupNode, out: &mut String) {
    out.push(' ');
    out.push_str(&read_in_order(node));
}

/// Reduce a `paragraph`, rebuilding `The term "X" means ...` where the markup splits the
/// defined term (a `header`) from its definition (the following `text`).
///
/// Nested elements other than `text` and `subparagraph` go through this same routine so the
/// header lookahead applies at every depth.
pub fn read_paragraph(node: &MarkupNode) -> String {
    let children = node.children();
    let keep_loose_text = !(node.has_child("enum") || node.has_child("header"));
    let mut out = String::new();
    let mut i = 0;

    while i < children.len() {
        let child = &children[i];
        match child {
            MarkupNode::Text(text) => {
                if keep_loose_text {
                    out.push_str(text);
                }
            }
            MarkupNode::Element { name, .. } => match name.as_str() {
                "enum" => {
                    out.push(' ');
                    out.push_str(&read_in_order(child));
                }
                "header" => {
                    let header = read_in_order(child);
                    let definition = next_element_index(children, i + 1)
                        .filter(|&idx| children[idx].is_element("text"))
                        .map(|idx| (idx, read_in_order(&children[idx])))
                        .filter(|(_, text)| starts_defined_term(text));

                    match definition {
                        Some((idx, text)) => {
                            out.push(' ');
                            if children[idx].descendants_named("term").is_empty() {
                                out.push_str(&text.replacen(
                                    DEFINED_TERM_LEAD,
                                    &format!("{DEFINED_TERM_LEAD} \"{header}\""),
                                    1,
                                ));
                            } else {
                                // The definition already names its term inline.
                                out.push_str(&text);
                            }
                            i = idx + 1;
                            continue;
                        }
                        None => {
                            out.push(' ');
                            out.push_str(&header);
                        }
                    }
                }
                "text" | "subparagraph" => {
                    out.push(' ');
                    out.push_str(&read_in_order(child));
                }
                _ => {
                    out.push(' ');
                    out.push_str(&read_paragraph(child));
                }
            },
        }
        i += 1;
    }

    normalize_text(&out)
}

/// Index of the next element sibling at or after `from`, skipping whitespace-only text.
fn next_element_index(children: &[MarkupNode], from: usize) -> Option<usize> {
    for (offset, child) in children.iter().enumerate().skip(from) {
        match child {
            MarkupNode::Element { .. } => return Some(offset),
            MarkupNode::Text(text) if text.trim().is_empty() => continue,
            MarkupNode::Text(_) => return None,
        }
    }
    None
}

fn starts_defined_term(text: &str) -> bool {
    match text.strip_prefix(DEFINED_TERM_LEAD) {
        Some(rest) => !rest.starts_with(|c: char| c.is_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_term_lead_needs_a_word_boundary() {
        assert!(starts_defined_term("The term means"));
        assert!(starts_defined_term("The term"));
        assert!(!starts_defined_term("The terms mean"));
        assert!(!starts_defined_term("A term means"));
    }

    #[test]
    fn unknown_elements_fall_back_to_nested_reduction() {
        let node = MarkupNode::element(
            "text",
            vec![
                MarkupNode::text("before"),
                MarkupNode::element("future-element", vec![MarkupNode::text("inside")]),
            ],
        );
        assert_eq!(read_in_order(&node), "before inside");
    }
}
