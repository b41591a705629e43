use crate::error::MarkupParseError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Name of the synthetic element wrapping the document's top-level elements.
pub const DOCUMENT_NODE: &str = "#document";

/// One node of a parsed document. Children keep document order, text and elements interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text(String),
    Element {
        name: String,
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    pub fn element(name: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element {
            name: name.into(),
            children,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        MarkupNode::Text(value.into())
    }

    /// Element name, `None` for text leaves.
    pub fn name(&self) -> Option<&str> {
        match self {
            MarkupNode::Element { name, .. } => Some(name.as_str()),
            MarkupNode::Text(_) => None,
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.name() == Some(tag)
    }

    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Element { children, .. } => children,
            MarkupNode::Text(_) => &[],
        }
    }

    pub fn element_children(&self) -> impl Iterator<Item = &MarkupNode> {
        self.children()
            .iter()
            .filter(|child| matches!(child, MarkupNode::Element { .. }))
    }

    pub fn has_element_children(&self) -> bool {
        self.element_children().next().is_some()
    }

    /// First child element named `tag`.
    pub fn child(&self, tag: &str) -> Option<&MarkupNode> {
        self.children().iter().find(|child| child.is_element(tag))
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a MarkupNode> + 'a {
        self.children().iter().filter(move |child| child.is_element(tag))
    }

    pub fn has_child(&self, tag: &str) -> bool {
        self.child(tag).is_some()
    }

    /// Concatenation of the text leaves directly under this node.
    pub fn direct_text(&self) -> String {
        match self {
            MarkupNode::Text(text) => text.clone(),
            MarkupNode::Element { children, .. } => children
                .iter()
                .filter_map(|child| match child {
                    MarkupNode::Text(text) => Some(text.as_str()),
                    MarkupNode::Element { .. } => None,
                })
                .collect(),
        }
    }

    /// Every element named `tag` below this node, in document order.
    pub fn descendants_named<'a>(&'a self, tag: &str) -> Vec<&'a MarkupNode> {
        let mut found = Vec::new();
        collect_descendants(self, tag, &mut found);
        found
    }
}

fn collect_descendants<'a>(node: &'a MarkupNode, tag: &str, found: &mut Vec<&'a MarkupNode>) {
    for child in node.element_children() {
        if child.is_element(tag) {
            found.push(child);
        }
        collect_descendants(child, tag, found);
    }
}

fn normalize_tag_name(tag_name: &str) -> &str {
    match tag_name.find(':') {
        Some(idx) => &tag_name[idx + 1..],
        None => tag_name,
    }
}

struct OpenElement {
    name: String,
    children: Vec<MarkupNode>,
}

fn push_text(children: &mut Vec<MarkupNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(MarkupNode::Text(last)) = children.last_mut() {
        last.push_str(text);
        return;
    }
    children.push(MarkupNode::Text(text.to_string()));
}

/// Parse raw markup into a tree rooted at a [`DOCUMENT_NODE`] element whose children are the
/// document's top-level elements.
pub fn parse_markup(xml: &str) -> Result<MarkupNode, MarkupParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut stack: Vec<OpenElement> = vec![OpenElement {
        name: DOCUMENT_NODE.to_string(),
        children: Vec::new(),
    }];

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let raw_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                stack.push(OpenElement {
                    name: normalize_tag_name(&raw_name).to_string(),
                    children: Vec::new(),
                });
            }
            Ok(Event::Empty(ref e)) => {
                let raw_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let node = MarkupNode::element(normalize_tag_name(&raw_name), Vec::new());
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(node);
                }
            }
            Ok(Event::End(_)) => {
                if stack.len() < 2 {
                    return Err(MarkupParseError::new(
                        reader.buffer_position(),
                        "closing tag without a matching opening tag",
                    ));
                }
                if let Some(open) = stack.pop() {
                    let node = MarkupNode::element(open.name, open.children);
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                // Text outside the root element is formatting only.
                if stack.len() > 1 {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        Err(err) => {
                            tracing::debug!("Keeping raw text after unescape failure: {}", err);
                            String::from_utf8_lossy(e).into_owned()
                        }
                    };
                    if let Some(open) = stack.last_mut() {
                        push_text(&mut open.children, &text);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if stack.len() > 1 {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    if let Some(open) = stack.last_mut() {
                        push_text(&mut open.children, &text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(MarkupParseError::new(
                    reader.error_position(),
                    e.to_string(),
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    if stack.len() > 1 {
        let unclosed = stack
            .iter()
            .skip(1)
            .map(|open| open.name.as_str())
            .collect::<Vec<_>>()
            .join(" > ");
        tracing::warn!("Markup ended with open elements: {}", unclosed);
        return Err(MarkupParseError::new(
            reader.buffer_position(),
            format!("unexpected end of input inside <{unclosed}>"),
        ));
    }

    let document = stack.pop().map(|open| open.children).unwrap_or_default();
    if !document
        .iter()
        .any(|node| matches!(node, MarkupNode::Element { .. }))
    {
        return Err(MarkupParseError::new(
            reader.buffer_position(),
            "document has no root element",
        ));
    }

    Ok(MarkupNode::element(DOCUMENT_NODE, document))
}
