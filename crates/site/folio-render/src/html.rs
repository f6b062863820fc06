//! HTML parsing into a [`Document`] and serialization back out.

use crate::dom::{Document, Element, NodeId, NodeKind};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "xmp", "iframe"];

/// Parse a full HTML page. Parsing never fails; malformed input is repaired
/// the way browsers repair it.
pub fn parse(html: &str) -> Document {
    let rc = parse_document(RcDom::default(), Default::default()).one(html);
    let mut doc = Document::new();
    let root = doc.root();
    for child in rc.document.children.borrow().iter() {
        convert(&mut doc, root, child);
    }
    doc
}

fn convert(doc: &mut Document, parent: NodeId, handle: &Handle) {
    let kind = match &handle.data {
        NodeData::Document => return,
        NodeData::Doctype { name, .. } => NodeKind::Doctype(name.to_string()),
        NodeData::Text { contents } => NodeKind::Text(contents.borrow().to_string()),
        NodeData::Comment { contents } => NodeKind::Comment(contents.to_string()),
        NodeData::ProcessingInstruction { .. } => return,
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|a| {
                    let key = match &a.name.prefix {
                        Some(prefix) => format!("{prefix}:{}", a.name.local),
                        None => a.name.local.to_string(),
                    };
                    (key, a.value.to_string())
                })
                .collect();
            NodeKind::Element(Element::new(&name.local, attrs))
        }
    };

    // The arena only ever rejects unknown parents, and `parent` was just created.
    let Ok(id) = doc.append(parent, kind) else {
        return;
    };

    if let NodeData::Element {
        template_contents, ..
    } = &handle.data
        && let Some(contents) = template_contents.borrow().as_ref()
    {
        for child in contents.children.borrow().iter() {
            convert(doc, id, child);
        }
    }
    for child in handle.children.borrow().iter() {
        convert(doc, id, child);
    }
}

/// Serialize the whole document.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for child in doc.children(doc.root()) {
        write_node(doc, *child, false, &mut out);
    }
    out
}

/// Serialize the children of one node.
pub fn inner_html(doc: &Document, id: NodeId) -> String {
    let raw = doc.tag(id).is_some_and(|t| RAW_TEXT_ELEMENTS.contains(&t));
    let mut out = String::new();
    for child in doc.children(id) {
        write_node(doc, *child, raw, &mut out);
    }
    out
}

fn write_node(doc: &Document, id: NodeId, raw_text: bool, out: &mut String) {
    match doc.kind(id) {
        None | Some(NodeKind::Document) => {}
        Some(NodeKind::Doctype(name)) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        Some(NodeKind::Text(t)) => {
            if raw_text {
                out.push_str(t);
            } else {
                escape_text(t, out);
            }
        }
        Some(NodeKind::Comment(c)) => {
            out.push_str("<!--");
            out.push_str(c);
            out.push_str("-->");
        }
        Some(NodeKind::Element(el)) => {
            out.push('<');
            out.push_str(el.tag());
            for (name, value) in el.attrs() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&el.tag()) {
                return;
            }
            let raw = RAW_TEXT_ELEMENTS.contains(&el.tag());
            for child in doc.children(id) {
                write_node(doc, *child, raw, out);
            }
            out.push_str("</");
            out.push_str(el.tag());
            out.push('>');
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
