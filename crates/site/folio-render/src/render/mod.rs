//! Section renderers.
//!
//! Each renderer reads one typed slice of the configuration and rewrites the
//! elements bound to it through the placeholder protocol:
//! - `data-template="<field>"` binds a scalar field (text replacement)
//! - `data-template="<section>"` on a container binds a list section (content replaced)
//! - `data-template-image="<slot>"` binds an image slot
//!
//! Renderers always replace content and never append, so running one twice
//! with the same slice leaves the document unchanged. A missing placeholder is
//! not an error; the renderer simply touches nothing. The returned count is
//! the number of placeholders rewritten.

pub mod audit;
pub mod branding;
pub mod collections;
pub mod focus;
pub mod hero;
pub mod media;
pub mod profile;
pub mod seo;
pub mod services;

use crate::dom::{Document, DomError, NodeId, Selector};
use crate::effects::Effects;
use crate::markup::Markup;
use thiserror::Error;

/// Attribute binding scalar fields and list sections.
pub const TEMPLATE_ATTR: &str = "data-template";

/// Attribute binding image slots.
pub const IMAGE_ATTR: &str = "data-template-image";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("refusing to render {field} link with unsafe scheme: '{url}'")]
    UnsafeUrl { field: String, url: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Everything a renderer may touch.
pub struct RenderContext<'a> {
    pub doc: &'a mut Document,
    pub effects: &'a mut dyn Effects,
    /// Year shown in the copyright line.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(doc: &'a mut Document, effects: &'a mut dyn Effects, year: i32) -> Self {
        Self { doc, effects, year }
    }
}

/// Selector for a `data-template` binding.
pub fn marker(name: &str) -> Selector {
    Selector::attr(TEMPLATE_ATTR, name)
}

/// Set the text of every element bound to `name`. Empty values leave the
/// placeholders as they are.
pub fn replace_text(doc: &mut Document, name: &str, value: &str) -> Result<usize> {
    if value.is_empty() {
        return Ok(0);
    }
    let targets = doc.select(&marker(name));
    for id in &targets {
        doc.set_text(*id, value)?;
    }
    Ok(targets.len())
}

/// Replace the content of every container bound to `name` with `items`.
///
/// An empty `items` list is a no-op and returns no containers.
pub fn rebuild(doc: &mut Document, name: &str, items: &[Markup]) -> Result<Vec<NodeId>> {
    if items.is_empty() {
        return Ok(vec![]);
    }
    let containers = doc.select(&marker(name));
    for id in &containers {
        doc.replace_children(*id, items.iter().cloned())?;
    }
    Ok(containers)
}

/// `url('...')` with quotes and backslashes escaped and whitespace
/// percent-encoded.
pub fn css_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\\' | '\'' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_ascii_whitespace() || c.is_ascii_control() => {
                escaped.push_str(&format!("%{:02X}", u32::from(c)));
            }
            c => escaped.push(c),
        }
    }
    format!("url('{escaped}')")
}

/// Reject link targets that would run script when followed.
pub fn checked_href<'u>(field: &str, url: &'u str) -> Result<&'u str> {
    let scheme = url
        .trim_start()
        .split_once(':')
        .map(|(s, _)| s.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("javascript" | "vbscript" | "data") => Err(RenderError::UnsafeUrl {
            field: field.to_string(),
            url: url.to_string(),
        }),
        _ => Ok(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse;
    use crate::markup::el;

    #[test]
    fn test_replace_text_hits_every_marker() {
        let mut doc =
            parse(r#"<h1 data-template="name">X</h1><span data-template="name">Y</span>"#);
        assert_eq!(replace_text(&mut doc, "name", "Jane").unwrap(), 2);
        for id in doc.select(&marker("name")) {
            assert_eq!(doc.text_content(id), "Jane");
        }
    }

    #[test]
    fn test_replace_text_skips_empty_value() {
        let mut doc = parse(r#"<span data-template="phone">555</span>"#);
        assert_eq!(replace_text(&mut doc, "phone", "").unwrap(), 0);
        let span = doc.select_first(&marker("phone")).unwrap();
        assert_eq!(doc.text_content(span), "555");
    }

    #[test]
    fn test_rebuild_with_no_items_keeps_content() {
        let mut doc = parse(r#"<div data-template="gallery"><p>kept</p></div>"#);
        assert!(rebuild(&mut doc, "gallery", &[]).unwrap().is_empty());
        let div = doc.select_first(&marker("gallery")).unwrap();
        assert_eq!(doc.text_content(div), "kept");

        rebuild(&mut doc, "gallery", &[el("img")]).unwrap();
        assert_eq!(doc.children(div).len(), 1);
    }

    #[test]
    fn test_css_url_escapes_quotes() {
        assert_eq!(css_url("a.jpg"), "url('a.jpg')");
        assert_eq!(css_url("it's.jpg"), r"url('it\'s.jpg')");
        assert_eq!(css_url("a b\n.jpg"), "url('a%20b%0A.jpg')");
    }

    #[test]
    fn test_checked_href() {
        assert!(checked_href("x", "https://example.com").is_ok());
        assert!(checked_href("x", "#contact").is_ok());
        assert!(checked_href("x", "contact.html").is_ok());
        assert!(matches!(
            checked_href("x", " JavaScript:alert(1)"),
            Err(RenderError::UnsafeUrl { .. })
        ));
    }
}
