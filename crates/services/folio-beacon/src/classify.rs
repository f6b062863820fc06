//! Names for tracked sections and categories for clicks, read off a rendered page.

use crate::event::{CtaAction, Event};
use folio_render::{Document, NodeId, Selector};

/// Headings longer than this are not used as section names.
const MAX_HEADING_NAME: usize = 60;

/// Layout classes that never name a section.
const LAYOUT_CLASSES: &[&str] = &["section-padding", "bg-darker"];

/// Every `<section>` and `[data-section]` element, with its name.
pub fn tracked_sections(doc: &Document) -> Vec<(NodeId, String)> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|id| doc.tag(*id) == Some("section") || doc.attr(*id, "data-section").is_some())
        .map(|id| (id, section_name(doc, id)))
        .collect()
}

/// Human-readable section name.
///
/// Tried in order: `data-section`, `id`, the first `h1`/`h2`/`.sub-heading`
/// with a short non-empty text, well-known section classes, the first
/// non-layout class, and finally `"section"`.
pub fn section_name(doc: &Document, id: NodeId) -> String {
    if let Some(name) = doc.attr(id, "data-section").filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    if let Some(name) = doc.attr(id, "id").filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    let heading = doc.descendants(id).into_iter().find(|d| {
        matches!(doc.tag(*d), Some("h1" | "h2")) || doc.has_class(*d, "sub-heading")
    });
    if let Some(heading) = heading {
        let text = doc.text_content(heading);
        let text = text.trim();
        if !text.is_empty() && text.chars().count() < MAX_HEADING_NAME {
            return text.to_string();
        }
    }

    if doc.has_class(id, "hero-section") {
        return "Hero".into();
    }
    if doc.has_class(id, "focus-areas-section") {
        return "Focus Areas".into();
    }

    doc.attr(id, "class")
        .unwrap_or_default()
        .split_ascii_whitespace()
        .find(|c| !LAYOUT_CLASSES.contains(c))
        .unwrap_or("section")
        .to_string()
}

/// Event for a click on `target`, if the nearest link or button is tracked.
pub fn classify_click(doc: &Document, target: NodeId, page: &str, at: i64) -> Option<Event> {
    let control = nearest_control(doc, target)?;

    let id = doc.attr(control, "id").unwrap_or_default();
    if id == "resumePdfBtn" || doc.has_class(control, "resume-pdf-btn") {
        return Some(Event::pdf_download(page, at));
    }
    if id == "qrCodeBtn" || doc.has_class(control, "qr-code-btn") {
        return Some(Event::qr_open(page, at));
    }

    let href = doc.attr(control, "href").unwrap_or_default();
    let action = if ["audit", "calendly", "book"].iter().any(|k| href.contains(k)) {
        CtaAction::BookCall
    } else if href.contains("contact") || href.starts_with("mailto:") || href.starts_with("tel:")
    {
        CtaAction::Contact
    } else if doc
        .closest(control, &Selector::attr("data-template", "socialLinks"))
        .or_else(|| doc.closest(control, &Selector::class("footer-social")))
        .is_some()
    {
        CtaAction::Social
    } else {
        return None;
    };
    Some(Event::cta_click(page, at, action))
}

fn nearest_control(doc: &Document, target: NodeId) -> Option<NodeId> {
    let mut current = Some(target);
    while let Some(node) = current {
        if matches!(doc.tag(node), Some("a" | "button")) {
            return Some(node);
        }
        current = doc.parent(node);
    }
    None
}
