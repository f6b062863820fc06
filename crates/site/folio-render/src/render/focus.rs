use super::{RenderContext, Result, css_url, marker, rebuild};
use crate::dom::Selector;
use crate::markup::{Markup, el};
use folio_config::types::{FocusArea, FocusAreas};

/// Section header and area cards. Nothing renders when there are no areas.
pub fn render(focus: &FocusAreas, ctx: &mut RenderContext<'_>) -> Result<usize> {
    if focus.areas.is_empty() {
        return Ok(0);
    }
    let doc = &mut *ctx.doc;
    let mut touched = 0;

    for header in doc.select(&marker("focusAreasHeader")) {
        let parts = [
            (Selector::class("sub-heading"), &focus.subheading),
            (Selector::tag("h2"), &focus.heading),
            (Selector::class("focus-tagline"), &focus.tagline),
        ];
        for (selector, value) in parts {
            if value.is_empty() {
                continue;
            }
            if let Some(id) = doc.select_first_within(header, &selector) {
                doc.set_text(id, value)?;
            }
        }
        touched += 1;
    }

    let cards: Vec<_> = focus
        .areas
        .iter()
        .enumerate()
        .map(|(i, area)| card(i, area))
        .collect();
    touched += rebuild(doc, "focusAreas", &cards)?.len();

    Ok(touched)
}

fn card(index: usize, area: &FocusArea) -> Markup {
    let mut bg = el("div").class("card-bg");
    if !area.image.is_empty() {
        bg = bg.attr("style", format!("background-image: {}", css_url(&area.image)));
    }
    el("div")
        .class("focus-area-card mgc-up")
        .attr("data-delay", (index * 100).to_string())
        .children([
            bg,
            el("div").class("card-overlay"),
            el("div").class("card-content").children([
                el("div").class("card-category").with_text(&area.category),
                el("h4").class("card-title").with_text(&area.title),
            ]),
        ])
}
