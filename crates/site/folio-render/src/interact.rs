//! Click behavior attached to generated markup.
//!
//! Handlers live on the [`Document`] keyed by node, so regenerating a container
//! drops the old handlers together with the old nodes. Wiring must therefore
//! run again after every render of an accordion or solution list.

use crate::dom::{Document, NodeId, Result, Selector};

pub const ACCORDION_ITEM: &str = "dsn-accordion-item";
pub const ACCORDION_HEADER: &str = "dsn-accordion-header";
pub const SOLUTION_CARD: &str = "solution-card";
pub const SOLUTION_TOGGLE: &str = "solution-toggle";

/// Marker class on an accordion that may keep several items open.
pub const MULTIPLE: &str = "multiple";
pub const ACTIVE: &str = "active";
pub const EXPANDED: &str = "expanded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Toggle the accordion item owning the clicked header.
    ToggleAccordionItem,
    /// Expand or collapse the enclosing solution card.
    ToggleSolutionCard,
}

/// Attach accordion handlers to every header under `container`.
///
/// Returns the number of headers wired.
pub fn wire_accordion(doc: &mut Document, container: NodeId) -> Result<usize> {
    let headers = doc.select_within(container, &Selector::class(ACCORDION_HEADER));
    for header in &headers {
        doc.add_click_handler(*header, ClickAction::ToggleAccordionItem)?;
    }
    Ok(headers.len())
}

pub fn wire_solution_toggles(doc: &mut Document, container: NodeId) -> Result<usize> {
    let toggles = doc.select_within(container, &Selector::class(SOLUTION_TOGGLE));
    for toggle in &toggles {
        doc.add_click_handler(*toggle, ClickAction::ToggleSolutionCard)?;
    }
    Ok(toggles.len())
}

/// Dispatch a click on `target`, bubbling through its ancestors.
///
/// Returns the number of handlers that ran.
pub fn click(doc: &mut Document, target: NodeId) -> Result<usize> {
    let mut path = vec![];
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node);
        current = doc.parent(node);
    }

    let mut ran = 0;
    for node in path {
        let actions = doc.click_handlers(node).to_vec();
        for action in actions {
            run(doc, node, action)?;
            ran += 1;
        }
    }
    Ok(ran)
}

fn run(doc: &mut Document, owner: NodeId, action: ClickAction) -> Result<()> {
    match action {
        ClickAction::ToggleAccordionItem => toggle_accordion_item(doc, owner),
        ClickAction::ToggleSolutionCard => toggle_solution_card(doc, owner),
    }
}

fn toggle_accordion_item(doc: &mut Document, header: NodeId) -> Result<()> {
    let Some(item) = doc.parent(header) else {
        return Ok(());
    };
    if let Some(accordion) = doc.parent(item)
        && !doc.has_class(accordion, MULTIPLE)
    {
        for other in doc.select_within(accordion, &Selector::class(ACCORDION_ITEM)) {
            if other != item {
                doc.remove_class(other, ACTIVE)?;
            }
        }
    }
    doc.toggle_class(item, ACTIVE)?;
    Ok(())
}

fn toggle_solution_card(doc: &mut Document, toggle: NodeId) -> Result<()> {
    let Some(card) = doc.closest(toggle, &Selector::class(SOLUTION_CARD)) else {
        return Ok(());
    };
    let expanded = doc.toggle_class(card, EXPANDED)?;
    doc.set_text(toggle, if expanded { "Show Less" } else { "Learn More" })
}
