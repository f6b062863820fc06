//! Services appear three ways: an accordion, a numbered grid and a card slider.

use super::{RenderContext, Result, rebuild};
use crate::effects::Carousel;
use crate::interact::wire_accordion;
use crate::markup::{Markup, el, icon, ordinal};
use folio_config::types::Service;

pub fn render(services: &[Service], ctx: &mut RenderContext<'_>) -> Result<usize> {
    if services.is_empty() {
        return Ok(0);
    }

    let accordion: Vec<_> = services.iter().map(accordion_item).collect();
    let accordions = rebuild(ctx.doc, "servicesAccordion", &accordion)?;
    for id in &accordions {
        wire_accordion(ctx.doc, *id)?;
    }

    let grid: Vec<_> = services
        .iter()
        .enumerate()
        .map(|(i, s)| grid_card(i, s))
        .collect();
    let grids = rebuild(ctx.doc, "servicesGrid", &grid)?;

    let cards: Vec<_> = services.iter().map(slider_card).collect();
    let sliders = rebuild(ctx.doc, "cardSlider", &cards)?;
    for id in &sliders {
        ctx.effects.mount_carousel(*id, Carousel::CardSlider);
    }

    Ok(accordions.len() + grids.len() + sliders.len())
}

fn accordion_item(service: &Service) -> Markup {
    el("div").class("dsn-accordion-item").children([
        el("div").class("dsn-accordion-header").children([
            el("div").class("dsn-accordion-title").children([
                el("span").class("service-icon").child(icon(&service.icon)),
                el("span").class("service-name").with_text(&service.title),
            ]),
            el("div")
                .class("dsn-accordion-icon")
                .child(icon("fas fa-plus")),
        ]),
        el("div").class("dsn-accordion-content").child(
            el("div")
                .class("dsn-accordion-content-inner")
                .child(el("p").with_text(&service.full_desc)),
        ),
    ])
}

fn grid_card(index: usize, service: &Service) -> Markup {
    el("div")
        .class("service-card mgc-up")
        .attr("data-delay", (index * 100).to_string())
        .children([
            el("div").class("number").with_text(ordinal(index)),
            el("h4").with_text(&service.title),
            el("p").with_text(&service.short_desc),
            el("ul")
                .attr("style", "margin-top: 20px; color: var(--text-muted);")
                .children(service.features.iter().map(|f| {
                    el("li")
                        .attr("style", "margin-bottom: 8px;")
                        .with_text(format!("- {f}"))
                })),
        ])
}

fn slider_card(service: &Service) -> Markup {
    el("div").class("card-slider-item").children([
        el("div").class("icon").child(icon(&service.icon)),
        el("h4").class("card-title").with_text(&service.title),
        el("p").class("card-text").with_text(&service.short_desc),
    ])
}
