//! List-backed sections rendered into a single container each.
//!
//! An empty list never clears its container.

use super::{RenderContext, Result, rebuild};
use crate::effects::Carousel;
use crate::interact::{ACTIVE, wire_accordion, wire_solution_toggles};
use crate::markup::{Markup, el, icon, ordinal};
use folio_config::types::{
    PhilosophyItem, Problem, ProcessStep, Solution, Testimonial, TimelineEntry,
};

pub fn render_solutions(solutions: &[Solution], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let cards: Vec<_> = solutions
        .iter()
        .enumerate()
        .map(|(i, s)| solution_card(i, s))
        .collect();
    let containers = rebuild(ctx.doc, "solutions", &cards)?;
    for id in &containers {
        wire_solution_toggles(ctx.doc, *id)?;
    }
    Ok(containers.len())
}

fn solution_card(index: usize, solution: &Solution) -> Markup {
    el("div")
        .class("solution-card mgc-up")
        .attr("data-delay", (index * 100).to_string())
        .children([
            el("div").class("solution-number").with_text(ordinal(index)),
            el("div").class("solution-content").children([
                el("h4").with_text(&solution.title),
                el("p").with_text(&solution.description),
                el("div").class("solution-details").child(
                    el("ul")
                        .attr("style", "margin-top: 20px; color: var(--text-muted);")
                        .children(solution.features.iter().map(|f| {
                            el("li")
                                .attr("style", "margin-bottom: 10px;")
                                .with_text(format!("- {f}"))
                        })),
                ),
                el("div").class("solution-toggle").with_text("Learn More"),
            ]),
        ])
}

pub fn render_timeline(timeline: &[TimelineEntry], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let items: Vec<_> = timeline
        .iter()
        .map(|entry| {
            el("div").class("timeline-item").children([
                el("div").class("timeline-date").with_text(&entry.period),
                el("h4").class("timeline-title").with_text(&entry.title),
                el("div")
                    .class("timeline-content")
                    .child(el("p").with_text(&entry.description)),
            ])
        })
        .collect();
    Ok(rebuild(ctx.doc, "timeline", &items)?.len())
}

/// Numbered steps plus an accordion whose first item starts open.
pub fn render_process(steps: &[ProcessStep], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let summary: Vec<_> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            el("div").class("process-step").children([
                el("div").class("step-number").with_text((i + 1).to_string()),
                el("h5").with_text(&step.title),
                el("p").with_text(&step.short_desc),
            ])
        })
        .collect();
    let summaries = rebuild(ctx.doc, "processSteps", &summary)?;

    let accordion: Vec<_> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| process_item(i, step))
        .collect();
    let accordions = rebuild(ctx.doc, "processAccordion", &accordion)?;
    for id in &accordions {
        wire_accordion(ctx.doc, *id)?;
    }

    Ok(summaries.len() + accordions.len())
}

fn process_item(index: usize, step: &ProcessStep) -> Markup {
    let class = if index == 0 {
        format!("dsn-accordion-item {ACTIVE}")
    } else {
        "dsn-accordion-item".to_string()
    };
    el("div").class(&class).children([
        el("div")
            .class("step-number")
            .with_text((index + 1).to_string()),
        el("div").class("dsn-accordion-header").children([
            el("h4").class("dsn-accordion-title").with_text(&step.title),
            el("div")
                .class("dsn-accordion-icon")
                .child(icon("fas fa-plus")),
        ]),
        el("div").class("dsn-accordion-content").child(
            el("div").class("dsn-accordion-content-inner").children([
                el("p").with_text(&step.full_desc),
                el("ul")
                    .attr("style", "margin-top: 20px;")
                    .children(step.deliverables.iter().map(|d| el("li").with_text(d))),
            ]),
        ),
    ])
}

pub fn render_testimonials(
    testimonials: &[Testimonial],
    ctx: &mut RenderContext<'_>,
) -> Result<usize> {
    let cards: Vec<_> = testimonials.iter().map(testimonial_card).collect();
    let containers = rebuild(ctx.doc, "testimonials", &cards)?;
    for id in &containers {
        ctx.effects.mount_carousel(*id, Carousel::Testimonials);
    }
    Ok(containers.len())
}

fn testimonial_card(t: &Testimonial) -> Markup {
    let byline = if t.company.is_empty() {
        t.role.clone()
    } else {
        format!("{}, {}", t.role, t.company)
    };
    el("div").class("testimonial-card").children([
        el("p")
            .class("testimonial-text")
            .with_text(format!("\"{}\"", t.quote)),
        el("div").class("testimonial-author").child(
            el("div").class("testimonial-author-info").children([
                el("h6").with_text(&t.author),
                el("span").with_text(byline),
            ]),
        ),
    ])
}

pub fn render_philosophy(items: &[PhilosophyItem], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let markup: Vec<_> = items
        .iter()
        .map(|item| {
            el("div").class("philosophy-item").children([
                el("div").class("icon").child(icon(&item.icon)),
                el("h5").with_text(&item.title),
                el("p").with_text(&item.description),
            ])
        })
        .collect();
    Ok(rebuild(ctx.doc, "philosophy", &markup)?.len())
}

/// Problem and solution pairs as an accordion.
pub fn render_problems(problems: &[Problem], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let markup: Vec<_> = problems
        .iter()
        .map(|item| {
            el("div").class("dsn-accordion-item").children([
                el("div").class("dsn-accordion-header").children([
                    el("h5")
                        .class("dsn-accordion-title")
                        .with_text(&item.problem),
                    el("div")
                        .class("dsn-accordion-icon")
                        .child(icon("fas fa-plus")),
                ]),
                el("div").class("dsn-accordion-content").child(
                    el("div")
                        .class("dsn-accordion-content-inner")
                        .child(el("p").with_text(&item.solution)),
                ),
            ])
        })
        .collect();
    let containers = rebuild(ctx.doc, "problems", &markup)?;
    for id in &containers {
        wire_accordion(ctx.doc, *id)?;
    }
    Ok(containers.len())
}

pub fn render_gallery(images: &[String], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let markup: Vec<_> = images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            el("div").class("gallery-item").child(
                el("img")
                    .attr("src", src)
                    .attr("alt", format!("Gallery Image {}", i + 1)),
            )
        })
        .collect();
    Ok(rebuild(ctx.doc, "gallery", &markup)?.len())
}
