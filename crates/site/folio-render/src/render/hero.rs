use super::{RenderContext, Result, checked_href, css_url, rebuild};
use crate::effects::Carousel;
use crate::markup::{Markup, el};
use folio_config::types::HeroSlide;

pub fn render(slides: &[HeroSlide], ctx: &mut RenderContext<'_>) -> Result<usize> {
    let markup = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| slide_markup(i, slide))
        .collect::<Result<Vec<_>>>()?;

    let containers = rebuild(ctx.doc, "heroSlides", &markup)?;
    for id in &containers {
        ctx.effects.mount_carousel(*id, Carousel::HeroSlider);
    }
    Ok(containers.len())
}

fn slide_markup(index: usize, slide: &HeroSlide) -> Result<Markup> {
    let link = checked_href(&format!("heroSlides[{index}].buttonLink"), &slide.button_link)?;
    Ok(el("div").class("swiper-slide").children([
        el("div")
            .class("hero-slide-bg")
            .attr("style", format!("background-image: {};", css_url(&slide.image)))
            .attr("data-overlay", "5"),
        el("div").class("hero-content").children([
            el("span")
                .class("sub-title mgc-up")
                .with_text(&slide.subtitle),
            el("h1")
                .class("title mgc-up")
                .attr("data-delay", "100")
                .with_text(&slide.title),
            el("p")
                .class("description mgc-up")
                .attr("data-delay", "200")
                .with_text(&slide.description),
            el("a")
                .attr("href", link)
                .class("btn mgc-up")
                .attr("data-delay", "300")
                .with_text(&slide.button_text),
        ]),
    ]))
}
