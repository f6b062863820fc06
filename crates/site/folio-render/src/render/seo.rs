//! Document metadata and the footer.

use super::{RenderContext, Result, replace_text};
use crate::dom::{Document, Selector};
use folio_config::types::{Footer, Seo};

/// Title for a page given its current title.
///
/// The segment before the first `|` is the page name. With a page name the
/// result is `"{page} | {site_title}"`, otherwise just the site title.
pub fn page_title(current: &str, site_title: &str) -> String {
    let page = current.split('|').next().unwrap_or_default().trim();
    if page.is_empty() {
        site_title.to_string()
    } else {
        format!("{page} | {site_title}")
    }
}

pub fn render_seo(seo: &Seo, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let doc = &mut *ctx.doc;
    let mut touched = 0;

    if !seo.site_title.is_empty()
        && let Some(title) = doc.select_first(&Selector::tag("title"))
    {
        let next = page_title(&doc.text_content(title), &seo.site_title);
        doc.set_text(title, &next)?;
        touched += 1;
    }

    touched += set_meta(doc, Selector::attr("name", "description"), &seo.site_description)?;
    touched += set_meta(doc, Selector::attr("name", "keywords"), &seo.keywords)?;
    touched += set_meta(doc, Selector::attr("property", "og:image"), &seo.og_image)?;

    Ok(touched)
}

/// Set the `content` of an existing meta tag. Tags are never created.
fn set_meta(doc: &mut Document, selector: Selector, content: &str) -> Result<usize> {
    if content.is_empty() {
        return Ok(0);
    }
    match doc.select_first(&selector.with_tag("meta")) {
        Some(meta) => {
            doc.set_attr(meta, "content", content)?;
            Ok(1)
        }
        None => Ok(0),
    }
}

pub fn render_footer(footer: &Footer, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let mut touched = replace_text(ctx.doc, "footerTagline", &footer.tagline)?;
    if !footer.copyright.is_empty() {
        let line = format!(
            "\u{a9} {} {}. All Rights Reserved.",
            ctx.year, footer.copyright
        );
        touched += replace_text(ctx.doc, "copyright", &line)?;
    }
    Ok(touched)
}
