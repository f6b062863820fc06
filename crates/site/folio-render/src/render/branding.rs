use super::{RenderContext, Result, rebuild};
use crate::dom::{Selector, is_plain_style_value};
use crate::markup::el;
use folio_config::types::Branding;

/// Class on `<body>` selecting the light palette.
pub const LIGHT_THEME_CLASS: &str = "v-light";

/// Theme variables, light theme marker, logo and favicon.
pub fn render(branding: &Branding, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let doc = &mut *ctx.doc;
    let mut touched = 0;

    if let Some(root) = doc.select_first(&Selector::tag("html")) {
        let mut any = false;
        for (var, value) in branding.colors.variables() {
            if value.is_empty() {
                continue;
            }
            if !is_plain_style_value(value) {
                tracing::warn!("ignoring {var} value that is not a single CSS value: {value:?}");
                continue;
            }
            doc.set_style_property(root, var, value)?;
            any = true;
        }
        touched += usize::from(any);
    }

    if let Some(body) = doc.select_first(&Selector::tag("body")) {
        if branding.light_theme {
            doc.add_class(body, LIGHT_THEME_CLASS)?;
        } else {
            doc.remove_class(body, LIGHT_THEME_CLASS)?;
        }
        touched += 1;
    }

    let logo = if branding.logo_url.is_empty() {
        el("span")
            .class("text-logo")
            .with_text(&branding.site_name)
    } else {
        el("img")
            .attr("src", &branding.logo_url)
            .attr("alt", &branding.site_name)
    };
    touched += rebuild(doc, "logo", &[logo])?.len();

    if !branding.favicon_url.is_empty()
        && let Some(icon) = doc.select_first(&Selector::tag("link").with_attr("rel", "icon"))
    {
        doc.set_attr(icon, "href", &branding.favicon_url)?;
        touched += 1;
    }

    Ok(touched)
}
