use super::{RenderContext, Result, rebuild, replace_text};
use crate::dom::Selector;
use crate::markup::{el, icon};
use folio_config::types::{Audit, ContactInfo};

pub const BOOKING_EMBED_ID: &str = "calendlyEmbed";
pub const AUDIT_FORM_ID: &str = "auditFormContainer";
pub const BOOKING_WIDGET_CLASS: &str = "calendly-inline-widget";

/// Audit copy, benefit list and the booking widget switch.
///
/// With a booking URL the embed is shown and the fallback form hidden;
/// without one the form is shown instead.
pub fn render(audit: &Audit, contact: &ContactInfo, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let doc = &mut *ctx.doc;
    let mut touched = replace_text(doc, "auditTitle", &audit.title)?
        + replace_text(doc, "auditSubtitle", &audit.subtitle)?
        + replace_text(doc, "auditDescription", &audit.description)?
        + replace_text(doc, "auditDuration", &audit.duration)?;

    let benefits: Vec<_> = audit
        .benefits
        .iter()
        .map(|b| {
            el("div").class("audit-benefit-item").children([
                el("div").class("icon").child(icon(&b.icon)),
                el("div").children([
                    el("h5").with_text(&b.title),
                    el("p").with_text(&b.description),
                ]),
            ])
        })
        .collect();
    touched += rebuild(doc, "auditBenefits", &benefits)?.len();

    let booking = !contact.calendly_url.is_empty();
    let (embed_display, form_display) = if booking {
        ("block", "none")
    } else {
        ("none", "block")
    };

    if let Some(embed) = doc.select_first(&Selector::id(BOOKING_EMBED_ID)) {
        doc.set_style_property(embed, "display", embed_display)?;
        if let Some(widget) = doc.select_first_within(embed, &Selector::class(BOOKING_WIDGET_CLASS))
        {
            if booking {
                doc.set_attr(widget, "data-url", &contact.calendly_url)?;
            } else {
                doc.remove_attr(widget, "data-url")?;
            }
        }
        touched += 1;
    }
    if let Some(form) = doc.select_first(&Selector::id(AUDIT_FORM_ID)) {
        doc.set_style_property(form, "display", form_display)?;
        touched += 1;
    }

    Ok(touched)
}
