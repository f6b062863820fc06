//! Personal info, contact details and social links.

use super::{RenderContext, Result, checked_href, marker, rebuild, replace_text};
use crate::dom::Selector;
use crate::markup::{Markup, el, icon};
use folio_config::types::{ContactInfo, PersonalInfo, SocialLinks};

/// Class hiding an element until it has content.
pub const HIDDEN: &str = "hidden";

pub fn render_personal(personal: &PersonalInfo, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let doc = &mut *ctx.doc;
    let fields = [
        ("name", &personal.name),
        ("firstName", &personal.first_name),
        ("lastName", &personal.last_name),
        ("title", &personal.title),
        ("tagline", &personal.tagline),
        ("shortBio", &personal.short_bio),
        ("yearsExperience", &personal.years_experience),
        ("location", &personal.location),
    ];
    let mut touched = 0;
    for (name, value) in fields {
        touched += replace_text(doc, name, value)?;
    }

    let paragraphs: Vec<Markup> = bio_paragraphs(&personal.full_bio)
        .map(|p| el("p").with_text(p))
        .collect();
    touched += rebuild(doc, "fullBio", &paragraphs)?.len();

    Ok(touched)
}

/// Paragraphs of a bio, separated by blank lines.
fn bio_paragraphs(bio: &str) -> impl Iterator<Item = &str> {
    bio.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

pub fn render_contact(contact: &ContactInfo, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let doc = &mut *ctx.doc;
    let mut touched = replace_text(doc, "email", &contact.email)?
        + replace_text(doc, "phone", &contact.phone)?
        + replace_text(doc, "responseTime", &contact.response_time)?;

    for link in doc.select(&marker("emailLink")) {
        doc.set_attr(link, "href", &format!("mailto:{}", contact.email))?;
        doc.set_text(link, &contact.email)?;
        touched += 1;
    }

    let tel: String = contact
        .phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    for link in doc.select(&marker("phoneLink")) {
        let item = doc.closest(link, &Selector::class("contact-info-item"));
        if contact.phone.is_empty() {
            if let Some(item) = item {
                doc.add_class(item, HIDDEN)?;
            }
            continue;
        }
        doc.set_attr(link, "href", &format!("tel:{tel}"))?;
        doc.set_text(link, &contact.phone)?;
        if let Some(item) = item {
            doc.remove_class(item, HIDDEN)?;
        }
        touched += 1;
    }

    Ok(touched)
}

/// Rebuild every social link container, one link per configured platform.
///
/// Containers are cleared even when no platform is configured.
pub fn render_social(social: &SocialLinks, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let mut links = vec![];
    for (key, icon_class, url) in social.platforms() {
        if url.is_empty() {
            continue;
        }
        let href = checked_href(&format!("social.{key}"), url)?;
        links.push(
            el("a")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("aria-label", key)
                .child(icon(icon_class)),
        );
    }

    let doc = &mut *ctx.doc;
    let containers = doc.select(&marker("socialLinks"));
    for id in &containers {
        doc.replace_children(*id, links.iter().cloned())?;
    }
    Ok(containers.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::effects::NoEffects;
    use crate::html::{inner_html, parse};
    use crate::render::RenderError;

    fn ctx_run<T>(
        doc: &mut Document,
        f: impl FnOnce(&mut RenderContext<'_>) -> Result<T>,
    ) -> Result<T> {
        let mut fx = NoEffects;
        f(&mut RenderContext::new(doc, &mut fx, 2025))
    }

    #[test]
    fn test_personal_fields_and_bio() {
        let mut doc = parse(
            r#"<h1 data-template="name">X</h1><span data-template="location">Y</span>
               <div data-template="fullBio"><p>old</p></div>"#,
        );
        let mut personal = PersonalInfo::default();
        personal.name = "Jane Doe".into();
        personal.full_bio = "First.\n\nSecond.\n\n".into();

        let touched = ctx_run(&mut doc, |ctx| render_personal(&personal, ctx)).unwrap();
        assert_eq!(touched, 3);

        let name = doc.select_first(&marker("name")).unwrap();
        assert_eq!(doc.text_content(name), "Jane Doe");
        let bio = doc.select_first(&marker("fullBio")).unwrap();
        assert_eq!(inner_html(&doc, bio), "<p>First.</p><p>Second.</p>");
    }

    #[test]
    fn test_contact_links() {
        let mut doc = parse(
            r#"<a data-template="emailLink">x</a>
               <div class="contact-info-item hidden"><a data-template="phoneLink">p</a></div>"#,
        );
        let mut contact = ContactInfo::default();
        contact.email = "jane@example.com".into();
        contact.phone = "+1 (555) 010-2030".into();

        ctx_run(&mut doc, |ctx| render_contact(&contact, ctx)).unwrap();

        let email = doc.select_first(&marker("emailLink")).unwrap();
        assert_eq!(doc.attr(email, "href"), Some("mailto:jane@example.com"));
        assert_eq!(doc.text_content(email), "jane@example.com");

        let phone = doc.select_first(&marker("phoneLink")).unwrap();
        assert_eq!(doc.attr(phone, "href"), Some("tel:15550102030"));
        let item = doc
            .select_first(&Selector::class("contact-info-item"))
            .unwrap();
        assert!(!doc.has_class(item, HIDDEN));

        contact.phone.clear();
        ctx_run(&mut doc, |ctx| render_contact(&contact, ctx)).unwrap();
        assert!(doc.has_class(item, HIDDEN));
    }

    #[test]
    fn test_social_links_in_fixed_order() {
        let mut doc = parse(
            r#"<div data-template="socialLinks"><a href="stale">s</a></div>
               <footer><div data-template="socialLinks"></div></footer>"#,
        );
        let social = SocialLinks {
            github: "https://github.com/jane".into(),
            linkedin: "https://linkedin.com/in/jane".into(),
            ..SocialLinks::default()
        };

        let touched = ctx_run(&mut doc, |ctx| render_social(&social, ctx)).unwrap();
        assert_eq!(touched, 2);

        for container in doc.select(&marker("socialLinks")) {
            let hrefs: Vec<_> = doc
                .select_within(container, &Selector::tag("a"))
                .into_iter()
                .filter_map(|a| doc.attr(a, "href").map(str::to_string))
                .collect();
            assert_eq!(
                hrefs,
                ["https://linkedin.com/in/jane", "https://github.com/jane"]
            );
        }
    }

    #[test]
    fn test_unsafe_social_link_fails_the_section() {
        let mut doc = parse(r#"<div data-template="socialLinks"><a href="ok">s</a></div>"#);
        let social = SocialLinks {
            twitter: "javascript:alert(1)".into(),
            ..SocialLinks::default()
        };
        let err = ctx_run(&mut doc, |ctx| render_social(&social, ctx)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnsafeUrl { ref field, .. } if field == "social.twitter"
        ));

        let container = doc.select_first(&marker("socialLinks")).unwrap();
        assert_eq!(doc.text_content(container), "s");
    }
}
