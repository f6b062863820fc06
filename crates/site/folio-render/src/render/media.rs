use super::{IMAGE_ATTR, RenderContext, Result, css_url};
use crate::dom::Selector;
use std::collections::BTreeMap;

/// Bind every image slot. `<img>` elements get a `src`; any other element
/// gets a background image.
pub fn render(images: &BTreeMap<String, String>, ctx: &mut RenderContext<'_>) -> Result<usize> {
    let doc = &mut *ctx.doc;
    let mut touched = 0;
    for (slot, url) in images {
        if url.is_empty() {
            continue;
        }
        for id in doc.select(&Selector::attr(IMAGE_ATTR, slot)) {
            if doc.tag(id) == Some("img") {
                doc.set_attr(id, "src", url)?;
            } else {
                doc.set_style_property(id, "background-image", &css_url(url))?;
            }
            touched += 1;
        }
    }
    Ok(touched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;
    use crate::html::parse;

    #[test]
    fn test_element_kind_decides_binding() {
        let mut doc = parse(
            r#"<img data-template-image="aboutImage" src="old.jpg">
               <div data-template-image="aboutImage" style="height: 10px"></div>
               <section data-template-image="parallaxImage1"></section>"#,
        );
        let images = BTreeMap::from([
            ("aboutImage".to_string(), "https://img.test/about.jpg".to_string()),
            ("parallaxImage1".to_string(), String::new()),
        ]);
        let mut fx = NoEffects;
        let touched = render(&images, &mut RenderContext::new(&mut doc, &mut fx, 2025)).unwrap();
        assert_eq!(touched, 2);

        let img = doc.select_first(&Selector::tag("img")).unwrap();
        assert_eq!(doc.attr(img, "src"), Some("https://img.test/about.jpg"));
        assert_eq!(doc.attr(img, "style"), None);

        let div = doc.select_first(&Selector::tag("div")).unwrap();
        assert_eq!(
            doc.attr(div, "style"),
            Some("height: 10px; background-image: url('https://img.test/about.jpg');")
        );

        let section = doc.select_first(&Selector::tag("section")).unwrap();
        assert_eq!(doc.attr(section, "style"), None);
    }

    #[test]
    fn test_rebinding_replaces_background() {
        let mut doc = parse(r#"<div data-template-image="heroBackground"></div>"#);
        let mut fx = NoEffects;
        for url in ["a.jpg", "b.jpg"] {
            let images = BTreeMap::from([("heroBackground".to_string(), url.to_string())]);
            render(&images, &mut RenderContext::new(&mut doc, &mut fx, 2025)).unwrap();
        }
        let div = doc.select_first(&Selector::tag("div")).unwrap();
        assert_eq!(doc.attr(div, "style"), Some("background-image: url('b.jpg');"));
    }

    #[test]
    fn test_url_with_semicolon_rerenders_identically() {
        let mut doc =
            parse(r#"<div data-template-image="heroBackground" style="height: 10px"></div>"#);
        let images = BTreeMap::from([(
            "heroBackground".to_string(),
            "https://cdn.test/img.jpg?a=1;b=http://x.test/y".to_string(),
        )]);
        let mut fx = NoEffects;
        let mut styles = vec![];
        for _ in 0..3 {
            render(&images, &mut RenderContext::new(&mut doc, &mut fx, 2025)).unwrap();
            let div = doc.select_first(&Selector::tag("div")).unwrap();
            styles.push(doc.attr(div, "style").unwrap_or_default().to_string());
        }
        assert_eq!(
            styles[0],
            "height: 10px; background-image: url('https://cdn.test/img.jpg?a=1;b=http://x.test/y');"
        );
        assert_eq!(styles[1], styles[0]);
        assert_eq!(styles[2], styles[0]);
    }
}
