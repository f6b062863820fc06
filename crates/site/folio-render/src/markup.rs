//! Owned markup fragments built by renderers.
//!
//! Renderers never interpolate strings into HTML: they build a [`Markup`] tree
//! and hand it to [`Document::replace_children`](crate::dom::Document::replace_children).
//! Text is stored as-is and escaped on serialization.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Markup>,
    },
    Text(String),
}

/// Start an element.
pub fn el(tag: &str) -> Markup {
    Markup::Element {
        tag: tag.to_string(),
        attrs: vec![],
        children: vec![],
    }
}

/// A text node.
pub fn text(t: impl Into<String>) -> Markup {
    Markup::Text(t.into())
}

impl Markup {
    /// Set an attribute. No-op on text nodes.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.to_string(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn child(mut self, child: Markup) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    #[must_use]
    pub fn children(mut self, items: impl IntoIterator<Item = Markup>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(items);
        }
        self
    }

    #[must_use]
    pub fn with_text(self, t: impl Into<String>) -> Self {
        self.child(text(t))
    }
}

/// `<i class="...">` icon element.
pub fn icon(class: &str) -> Markup {
    el("i").class(class)
}

/// Two-digit, one-based ordinal as shown on numbered cards.
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_attrs_and_children() {
        let m = el("a")
            .attr("href", "https://x.test")
            .class("btn")
            .with_text("Go")
            .child(icon("fas fa-plus"));

        let Markup::Element {
            tag,
            attrs,
            children,
        } = m
        else {
            panic!("expected element");
        };
        assert_eq!(tag, "a");
        assert_eq!(attrs.len(), 2);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], text("Go"));
    }

    #[test]
    fn test_attr_on_text_is_ignored() {
        assert_eq!(text("x").attr("id", "y"), text("x"));
    }

    #[test]
    fn test_ordinal_is_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(11), "12");
    }
}
