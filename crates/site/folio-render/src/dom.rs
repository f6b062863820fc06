//! Arena-backed document tree.
//!
//! Nodes live in a single arena addressed by [`NodeId`]. Replacing an element's
//! children frees the old subtree, including any click handlers attached to it.
//! Freed slots are reused, but each reuse bumps the slot generation, so ids of
//! removed nodes stop resolving instead of pointing at new content.

use crate::interact::ClickAction;
use crate::markup::Markup;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0:?} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("style value for {property} is not a single declaration: {value:?}")]
    InvalidStyleValue { property: String, value: String },
}

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Doctype(String),
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: &str, attrs: Vec<(String, String)>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A simple selector: every part that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
    attr: Option<(String, String)>,
}

impl Selector {
    pub fn tag(tag: &str) -> Self {
        Self::default().with_tag(tag)
    }

    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn class(class: &str) -> Self {
        Self::default().with_class(class)
    }

    /// Attribute equality, as in `[name="value"]`.
    pub fn attr(name: &str, value: &str) -> Self {
        Self::default().with_attr(name, value)
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_ascii_lowercase());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attr = Some((name.to_string(), value.to_string()));
        self
    }

    pub fn matches(&self, el: &Element) -> bool {
        self.tag.as_deref().is_none_or(|t| el.tag == t)
            && self.id.as_deref().is_none_or(|id| el.attr("id") == Some(id))
            && self.class.as_deref().is_none_or(|c| el.has_class(c))
            && self
                .attr
                .as_ref()
                .is_none_or(|(k, v)| el.attr(k) == Some(v.as_str()))
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    handlers: HashMap<NodeId, Vec<ClickAction>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only the root node.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node {
                    kind: NodeKind::Document,
                    parent: None,
                    children: vec![],
                }),
            }],
            free: vec![],
            root: NodeId {
                index: 0,
                generation: 0,
            },
            handlers: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(DomError::UnknownNode(id))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(el) => Ok(el),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).ok().map(|n| &n.kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.kind(id)? {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::tag)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId> {
        self.node(parent)?;
        let node = Node {
            kind,
            parent: Some(parent),
            children: vec![],
        };
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// All descendants of `scope` in document order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = vec![];
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.element(id).is_some_and(|el| selector.matches(el))
    }

    /// Every matching element in the document, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.select_within(self.root, selector)
    }

    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.select_first_within(self.root, selector)
    }

    pub fn select_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    pub fn select_first_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| self.matches(*id, selector))
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.matches(node, selector) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Result<()> {
        self.element_mut(id)?.remove_attr(name);
        Ok(())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// Add a class. Adding one that is already present changes nothing.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let el = self.element_mut(id)?;
        if el.has_class(class) {
            return Ok(());
        }
        let classes = match el.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        el.set_attr("class", &classes);
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let el = self.element_mut(id)?;
        if !el.has_class(class) {
            return Ok(());
        }
        let remaining: Vec<&str> = el
            .attr("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        let remaining = remaining.join(" ");
        el.set_attr("class", &remaining);
        Ok(())
    }

    /// Flip a class and return whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> Result<bool> {
        if self.has_class(id, class) {
            self.remove_class(id, class)?;
            Ok(false)
        } else {
            self.add_class(id, class)?;
            Ok(true)
        }
    }

    /// Value of one inline style declaration.
    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        let style = self.attr(id, "style")?;
        parse_style(style)
            .into_iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    /// Set one inline style declaration, keeping the others in place.
    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) -> Result<()> {
        let el = self.element_mut(id)?;
        if !is_plain_style_value(value) {
            return Err(DomError::InvalidStyleValue {
                property: property.to_string(),
                value: value.to_string(),
            });
        }
        let mut declarations = parse_style(el.attr("style").unwrap_or_default());
        match declarations.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => value.clone_into(v),
            None => declarations.push((property.to_string(), value.to_string())),
        }
        let style = declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        el.set_attr("style", &style);
        Ok(())
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeKind::Text(t)) = self.kind(id) {
            out.push_str(t);
        }
        for node in self.descendants(id) {
            if let Some(NodeKind::Text(t)) = self.kind(node) {
                out.push_str(t);
            }
        }
        out
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<()> {
        self.replace_children(id, [Markup::Text(text.to_string())])?;
        Ok(())
    }

    /// Replace all children with freshly built nodes.
    ///
    /// Returns the ids of the new top-level nodes.
    pub fn replace_children(
        &mut self,
        id: NodeId,
        markup: impl IntoIterator<Item = Markup>,
    ) -> Result<Vec<NodeId>> {
        self.element_mut(id)?;
        let old = std::mem::take(&mut self.node_mut(id)?.children);
        for child in old {
            self.free_subtree(child);
        }
        markup
            .into_iter()
            .map(|m| self.build(id, m))
            .collect()
    }

    fn build(&mut self, parent: NodeId, markup: Markup) -> Result<NodeId> {
        match markup {
            Markup::Text(t) => self.append(parent, NodeKind::Text(t)),
            Markup::Element {
                tag,
                attrs,
                children,
            } => {
                let id = self.append(parent, NodeKind::Element(Element::new(&tag, attrs)))?;
                for child in children {
                    self.build(id, child)?;
                }
                Ok(id)
            }
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            self.handlers.remove(&current);
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index);
                stack.extend(node.children);
            }
        }
    }

    /// Attach a click handler to an element.
    pub fn add_click_handler(&mut self, id: NodeId, action: ClickAction) -> Result<()> {
        self.element_mut(id)?;
        self.handlers.entry(id).or_default().push(action);
        Ok(())
    }

    pub fn click_handlers(&self, id: NodeId) -> &[ClickAction] {
        self.handlers.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Number of arena slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of handlers attached across the whole document.
    pub fn handler_count(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }
}

/// Split an inline style into declarations.
///
/// `;` inside quotes or parentheses belongs to the value, so
/// `url('a.jpg?x=1;y=2')` stays one declaration.
fn parse_style(style: &str) -> Vec<(String, String)> {
    split_declarations(style)
        .into_iter()
        .filter_map(|decl| {
            let (p, v) = decl.split_once(':')?;
            let p = p.trim();
            (!p.is_empty()).then(|| (p.to_string(), v.trim().to_string()))
        })
        .collect()
}

fn split_declarations(style: &str) -> Vec<&str> {
    let mut out = vec![];
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;
    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (c, quote) {
            ('\\', _) => escaped = true,
            (q @ ('\'' | '"'), None) => quote = Some(q),
            (q, Some(open)) if q == open => quote = None,
            (_, Some(_)) => {}
            ('(', None) => depth += 1,
            (')', None) => depth = depth.saturating_sub(1),
            (';', None) if depth == 0 => {
                out.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&style[start..]);
    out
}

/// Whether `value` can be written as one declaration and read back unchanged.
pub fn is_plain_style_value(value: &str) -> bool {
    split_declarations(value).len() == 1 && !value.contains(['{', '}', '<', '>'])
}
