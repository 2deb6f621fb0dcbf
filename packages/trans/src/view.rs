//! View tree
//!
//! The rendered output of a tag-mapped translation: plain text, elements
//! and fragments, the way a UI layer would receive them.

use crate::markup::entities::{escape_attribute, escape_text};
use crate::markup::{decode_html_entities, is_void_element, MarkupNode};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Text(String),
    Element(ViewElement),
    Fragment(Vec<ViewNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewElement {
    pub name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<ViewNode>,
}

impl ViewElement {
    pub fn new(name: impl Into<String>) -> Self {
        ViewElement {
            name: name.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ViewNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_children(vec![ViewNode::Text(text.into())])
    }
}

impl From<ViewElement> for ViewNode {
    fn from(el: ViewElement) -> Self {
        ViewNode::Element(el)
    }
}

impl From<&str> for ViewNode {
    fn from(text: &str) -> Self {
        ViewNode::Text(text.to_string())
    }
}

impl From<String> for ViewNode {
    fn from(text: String) -> Self {
        ViewNode::Text(text)
    }
}

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ViewNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&ViewElement> {
        match self {
            ViewNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(std::slice::from_ref(self), &mut out);
        out
    }

    /// Serializes the node as markup with text escaped
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_markup(self, &mut out);
        out
    }
}

/// Serializes a list of view nodes as markup
pub fn nodes_to_markup(nodes: &[ViewNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_markup(node, &mut out);
    }
    out
}

/// Concatenated text of a list of view nodes
pub fn nodes_text_content(nodes: &[ViewNode]) -> String {
    let mut out = String::new();
    collect_text(nodes, &mut out);
    out
}

/// Converts parsed markup into view nodes. Text has entities decoded,
/// bare attributes get an empty value and comments are dropped.
pub fn nodes_from_markup(nodes: &[MarkupNode]) -> Vec<ViewNode> {
    nodes
        .iter()
        .filter_map(|node| match node {
            MarkupNode::Text(text) => Some(ViewNode::Text(decode_html_entities(&text.content))),
            MarkupNode::Comment(_) => None,
            MarkupNode::Element(el) => Some(ViewNode::Element(ViewElement {
                name: el.name.clone(),
                attrs: el
                    .attrs
                    .iter()
                    .map(|attr| (attr.name.clone(), attr.value.clone().unwrap_or_default()))
                    .collect(),
                children: nodes_from_markup(&el.children),
            })),
        })
        .collect()
}

fn collect_text(nodes: &[ViewNode], out: &mut String) {
    for node in nodes {
        match node {
            ViewNode::Text(text) => out.push_str(text),
            ViewNode::Element(el) => collect_text(&el.children, out),
            ViewNode::Fragment(children) => collect_text(children, out),
        }
    }
}

fn write_markup(node: &ViewNode, out: &mut String) {
    match node {
        ViewNode::Text(text) => out.push_str(&escape_text(text)),
        ViewNode::Fragment(children) => {
            for child in children {
                write_markup(child, out);
            }
        }
        ViewNode::Element(el) => {
            out.push('<');
            out.push_str(&el.name);
            for (name, value) in &el.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push('"');
            }
            if el.children.is_empty() && is_void_element(&el.name) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &el.children {
                write_markup(child, out);
            }
            out.push_str("</");
            out.push_str(&el.name);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_markup_escapes_text_and_attributes() {
        let node = ViewNode::Fragment(vec![
            ViewNode::text("1 < 2 & "),
            ViewElement::new("a")
                .with_attr("href", "/q?a=\"x\"")
                .with_text("link")
                .into(),
            ViewElement::new("br").into(),
        ]);
        assert_eq!(
            node.to_markup(),
            "1 &lt; 2 &amp; <a href=\"/q?a=&quot;x&quot;\">link</a><br/>"
        );
        assert_eq!(node.text_content(), "1 < 2 & link");
    }

    #[test]
    fn test_nodes_from_markup_decodes_text_once() {
        let markup = vec![
            MarkupNode::text("Tom &amp; "),
            MarkupNode::element("i", vec![MarkupNode::text("Jerry")]),
        ];
        let nodes = nodes_from_markup(&markup);
        assert_eq!(
            nodes,
            vec![
                ViewNode::text("Tom & "),
                ViewElement::new("i").with_text("Jerry").into(),
            ]
        );
        assert_eq!(nodes_to_markup(&nodes), "Tom &amp; <i>Jerry</i>");
    }

    #[test]
    fn test_empty_non_void_element_keeps_closing_tag() {
        assert_eq!(ViewNode::from(ViewElement::new("span")).to_markup(), "<span></span>");
    }
}
