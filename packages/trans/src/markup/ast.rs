//! Markup AST
//!
//! Node tree produced by a [`MarkupParser`](super::MarkupParser).

/// Markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text(Text),
    Element(Element),
    Comment(Comment),
}

/// Text node; `content` is kept as written (entities not decoded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

/// Attribute; `value` is `None` for bare attributes such as `disabled`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// Element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<MarkupNode>,
    /// Written as `<name/>` or a void HTML element; serialized without a
    /// closing tag
    pub void_element: bool,
}

/// Comment node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub content: String,
}

impl MarkupNode {
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text(Text {
            content: content.into(),
        })
    }

    pub fn element(name: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element(Element {
            name: name.into(),
            attrs: Vec::new(),
            children,
            void_element: false,
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }
}

/// HTML elements that never have content or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|v| v.eq_ignore_ascii_case(name))
}
