//! Trans renderer
//!
//! Chooses a rendering mode from the props:
//!
//! - `components` set: the translation's `<name>` tags are replaced by the
//!   mapped components; unmapped tags collapse to their inner text.
//! - text children: the text is the default value for the key.
//! - node children (or none): `<N>` tags are mapped onto the caller's N-th
//!   child, see [`crate::jsx`].

use crate::error::TransError;
use crate::jsx;
use crate::markup::{
    decode_html_entities, default_parser, stringify, text_content, MarkupNode, MarkupParser,
};
use crate::view::{nodes_to_markup, nodes_text_content, ViewNode};
use i18lite::{I18n, TArg, TOptions};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::rc::Rc;

/// Tag wrapped around a translation before parsing
pub(crate) const ROOT_TAG: &str = "0";

static TAG_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z0-9_][A-Za-z0-9_:.\-]*(\s[^<>]*)?/?>").unwrap());

/// Replacement for a named tag in components mode
#[derive(Clone)]
pub enum TransComponent {
    /// Rendered as-is; the tag's inner content is discarded
    Element(ViewNode),
    /// Called with the tag's inner markup
    Render(Rc<dyn Fn(String) -> ViewNode>),
}

impl TransComponent {
    pub fn element(node: impl Into<ViewNode>) -> Self {
        TransComponent::Element(node.into())
    }

    pub fn render(render: impl Fn(String) -> ViewNode + 'static) -> Self {
        TransComponent::Render(Rc::new(render))
    }
}

impl fmt::Debug for TransComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransComponent::Element(node) => f.debug_tuple("Element").field(node).finish(),
            TransComponent::Render(_) => f.write_str("Render(..)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum TransChildren {
    #[default]
    None,
    Text(String),
    Nodes(Vec<ViewNode>),
}

#[derive(Debug, Clone, Default)]
pub struct TransProps {
    pub key: String,
    pub options: Option<TOptions>,
    pub components: Option<IndexMap<String, TransComponent>>,
    pub children: TransChildren,
}

impl TransProps {
    pub fn new(key: impl Into<String>) -> Self {
        TransProps {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: TOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_component(mut self, name: impl Into<String>, component: TransComponent) -> Self {
        self.components
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), component);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = TransChildren::Text(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ViewNode>) -> Self {
        self.children = TransChildren::Nodes(children);
        self
    }
}

/// Render result: the view nodes plus non-fatal errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderResult {
    pub nodes: Vec<ViewNode>,
    pub errors: Vec<TransError>,
}

impl RenderResult {
    pub fn new(nodes: Vec<ViewNode>, errors: Vec<TransError>) -> Self {
        RenderResult { nodes, errors }
    }

    pub fn text_content(&self) -> String {
        nodes_text_content(&self.nodes)
    }

    pub fn to_markup(&self) -> String {
        nodes_to_markup(&self.nodes)
    }
}

/// Renders [`TransProps`] against an instance
pub struct Trans<'a> {
    i18n: &'a I18n,
    parser: Option<Box<dyn MarkupParser>>,
}

impl<'a> Trans<'a> {
    /// Uses the built-in parser when the `html-parser` feature is enabled
    pub fn new(i18n: &'a I18n) -> Self {
        Trans {
            i18n,
            parser: default_parser(),
        }
    }

    pub fn with_parser(i18n: &'a I18n, parser: Box<dyn MarkupParser>) -> Self {
        Trans {
            i18n,
            parser: Some(parser),
        }
    }

    pub fn without_parser(i18n: &'a I18n) -> Self {
        Trans { i18n, parser: None }
    }

    pub fn i18n(&self) -> &'a I18n {
        self.i18n
    }

    pub fn has_parser(&self) -> bool {
        self.parser.is_some()
    }

    pub fn render(&self, props: &TransProps) -> RenderResult {
        let mut errors = Vec::new();
        let nodes = match (&props.components, &props.children) {
            (Some(components), _) => self.render_components(props, components, &mut errors),
            (None, TransChildren::Text(text)) => vec![ViewNode::Text(self.i18n.t(
                &props.key,
                TArg::Default(text.clone()),
                props.options.as_ref(),
            ))],
            (None, TransChildren::Nodes(children)) => {
                jsx::translate_jsx(self.i18n, self.parser(), props, children, &mut errors)
            }
            (None, TransChildren::None) => {
                jsx::translate_jsx(self.i18n, self.parser(), props, &[], &mut errors)
            }
        };
        RenderResult::new(nodes, errors)
    }

    fn parser(&self) -> Option<&dyn MarkupParser> {
        self.parser.as_deref()
    }

    fn render_components(
        &self,
        props: &TransProps,
        components: &IndexMap<String, TransComponent>,
        errors: &mut Vec<TransError>,
    ) -> Vec<ViewNode> {
        let translated = self.i18n.t(&props.key, TArg::from(props.options.clone()), None);

        let Some(parser) = self.parser() else {
            report_missing_parser(self.i18n, &props.key, errors);
            return vec![ViewNode::Text(strip_tags(&translated))];
        };

        let markup = parse_wrapped(parser, &props.key, &translated, errors);
        markup
            .iter()
            .filter_map(|node| match node {
                MarkupNode::Text(text) => Some(ViewNode::Text(decode_html_entities(&text.content))),
                MarkupNode::Comment(_) => None,
                MarkupNode::Element(el) => Some(match components.get(&el.name) {
                    Some(TransComponent::Render(render)) => render(stringify(&el.children)),
                    Some(TransComponent::Element(node)) => node.clone(),
                    None => ViewNode::Text(decode_html_entities(&text_content(&el.children))),
                }),
            })
            .collect()
    }
}

/// Parses `<0>{translated}</0>` and returns the wrapper's children.
/// Parser errors are recorded against `key`.
pub(crate) fn parse_wrapped(
    parser: &dyn MarkupParser,
    key: &str,
    translated: &str,
    errors: &mut Vec<TransError>,
) -> Vec<MarkupNode> {
    let parsed = parser.parse(&format!("<{0}>{1}</{0}>", ROOT_TAG, translated));
    errors.extend(parsed.errors.into_iter().map(|source| TransError::Markup {
        key: key.to_string(),
        source,
    }));

    let mut nodes = parsed.root_nodes;
    if nodes.len() == 1 && matches!(&nodes[0], MarkupNode::Element(el) if el.name == ROOT_TAG) {
        if let Some(MarkupNode::Element(root)) = nodes.pop() {
            return root.children;
        }
    }
    nodes
}

pub(crate) fn report_missing_parser(i18n: &I18n, key: &str, errors: &mut Vec<TransError>) {
    let err = TransError::MissingDependency {
        key: key.to_string(),
    };
    i18n.logger().warn(&err.to_string());
    errors.push(err);
}

/// Plain-text rendering of a tagged translation when no parser is available
pub(crate) fn strip_tags(markup: &str) -> String {
    decode_html_entities(&TAG_REGEXP.replace_all(markup, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<0>Hi</0> <b class=\"x\">there</b><br/> &amp; 1 < 2"),
            "Hi there & 1 < 2"
        );
    }

    #[test]
    fn test_props_builders() {
        let props = TransProps::new("k")
            .with_component("0", TransComponent::element(ViewNode::text("x")))
            .with_component("1", TransComponent::render(ViewNode::Text));
        let components = props.components.as_ref().unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(format!("{:?}", components["1"]), "Render(..)");
        assert!(matches!(props.children, TransChildren::None));
    }
}
