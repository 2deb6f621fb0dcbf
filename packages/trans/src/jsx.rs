//! Element-children translation
//!
//! When the key is translated, `<N>` tags in the translation are matched
//! to the caller's N-th child so the child keeps its element name and
//! attributes while taking the translated content. Otherwise the children
//! are returned with every interpolatable text run through `t`.

use crate::error::TransError;
use crate::markup::{decode_html_entities, text_content, Element, MarkupNode, MarkupParser};
use crate::trans::{parse_wrapped, report_missing_parser, TransProps};
use crate::view::{nodes_text_content, ViewElement, ViewNode};
use i18lite::{I18n, TArg, TOptions};

pub fn translate_jsx(
    i18n: &I18n,
    parser: Option<&dyn MarkupParser>,
    props: &TransProps,
    children: &[ViewNode],
    errors: &mut Vec<TransError>,
) -> Vec<ViewNode> {
    let options = props.options.as_ref();
    if !i18n.exists(&props.key, options) {
        return translate_with_interpolation(i18n, children, options);
    }

    let Some(parser) = parser else {
        report_missing_parser(i18n, &props.key, errors);
        return translate_with_interpolation(i18n, children, options);
    };

    let translated = i18n.t(&props.key, TArg::None, options);
    let markup = parse_wrapped(parser, &props.key, &translated, errors);
    map_nodes(children, &markup)
}

/// Maps translated markup onto the caller's children by tag index
fn map_nodes(children: &[ViewNode], markup: &[MarkupNode]) -> Vec<ViewNode> {
    markup
        .iter()
        .filter_map(|node| match node {
            MarkupNode::Text(text) => Some(ViewNode::Text(decode_html_entities(&text.content))),
            MarkupNode::Comment(_) => None,
            MarkupNode::Element(el) => Some(map_element(children, el)),
        })
        .collect()
}

fn map_element(children: &[ViewNode], el: &Element) -> ViewNode {
    let child = el.name.parse::<usize>().ok().and_then(|i| children.get(i));
    match child {
        Some(ViewNode::Element(view)) if !el.children.is_empty() => ViewNode::Element(ViewElement {
            name: view.name.clone(),
            attrs: view.attrs.clone(),
            children: map_nodes(&view.children, &el.children),
        }),
        Some(ViewNode::Element(view)) => ViewNode::Element(view.clone()),
        Some(ViewNode::Fragment(nodes)) => ViewNode::Fragment(map_nodes(nodes, &el.children)),
        Some(ViewNode::Text(_)) | None => {
            ViewNode::Text(decode_html_entities(&text_content(&el.children)))
        }
    }
}

/// Runs every interpolatable text in `nodes` through `t`, using the text
/// itself as the key
pub fn translate_with_interpolation(
    i18n: &I18n,
    nodes: &[ViewNode],
    options: Option<&TOptions>,
) -> Vec<ViewNode> {
    nodes
        .iter()
        .map(|node| match node {
            ViewNode::Text(text) if i18n.has_interpolation(text) => {
                ViewNode::Text(decode_html_entities(&translate_text(i18n, text, options)))
            }
            ViewNode::Element(el) => {
                let content = nodes_text_content(&el.children);
                if !content.is_empty() && i18n.has_interpolation(&content) {
                    ViewNode::Element(ViewElement {
                        name: el.name.clone(),
                        attrs: el.attrs.clone(),
                        children: vec![ViewNode::Text(translate_text(i18n, &content, options))],
                    })
                } else {
                    node.clone()
                }
            }
            ViewNode::Fragment(children) => {
                ViewNode::Fragment(translate_with_interpolation(i18n, children, options))
            }
            ViewNode::Text(_) => node.clone(),
        })
        .collect()
}

fn translate_text(i18n: &I18n, text: &str, options: Option<&TOptions>) -> String {
    i18n.t(text, TArg::from(options.cloned()), None)
}
