//! Markup Serializer
//!
//! Turns parsed nodes back into markup text. Text content is emitted as
//! stored, so `stringify(parse(s))` reproduces well-formed input.

use super::ast::{Attribute, MarkupNode};
use super::entities::escape_attribute;

/// Serializes a node list back to markup
pub fn stringify(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Text(text) => out.push_str(&text.content),
        MarkupNode::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.content);
            out.push_str("-->");
        }
        MarkupNode::Element(el) => {
            out.push('<');
            out.push_str(&el.name);
            write_attrs(&el.attrs, out);
            if el.void_element {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &el.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&el.name);
            out.push('>');
        }
    }
}

fn write_attrs(attrs: &[Attribute], out: &mut String) {
    for attr in attrs {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
    }
}

/// Concatenated text of all descendant text nodes, comments excluded
pub fn text_content(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    collect_text(nodes, &mut out);
    out
}

fn collect_text(nodes: &[MarkupNode], out: &mut String) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) => out.push_str(&text.content),
            MarkupNode::Element(el) => collect_text(&el.children, out),
            MarkupNode::Comment(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::Element;

    #[test]
    fn test_stringify_nested() {
        let nodes = vec![
            MarkupNode::text("Hi "),
            MarkupNode::element("b", vec![MarkupNode::text("there")]),
            MarkupNode::Element(Element {
                name: "br".to_string(),
                attrs: vec![],
                children: vec![],
                void_element: true,
            }),
        ];
        assert_eq!(stringify(&nodes), "Hi <b>there</b><br/>");
        assert_eq!(text_content(&nodes), "Hi there");
    }

    #[test]
    fn test_stringify_attributes() {
        let nodes = vec![MarkupNode::Element(Element {
            name: "a".to_string(),
            attrs: vec![
                Attribute {
                    name: "href".to_string(),
                    value: Some("/p?a=\"1\"".to_string()),
                },
                Attribute {
                    name: "download".to_string(),
                    value: None,
                },
            ],
            children: vec![MarkupNode::text("x")],
            void_element: false,
        })];
        assert_eq!(
            stringify(&nodes),
            "<a href=\"/p?a=&quot;1&quot;\" download>x</a>"
        );
    }
}
