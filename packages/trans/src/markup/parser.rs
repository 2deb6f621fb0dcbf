//! Markup Parser
//!
//! Builds a node tree from lexer tokens. Malformed markup never fails the
//! parse: unmatched closing tags are dropped and open elements are closed
//! implicitly, each with a recorded error.

use super::ast::*;
use super::lexer::{tokenize, Token};
use super::{MarkupError, ParseResult};

/// Main parsing function
pub fn parse(source: &str) -> ParseResult {
    let tokenized = tokenize(source);
    let mut builder = TreeBuilder::new(tokenized.tokens, source.len());
    builder.errors = tokenized.errors;
    builder.build();
    ParseResult::new(builder.root_nodes, builder.errors)
}

struct TreeBuilder {
    tokens: std::vec::IntoIter<Token>,
    container_stack: Vec<Element>,
    root_nodes: Vec<MarkupNode>,
    errors: Vec<MarkupError>,
    end_offset: usize,
}

impl TreeBuilder {
    fn new(tokens: Vec<Token>, end_offset: usize) -> Self {
        TreeBuilder {
            tokens: tokens.into_iter(),
            container_stack: Vec::new(),
            root_nodes: Vec::new(),
            errors: Vec::new(),
            end_offset,
        }
    }

    fn build(&mut self) {
        while let Some(token) = self.tokens.next() {
            match token {
                Token::Text { content, .. } => self.add_to_parent(MarkupNode::text(content)),
                Token::Comment { content, .. } => {
                    self.add_to_parent(MarkupNode::Comment(Comment { content }))
                }
                Token::TagOpen {
                    name,
                    attrs,
                    self_closing,
                    ..
                } => self.consume_element_start_tag(name, attrs, self_closing),
                Token::TagClose { name, offset } => self.consume_element_end_tag(name, offset),
            }
        }

        while let Some(el) = self.pop_container() {
            self.add_error(format!("Unclosed element \"{}\"", el.name), self.end_offset);
            self.add_to_parent(MarkupNode::Element(el));
        }
    }

    fn consume_element_start_tag(
        &mut self,
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
    ) {
        let void_element = self_closing || is_void_element(&name);
        let el = Element {
            name,
            attrs,
            children: Vec::new(),
            void_element,
        };
        if void_element {
            self.add_to_parent(MarkupNode::Element(el));
        } else {
            self.container_stack.push(el);
        }
    }

    fn consume_element_end_tag(&mut self, name: String, offset: usize) {
        if is_void_element(&name) {
            self.add_error(format!("Void elements do not have end tags \"{}\"", name), offset);
            return;
        }

        let Some(match_index) = self.container_stack.iter().rposition(|el| el.name == name) else {
            self.add_error(
                format!("Unexpected closing tag \"{}\"", name),
                offset,
            );
            return;
        };

        while self.container_stack.len() > match_index + 1 {
            if let Some(el) = self.pop_container() {
                self.add_error(
                    format!("Unclosed element \"{}\" implicitly closed by \"{}\"", el.name, name),
                    offset,
                );
                self.add_to_parent(MarkupNode::Element(el));
            }
        }

        if let Some(el) = self.pop_container() {
            self.add_to_parent(MarkupNode::Element(el));
        }
    }

    fn add_error(&mut self, msg: String, offset: usize) {
        self.errors.push(MarkupError::new(msg, offset));
    }

    fn pop_container(&mut self) -> Option<Element> {
        self.container_stack.pop()
    }

    fn add_to_parent(&mut self, node: MarkupNode) {
        match self.container_stack.last_mut() {
            Some(el) => Self::add_to_node_list(&mut el.children, node),
            None => Self::add_to_node_list(&mut self.root_nodes, node),
        }
    }

    fn add_to_node_list(list: &mut Vec<MarkupNode>, node: MarkupNode) {
        if let (Some(MarkupNode::Text(last)), MarkupNode::Text(text)) = (list.last_mut(), &node) {
            last.content.push_str(&text.content);
            return;
        }
        list.push(node);
    }
}
