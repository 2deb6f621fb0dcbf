//! Markup Module
//!
//! Minimal HTML-like markup handling for translations: the node tree,
//! serializer and entity decoding are always available; the lexer and
//! parser that build the tree are the optional collaborator behind the
//! `html-parser` feature.

pub mod ast;
pub mod entities;
pub mod serializer;

#[cfg(feature = "html-parser")]
pub mod html_parser;
#[cfg(feature = "html-parser")]
pub mod lexer;
#[cfg(feature = "html-parser")]
pub mod parser;

pub use ast::*;
pub use entities::decode_html_entities;
pub use serializer::{stringify, text_content};

#[cfg(feature = "html-parser")]
pub use html_parser::HtmlTagParser;

use std::fmt;
use thiserror::Error;

/// Error found while parsing markup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg} (offset {offset})")]
pub struct MarkupError {
    pub msg: String,
    pub offset: usize,
}

impl MarkupError {
    pub fn new(msg: impl Into<String>, offset: usize) -> Self {
        MarkupError {
            msg: msg.into(),
            offset,
        }
    }
}

/// Parse result: root nodes plus non-fatal errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub root_nodes: Vec<MarkupNode>,
    pub errors: Vec<MarkupError>,
}

impl ParseResult {
    pub fn new(root_nodes: Vec<MarkupNode>, errors: Vec<MarkupError>) -> Self {
        ParseResult { root_nodes, errors }
    }
}

/// Parses markup into a node tree.
///
/// This is the seam for the optional parsing collaborator: renderers hold
/// an `Option<Box<dyn MarkupParser>>` and report a missing dependency when
/// it is `None`.
pub trait MarkupParser {
    fn parse(&self, markup: &str) -> ParseResult;
}

impl fmt::Debug for dyn MarkupParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MarkupParser")
    }
}

/// The built-in parser when the `html-parser` feature is enabled
pub fn default_parser() -> Option<Box<dyn MarkupParser>> {
    #[cfg(feature = "html-parser")]
    {
        Some(Box::new(HtmlTagParser::new()))
    }
    #[cfg(not(feature = "html-parser"))]
    {
        None
    }
}
