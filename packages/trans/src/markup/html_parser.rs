//! HTML Tag Parser
//!
//! The built-in [`MarkupParser`]: HTML-like tags including purely numeric
//! names such as `<0>`, with HTML void elements.

use super::parser::parse;
use super::{MarkupParser, ParseResult};

#[derive(Debug, Clone, Copy)]
pub struct HtmlTagParser {}

impl HtmlTagParser {
    pub fn new() -> Self {
        HtmlTagParser {}
    }
}

impl Default for HtmlTagParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupParser for HtmlTagParser {
    fn parse(&self, markup: &str) -> ParseResult {
        parse(markup)
    }
}
