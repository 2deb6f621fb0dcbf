//! Markup Lexer
//!
//! Converts translation markup into tokens. Anything that does not form a
//! complete tag (`a < b`, `<` at end of input, `<>`) stays text, so plain
//! translations tokenize to a single text token.

use super::ast::Attribute;
use super::entities::decode_html_entities;
use super::MarkupError;

/// Markup token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text {
        content: String,
        offset: usize,
    },
    TagOpen {
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
        offset: usize,
    },
    TagClose {
        name: String,
        offset: usize,
    },
    Comment {
        content: String,
        offset: usize,
    },
}

/// Tokenization result
#[derive(Debug, Clone, Default)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<MarkupError>,
}

/// Main tokenization function
pub fn tokenize(source: &str) -> TokenizeResult {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.tokenize();
    TokenizeResult {
        tokens: tokenizer.tokens,
        errors: tokenizer.errors,
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.')
}

fn is_attr_name_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '=' | '>' | '/' | '<' | '"' | '\'')
}

struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    text: String,
    text_start: usize,
    tokens: Vec<Token>,
    errors: Vec<MarkupError>,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Tokenizer {
            source,
            pos: 0,
            text: String::new(),
            text_start: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn tokenize(&mut self) {
        while self.pos < self.source.len() {
            let start = self.pos;
            let consumed = if self.rest().starts_with("<!--") {
                self.consume_comment();
                true
            } else if self.rest().starts_with("</") {
                self.consume_tag_close()
            } else if self.rest().starts_with('<') {
                self.consume_tag_open()
            } else {
                false
            };

            if !consumed {
                self.pos = start;
                self.consume_text_char();
            }
        }
        self.flush_text();
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_while(&mut self, pred: fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(pred) {
            self.advance();
        }
        &self.source[start..self.pos]
    }

    fn consume_text_char(&mut self) {
        if self.text.is_empty() {
            self.text_start = self.pos;
        }
        if let Some(ch) = self.advance() {
            self.text.push(ch);
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text {
                content: std::mem::take(&mut self.text),
                offset: self.text_start,
            });
        }
    }

    fn push_token(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }

    fn consume_comment(&mut self) {
        let offset = self.pos;
        self.pos += "<!--".len();
        match self.rest().find("-->") {
            Some(end) => {
                let content = self.rest()[..end].to_string();
                self.pos += end + "-->".len();
                self.push_token(Token::Comment { content, offset });
            }
            None => {
                let content = self.rest().to_string();
                self.pos = self.source.len();
                self.errors
                    .push(MarkupError::new("Unterminated comment", offset));
                self.push_token(Token::Comment { content, offset });
            }
        }
    }

    /// `</name>`; returns false (consuming nothing) when this is not a tag
    fn consume_tag_close(&mut self) -> bool {
        let offset = self.pos;
        self.pos += "</".len();
        if !self.peek().is_some_and(is_name_start) {
            return false;
        }
        let name = self.read_while(is_name_char).to_string();
        self.skip_whitespace();
        if self.peek() != Some('>') {
            return false;
        }
        self.advance();
        self.push_token(Token::TagClose { name, offset });
        true
    }

    /// `<name attr="v">` or `<name/>`; returns false when this is not a tag
    fn consume_tag_open(&mut self) -> bool {
        let offset = self.pos;
        self.pos += "<".len();
        if !self.peek().is_some_and(is_name_start) {
            return false;
        }
        let name = self.read_while(is_name_char).to_string();

        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return self.unterminated_tag(&name, offset),
                Some('>') => {
                    self.advance();
                    self.push_token(Token::TagOpen {
                        name,
                        attrs,
                        self_closing: false,
                        offset,
                    });
                    return true;
                }
                Some('/') => {
                    self.advance();
                    if self.peek() != Some('>') {
                        return false;
                    }
                    self.advance();
                    self.push_token(Token::TagOpen {
                        name,
                        attrs,
                        self_closing: true,
                        offset,
                    });
                    return true;
                }
                Some(_) => match self.consume_attr() {
                    Some(attr) => attrs.push(attr),
                    None if self.pos >= self.source.len() => {
                        return self.unterminated_tag(&name, offset)
                    }
                    None => return false,
                },
            }
        }
    }

    /// Records the error and keeps everything from `offset` on as text;
    /// the rest of the input belongs to the open tag
    fn unterminated_tag(&mut self, name: &str, offset: usize) -> bool {
        self.errors
            .push(MarkupError::new(format!("Unterminated tag \"{}\"", name), offset));
        if self.text.is_empty() {
            self.text_start = offset;
        }
        self.text.push_str(&self.source[offset..]);
        self.pos = self.source.len();
        true
    }

    fn consume_attr(&mut self) -> Option<Attribute> {
        let name = self.read_while(is_attr_name_char).to_string();
        if name.is_empty() {
            return None;
        }
        self.skip_whitespace();
        if self.peek() != Some('=') {
            return Some(Attribute { name, value: None });
        }
        self.advance();
        self.skip_whitespace();

        let value = match self.peek()? {
            quote @ ('"' | '\'') => {
                self.advance();
                // unterminated quote: the whole tag falls back to text
                let end = self.rest().find(quote)?;
                let raw = self.rest()[..end].to_string();
                self.pos += end + quote.len_utf8();
                raw
            }
            _ => self
                .read_while(|ch| !ch.is_whitespace() && ch != '>')
                .to_string(),
        };

        Some(Attribute {
            name,
            value: Some(decode_html_entities(&value)),
        })
    }
}
