#![deny(clippy::all)]

//! Tag-mapped translations
//!
//! Renders translations such as `<0>Sveiki, {{fullName}}!</0><1>Tavo
//! profilis</1>.` into view trees, replacing each indexed tag with a
//! caller-supplied element or component. Splitting the translation needs a
//! markup parser; the built-in one sits behind the default `html-parser`
//! feature and any [`MarkupParser`] can be injected instead.

pub mod error;
pub mod jsx;
pub mod markup;
pub mod trans;
pub mod view;

pub use error::TransError;
pub use markup::{default_parser, MarkupNode, MarkupParser, ParseResult};
pub use trans::{RenderResult, Trans, TransChildren, TransComponent, TransProps};
pub use view::{nodes_from_markup, ViewElement, ViewNode};
