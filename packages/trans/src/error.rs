//! Rendering errors
//!
//! None of these abort rendering; they travel next to the best-effort
//! output in [`RenderResult`](crate::RenderResult).

use crate::markup::MarkupError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransError {
    /// No markup parser was available to split a tagged translation
    #[error(
        "markup parser is not available: cannot render tagged translation for key {key:?}; \
         enable the `html-parser` feature or inject a MarkupParser"
    )]
    MissingDependency { key: String },

    /// The translation was not well-formed markup
    #[error("malformed markup in translation for key {key:?}: {source}")]
    Markup {
        key: String,
        #[source]
        source: MarkupError,
    },
}

impl TransError {
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, TransError::MissingDependency { .. })
    }
}
