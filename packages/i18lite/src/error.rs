//! Error types
//!
//! Lookup and interpolation never fail for data-shape problems; these
//! errors only cover building resources from foreign data and compiling
//! interpolation patterns.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// The interpolation delimiters produced a pattern the regex engine rejected
    #[error("invalid interpolation pattern for delimiters {prefix:?}/{suffix:?}: {source}")]
    InvalidPattern {
        prefix: String,
        suffix: String,
        #[source]
        source: regex::Error,
    },

    /// A value could not be used as a resource tree
    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, I18nError>;
