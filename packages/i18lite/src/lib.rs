#![deny(clippy::all)]

//! i18lite - lightweight translation engine
//!
//! Resource storage, key resolution with separator-based nesting,
//! `{{placeholder}}` interpolation with configurable delimiters and
//! deep/shallow bundle merging. Every [`I18n`] instance owns its own
//! store and options; nothing is shared between instances.

pub mod error;
pub mod events;
pub mod instance;
pub mod interpolation;
pub mod logging;
pub mod merge;
pub mod options;
pub mod resolver;
pub mod resource;

// Re-exports
pub use error::{I18nError, Result};
pub use events::{Event, EventRegistry};
pub use instance::{I18n, TArg, TOptions};
pub use interpolation::{has_interpolation, interpolate, InterpolationData};
pub use logging::{ConsoleLogger, LogLevel, Logger, MemoryLogger, NullLogger};
pub use options::{InitOptions, InterpolationOptions, LookupOptions, Separator};
pub use resource::{Resource, ResourceBundle, ResourceKey, ResourceLanguage};

/// Namespace used when no `defaultNS` is configured
pub const DEFAULT_NAMESPACE: &str = "translation";
