//! Init options
//!
//! Mirrors the JSON configuration object accepted by `init`. Field names
//! deserialize from camelCase so an options file can be shared with
//! JavaScript tooling.

use crate::resource::Resource;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;

pub const DEFAULT_PREFIX: &str = "{{";
pub const DEFAULT_SUFFIX: &str = "}}";
pub const DEFAULT_KEY_SEPARATOR: &str = ".";
pub const DEFAULT_NS_SEPARATOR: &str = ":";

/// A key or namespace separator, or `false` to disable splitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separator {
    Disabled,
    Str(String),
}

impl Separator {
    pub fn new(separator: impl Into<String>) -> Self {
        Separator::Str(separator.into())
    }

    /// The separator text, `None` when splitting is disabled or the text is empty
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Separator::Str(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeparator {
    Flag(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for Separator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawSeparator::deserialize(deserializer)? {
            RawSeparator::Flag(false) => Separator::Disabled,
            // `true` carries no separator text; treat it as the default
            RawSeparator::Flag(true) => Separator::new(DEFAULT_KEY_SEPARATOR),
            RawSeparator::Text(s) => Separator::Str(s),
        })
    }
}

impl Serialize for Separator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Separator::Disabled => serializer.serialize_bool(false),
            Separator::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// Placeholder delimiters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterpolationOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl InterpolationOptions {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        InterpolationOptions {
            prefix: Some(prefix.into()),
            suffix: Some(suffix.into()),
        }
    }

    /// Configured prefix; empty or missing falls back to `{{`
    pub fn prefix(&self) -> &str {
        match self.prefix.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PREFIX,
        }
    }

    /// Configured suffix; empty or missing falls back to `}}`
    pub fn suffix(&self) -> &str {
        match self.suffix.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_SUFFIX,
        }
    }

    /// Copy with both delimiters filled in
    pub fn normalized(&self) -> Self {
        InterpolationOptions::new(self.prefix(), self.suffix())
    }
}

/// Options for `I18n::init`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitOptions {
    pub resources: Resource,
    pub lng: Option<String>,
    pub interpolation: InterpolationOptions,
    pub key_separator: Option<Separator>,
    pub ns_separator: Option<Separator>,
    #[serde(rename = "defaultNS")]
    pub default_ns: Option<String>,
    #[serde(rename = "ignoreJSONStructure")]
    pub ignore_json_structure: Option<bool>,
    pub debug: bool,
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read options file {}", path.display()))?;
        let options: InitOptions = serde_json::from_str(&content)
            .with_context(|| format!("invalid options JSON in {}", path.display()))?;
        Ok(options)
    }

    pub fn with_resources(mut self, resources: Resource) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_lng(mut self, lng: impl Into<String>) -> Self {
        self.lng = Some(lng.into());
        self
    }

    pub fn with_interpolation(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.interpolation = InterpolationOptions::new(prefix, suffix);
        self
    }

    pub fn with_key_separator(mut self, separator: Separator) -> Self {
        self.key_separator = Some(separator);
        self
    }

    pub fn with_ns_separator(mut self, separator: Separator) -> Self {
        self.ns_separator = Some(separator);
        self
    }

    pub fn with_default_ns(mut self, ns: impl Into<String>) -> Self {
        self.default_ns = Some(ns.into());
        self
    }

    pub fn with_ignore_json_structure(mut self, ignore: bool) -> Self {
        self.ignore_json_structure = Some(ignore);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Effective key separator (`.` when unset)
    pub fn key_separator(&self) -> Separator {
        self.key_separator
            .clone()
            .unwrap_or_else(|| Separator::new(DEFAULT_KEY_SEPARATOR))
    }

    /// Effective namespace separator (`:` when unset)
    pub fn ns_separator(&self) -> Separator {
        self.ns_separator
            .clone()
            .unwrap_or_else(|| Separator::new(DEFAULT_NS_SEPARATOR))
    }
}

/// Per-call overrides accepted by `get_resource`
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub key_separator: Option<Separator>,
    pub ignore_json_structure: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let options: InitOptions = serde_json::from_str(
            r#"{
                "lng": "lt",
                "keySeparator": false,
                "nsSeparator": "::",
                "defaultNS": "common",
                "ignoreJSONStructure": true,
                "interpolation": { "prefix": "[[" },
                "resources": { "lt": { "common": { "a": "b" } } }
            }"#,
        )
        .unwrap();

        assert_eq!(options.lng.as_deref(), Some("lt"));
        assert_eq!(options.key_separator, Some(Separator::Disabled));
        assert_eq!(options.ns_separator(), Separator::new("::"));
        assert_eq!(options.default_ns.as_deref(), Some("common"));
        assert_eq!(options.ignore_json_structure, Some(true));
        assert_eq!(options.interpolation.prefix(), "[[");
        assert_eq!(options.interpolation.suffix(), "}}");
        assert!(options.resources.contains_key("lt"));
    }

    #[test]
    fn test_empty_delimiters_fall_back() {
        let interpolation = InterpolationOptions::new("", "");
        assert_eq!(interpolation.prefix(), "{{");
        assert_eq!(interpolation.suffix(), "}}");
    }

    #[test]
    fn test_separator_true_means_default() {
        let sep: Separator = serde_json::from_str("true").unwrap();
        assert_eq!(sep, Separator::new("."));
    }
}
