//! Resource tree
//!
//! `Resource` maps language → namespace → key. Keys hold either a literal
//! string, a list (atomic, never merged element-wise) or a nested map of
//! further keys.

use crate::error::{I18nError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A translation value or a nested group of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceKey {
    Value(String),
    List(Vec<ResourceKey>),
    Nested(IndexMap<String, ResourceKey>),
}

/// Keys of one (language, namespace) pair
pub type ResourceBundle = IndexMap<String, ResourceKey>;

/// Namespace → resource tree for one language
pub type ResourceLanguage = IndexMap<String, ResourceKey>;

/// Language code → namespaces
pub type Resource = IndexMap<String, ResourceLanguage>;

impl ResourceKey {
    /// Empty nested group
    pub fn nested() -> Self {
        ResourceKey::Nested(IndexMap::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResourceKey::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&IndexMap<String, ResourceKey>> {
        match self {
            ResourceKey::Nested(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_nested_mut(&mut self) -> Option<&mut IndexMap<String, ResourceKey>> {
        match self {
            ResourceKey::Nested(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, ResourceKey::Nested(_))
    }

    /// One traversal step: a map entry by name or a list element by index
    pub fn child(&self, segment: &str) -> Option<&ResourceKey> {
        match self {
            ResourceKey::Nested(map) => map.get(segment),
            ResourceKey::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            ResourceKey::Value(_) => None,
        }
    }

    /// Converts arbitrary JSON into a resource tree.
    ///
    /// Numbers and booleans become their textual form, `null` yields `None`
    /// (and is skipped inside maps and lists).
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(ResourceKey::Value(s)),
            Value::Bool(b) => Some(ResourceKey::Value(b.to_string())),
            Value::Number(n) => Some(ResourceKey::Value(n.to_string())),
            Value::Array(items) => Some(ResourceKey::List(
                items.into_iter().filter_map(ResourceKey::from_json).collect(),
            )),
            Value::Object(map) => Some(ResourceKey::Nested(
                map.into_iter()
                    .filter_map(|(k, v)| ResourceKey::from_json(v).map(|v| (k, v)))
                    .collect(),
            )),
        }
    }

    /// Collects every string leaf with its full key path joined by `separator`.
    /// List elements are addressed by index.
    pub fn leaves(&self, separator: &str) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_leaves(self, String::new(), separator, &mut out);
        out
    }
}

fn collect_leaves<'a>(
    key: &'a ResourceKey,
    path: String,
    separator: &str,
    out: &mut Vec<(String, &'a str)>,
) {
    let join = |segment: &str| -> String {
        if path.is_empty() {
            segment.to_string()
        } else {
            format!("{}{}{}", path, separator, segment)
        }
    };

    match key {
        ResourceKey::Value(value) => out.push((path.clone(), value)),
        ResourceKey::List(items) => {
            for (i, item) in items.iter().enumerate() {
                collect_leaves(item, join(&i.to_string()), separator, out);
            }
        }
        ResourceKey::Nested(map) => {
            for (name, item) in map {
                collect_leaves(item, join(name), separator, out);
            }
        }
    }
}

impl From<&str> for ResourceKey {
    fn from(value: &str) -> Self {
        ResourceKey::Value(value.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(value: String) -> Self {
        ResourceKey::Value(value)
    }
}

impl From<ResourceBundle> for ResourceKey {
    fn from(map: ResourceBundle) -> Self {
        ResourceKey::Nested(map)
    }
}

/// Parses a JSON object into a bundle for one (language, namespace) pair
pub fn bundle_from_json(value: Value) -> Result<ResourceBundle> {
    match ResourceKey::from_json(value) {
        Some(ResourceKey::Nested(map)) => Ok(map),
        Some(other) => Err(I18nError::InvalidResource(format!(
            "expected an object of keys, found {}",
            describe(&other)
        ))),
        None => Err(I18nError::InvalidResource(
            "expected an object of keys, found null".to_string(),
        )),
    }
}

/// Parses `{ lng: { ns: { ... } } }` JSON into a full resource store
pub fn resource_from_json(value: Value) -> Result<Resource> {
    let Value::Object(languages) = value else {
        return Err(I18nError::InvalidResource(
            "expected an object of languages".to_string(),
        ));
    };

    let mut resource = Resource::new();
    for (lng, namespaces) in languages {
        let Value::Object(namespaces) = namespaces else {
            return Err(I18nError::InvalidResource(format!(
                "language {:?} must map namespaces to resources",
                lng
            )));
        };
        let language = namespaces
            .into_iter()
            .filter_map(|(ns, v)| ResourceKey::from_json(v).map(|v| (ns, v)))
            .collect();
        resource.insert(lng, language);
    }
    Ok(resource)
}

/// Parses a JSON document from text into a resource store
pub fn resource_from_str(content: &str) -> Result<Resource> {
    let value: Value = serde_json::from_str(content)?;
    resource_from_json(value)
}

fn describe(key: &ResourceKey) -> &'static str {
    match key {
        ResourceKey::Value(_) => "a string",
        ResourceKey::List(_) => "a list",
        ResourceKey::Nested(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_coerces_scalars() {
        let key = ResourceKey::from_json(json!({ "a": 1, "b": true, "c": null })).unwrap();
        let map = key.as_nested().unwrap();
        assert_eq!(map.get("a"), Some(&ResourceKey::Value("1".to_string())));
        assert_eq!(map.get("b"), Some(&ResourceKey::Value("true".to_string())));
        assert!(!map.contains_key("c"));
    }

    #[test]
    fn test_child_indexes_lists() {
        let key = ResourceKey::from_json(json!(["zero", "one"])).unwrap();
        assert_eq!(key.child("1").and_then(ResourceKey::as_str), Some("one"));
        assert!(key.child("2").is_none());
        assert!(key.child("x").is_none());
    }

    #[test]
    fn test_leaves_joins_paths() {
        let key = ResourceKey::from_json(json!({ "tree": { "greeting": "Sveiki!" }, "x": "y" }))
            .unwrap();
        assert_eq!(
            key.leaves("."),
            vec![("tree.greeting".to_string(), "Sveiki!"), ("x".to_string(), "y")]
        );
    }

    #[test]
    fn test_bundle_from_json_rejects_strings() {
        assert!(matches!(
            bundle_from_json(json!("text")),
            Err(I18nError::InvalidResource(_))
        ));
    }

    #[test]
    fn test_resource_deserializes_untagged() {
        let resource: Resource =
            serde_json::from_str(r#"{"lt":{"translation":{"greeting":"Sveiki!"}}}"#).unwrap();
        let ns = resource.get("lt").and_then(|l| l.get("translation")).unwrap();
        assert_eq!(ns.child("greeting").and_then(ResourceKey::as_str), Some("Sveiki!"));
    }
}
