//! Interpolator
//!
//! Replaces `{{name}}` placeholders with values from a data map. The
//! delimiters are configurable; each (prefix, suffix) pair compiles to one
//! regex, cached for the lifetime of the process. The cache is shared by
//! every instance and grows with the number of distinct delimiter pairs.

use crate::error::{I18nError, Result};
use crate::options::InterpolationOptions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Placeholder values by name
pub type InterpolationData = Map<String, Value>;

static PATTERN_CACHE: Lazy<Mutex<HashMap<(String, String), Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Escape characters that have special meaning in regular expressions.
///
/// Hyphens are written as `\x2d` so the result stays literal inside and
/// outside character classes.
pub fn escape_regex(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '-' => result.push_str(r"\x2d"),
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
            | '#' | '&' | '~' => {
                result.push('\\');
                result.push(ch);
            }
            _ => result.push(ch),
        }
    }
    result
}

/// Returns the compiled placeholder pattern for a delimiter pair
pub fn placeholder_pattern(prefix: &str, suffix: &str) -> Result<Regex> {
    let key = (prefix.to_string(), suffix.to_string());
    let mut cache = PATTERN_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(regex) = cache.get(&key) {
        return Ok(regex.clone());
    }

    let source = format!(
        r"{}\s*([A-Za-z0-9_]+)\s*{}",
        escape_regex(prefix),
        escape_regex(suffix)
    );
    let regex = Regex::new(&source).map_err(|source| I18nError::InvalidPattern {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
        source,
    })?;
    cache.insert(key, regex.clone());
    Ok(regex)
}

/// Number of compiled delimiter patterns currently cached
pub fn cached_pattern_count() -> usize {
    PATTERN_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Substitutes placeholders in `template` with values from `data`.
///
/// Placeholders without a matching entry are left untouched.
pub fn interpolate(
    template: &str,
    data: &InterpolationData,
    options: &InterpolationOptions,
) -> Result<String> {
    if template.is_empty() {
        return Ok(String::new());
    }

    let regex = placeholder_pattern(options.prefix(), options.suffix())?;
    let result = regex.replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
        Some(value) => value_to_string(value),
        None => caps[0].to_string(),
    });
    Ok(result.into_owned())
}

/// True when `value` contains both configured delimiters
pub fn has_interpolation(value: &str, options: &InterpolationOptions) -> bool {
    value.contains(options.prefix()) && value.contains(options.suffix())
}

/// String form of an interpolation value, following JavaScript coercion
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 && !n.is_i64() && !n.is_u64() => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
