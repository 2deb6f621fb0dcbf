//! Resource Bundle Merger
//!
//! Deep merge walks both trees: groups merge recursively, a non-group slot
//! receiving a group is replaced by an empty group first, and leaves and
//! lists are assigned only when `overwrite` is set or the slot is empty.
//! Lists are atomic and never merged element-wise.

use crate::resource::{ResourceBundle, ResourceKey};

/// Recursively merges `source` into `target`
pub fn deep_merge(target: &mut ResourceBundle, source: &ResourceBundle, overwrite: bool) {
    for (key, source_value) in source {
        match source_value {
            ResourceKey::Nested(source_map) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(ResourceKey::nested);
                if !slot.is_nested() {
                    *slot = ResourceKey::nested();
                }
                if let Some(target_map) = slot.as_nested_mut() {
                    deep_merge(target_map, source_map, overwrite);
                }
            }
            _ => {
                if overwrite || !target.contains_key(key) {
                    target.insert(key.clone(), source_value.clone());
                }
            }
        }
    }
}

/// Top-level merge where existing keys win.
///
/// Key order follows `source` first, then keys only present in `existing`.
pub fn shallow_merge_keep_existing(existing: &ResourceBundle, source: &ResourceBundle) -> ResourceBundle {
    let mut merged = source.clone();
    for (key, value) in existing {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Assigns `value` at the end of `segments`, turning anything that is not
/// a group along the way into an empty group
pub fn set_path(slot: &mut ResourceKey, segments: &[&str], value: ResourceKey) {
    let Some((head, rest)) = segments.split_first() else {
        *slot = value;
        return;
    };
    if !slot.is_nested() {
        *slot = ResourceKey::nested();
    }
    if let ResourceKey::Nested(map) = slot {
        let child = map
            .entry(head.to_string())
            .or_insert_with(ResourceKey::nested);
        set_path(child, rest, value);
    }
}
