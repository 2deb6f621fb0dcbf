//! Key Resolver
//!
//! Finds a key inside one namespace's resource tree. `a.b.c` walks nested
//! groups segment by segment; with the separator disabled (or absent from
//! the key) the whole key is looked up directly.
//!
//! Absence is always `None`: a missing segment, a string where a group was
//! expected, or a namespace that is itself a string.

use crate::options::Separator;
use crate::resource::ResourceKey;
use smallvec::SmallVec;

/// Resolves `key` in a namespace entry.
///
/// `ignore_json_structure` retries a direct lookup of the whole key when
/// the nested walk fails, so flat keys that contain the separator
/// (`"Hello. World"`) still resolve.
pub fn resolve<'a>(
    namespace: &'a ResourceKey,
    key: &str,
    separator: &Separator,
    ignore_json_structure: bool,
) -> Option<&'a ResourceKey> {
    let root = namespace.as_nested()?;

    let sep = match separator.as_str() {
        Some(sep) if key.contains(sep) => sep,
        _ => return root.get(key),
    };

    let segments: SmallVec<[&str; 8]> = key.split(sep).collect();
    let found = walk(namespace, &segments);

    if found.is_none() && ignore_json_structure {
        return root.get(key);
    }
    found
}

fn walk<'a>(start: &'a ResourceKey, segments: &[&str]) -> Option<&'a ResourceKey> {
    let mut current = start;
    for segment in segments {
        current = current.child(segment)?;
    }
    Some(current)
}
