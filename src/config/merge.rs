//! Recursive right-biased merge over configuration documents.
//!
//! Used to combine a loaded config file into the seeded tree before the
//! command-line pass: file values become the new defaults, and the command
//! line can still override them.

use serde_json::Value;

/// Deep merge two values, with `overlay` taking precedence over `base`.
///
/// - Mappings merge recursively: keys in the overlay override keys in the
///   base, keys only in the base survive untouched.
/// - Scalars and arrays are replaced entirely.
/// - An overlay null preserves the base value (null means "not specified",
///   which is what an omitted YAML key deserializes to).
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}
