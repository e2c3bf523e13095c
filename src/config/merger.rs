//! Layering of configuration documents.
//!
//! A local override file is laid over the base configuration before it is
//! parsed, so a developer can add a namespace or swap the search paths
//! without editing the shared file.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively (`namespaces`, `locations`, `templates`)
//! - Sequences are replaced entirely (`paths`, `extensions`)
//! - `null` in the overlay removes the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Lay `overlay` over `base`.
///
/// The overlay wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }

        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }

    Value::Mapping(merged)
}

/// Merge documents in order; later documents take precedence.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}
