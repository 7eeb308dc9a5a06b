use serde_yaml::Value;

/// Overlays `overlay` onto `base`. Nested mappings merge recursively, any
/// other value kind replaces the base value wholesale, so overlay keys win
/// on conflict.
pub fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
