//! Serialization helpers for console diagnostics

use serde::Serialize;

use crate::console_warn;

/// Render a value as compact JSON for the console.
///
/// Serialization failures are reported and replaced by a placeholder.
pub fn to_log_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            console_warn!("[Serialization] Failed to serialize value for logging: {}", e);
            "<unserializable>".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_to_log_json_serializes_maps() {
        let mut map = BTreeMap::new();
        map.insert("studentId", "STU1");
        assert_eq!(to_log_json(&map), r#"{"studentId":"STU1"}"#);
    }

    #[test]
    fn test_to_log_json_replaces_failures() {
        // Non-string map keys cannot be represented in JSON.
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], 1u8);
        assert_eq!(to_log_json(&map), "<unserializable>");
    }
}
