//! Nested property access over untyped JSON

use serde_json::Value;

/// Look up a dot-separated path inside a JSON value.
///
/// Returns the value at the path, or `default` when any segment is missing
/// or a non-object is traversed.
///
/// ```rust
/// use serde_json::json;
/// use lifeplus_core::lookup::nested_property;
///
/// let body = json!({"data": {"user": {"name": "Mamun"}}});
/// let name = nested_property(&body, "data.user.name", json!("unknown"));
/// assert_eq!(name, json!("Mamun"));
/// ```
#[must_use]
pub fn nested_property(value: &Value, path: &str, default: Value) -> Value {
    let mut current = value;

    for key in path.split('.') {
        match current.get(key) {
            Some(next) => current = next,
            None => return default,
        }
    }

    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_property_found() {
        let body = json!({"a": {"b": {"c": 42}}});
        assert_eq!(nested_property(&body, "a.b.c", json!(0)), json!(42));
    }

    #[test]
    fn test_nested_property_missing_returns_default() {
        let body = json!({"a": {"b": 1}});
        assert_eq!(nested_property(&body, "a.x.c", json!("fallback")), json!("fallback"));
    }

    #[test]
    fn test_nested_property_through_non_object() {
        let body = json!({"a": 5});
        assert_eq!(nested_property(&body, "a.b", json!(null)), json!(null));
    }
}
