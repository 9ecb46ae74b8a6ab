//! Helpers over JSON objects.
//!
//! Paths are sequences of keys; inside arrays a key is a decimal index.

use serde_json::{Map, Value};

/// Copy of `object` with only `keys`. Missing keys are ignored.
pub fn pick(keys: &[&str], object: &Map<String, Value>) -> Map<String, Value> {
    keys.iter()
        .filter_map(|&key| object.get(key).map(|value| (key.to_owned(), value.clone())))
        .collect()
}

/// Copy of `object` without `keys`.
pub fn omit(keys: &[&str], object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Shallow merge; keys of `right` win.
pub fn merge(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// The property `key` of `value`.
pub fn prop<'a>(key: &str, value: &'a Value) -> Option<&'a Value> {
    match value {
        Value::Object(object) => object.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// The value reached by following `keys` from `value`.
///
/// ```rust
/// use fnkit::utility::object::path;
/// use serde_json::json;
///
/// let document = json!({ "user": { "tags": ["a", "b"] } });
/// assert_eq!(path(&["user", "tags", "1"], &document), Some(&json!("b")));
/// assert_eq!(path(&["user", "name"], &document), None);
/// ```
pub fn path<'a>(keys: &[&str], value: &'a Value) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| prop(key, current))
}

/// Returns `true` if every key along `keys` exists, even when the final
/// value is `null`.
pub fn has_path(keys: &[&str], value: &Value) -> bool {
    path(keys, value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn pick_and_omit_are_complementary() {
        let source = object(json!({ "a": 1, "b": 2, "c": 3 }));
        assert_eq!(Value::Object(pick(&["a", "c", "z"], &source)), json!({ "a": 1, "c": 3 }));
        assert_eq!(Value::Object(omit(&["a", "c", "z"], &source)), json!({ "b": 2 }));
    }

    #[test]
    fn merge_prefers_right() {
        let left = object(json!({ "a": 1, "b": { "x": 1 } }));
        let right = object(json!({ "b": { "y": 2 }, "c": 3 }));
        assert_eq!(
            Value::Object(merge(&left, &right)),
            json!({ "a": 1, "b": { "y": 2 }, "c": 3 })
        );
    }

    #[test]
    fn prop_on_scalars_is_none() {
        assert_eq!(prop("a", &json!(1)), None);
        assert_eq!(prop("0", &json!(["x"])), Some(&json!("x")));
        assert_eq!(prop("-1", &json!(["x"])), None);
    }

    #[test]
    fn has_path_counts_null_leaves() {
        let document = json!({ "a": { "b": null } });
        assert!(has_path(&["a", "b"], &document));
        assert!(!has_path(&["a", "b", "c"], &document));
        assert!(has_path(&[], &document));
    }
}
