//! Nullable value handling.
//!
//! `Option` is the Rust rendition of a nullable value; these helpers cover
//! the conversions at the JSON boundary and the usual eliminators.

use serde_json::Value;

/// Returns `true` for JSON `null`.
#[inline]
pub const fn is_nothing(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// `None` for JSON `null`, `Some(value)` otherwise.
#[inline]
pub fn from_nullable(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        other => Some(other),
    }
}

/// The contained value, or `default`.
#[inline]
pub fn default_to<T>(default: T, value: Option<T>) -> T {
    value.unwrap_or(default)
}

/// Applies `function` to the contained value, or returns `default`.
///
/// ```rust
/// use fnkit::utility::maybe::maybe;
///
/// assert_eq!(maybe(0, |n: i32| n * 2, Some(4)), 8);
/// assert_eq!(maybe(0, |n: i32| n * 2, None), 0);
/// ```
#[inline]
pub fn maybe<T, U, F>(default: U, function: F, value: Option<T>) -> U
where
    F: FnOnce(T) -> U,
{
    value.map_or(default, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_nothing() {
        assert!(is_nothing(&json!(null)));
        assert!(!is_nothing(&json!(false)));
        assert!(!is_nothing(&json!(0)));
    }

    #[test]
    fn from_nullable_keeps_falsy_values() {
        assert_eq!(from_nullable(json!(null)), None);
        assert_eq!(from_nullable(json!("")), Some(json!("")));
        assert_eq!(from_nullable(json!(0)), Some(json!(0)));
    }

    #[test]
    fn default_to_only_fills_none() {
        assert_eq!(default_to(1, None), 1);
        assert_eq!(default_to(1, Some(2)), 2);
    }
}
