//! String helpers.

/// `input` without leading and trailing whitespace.
#[inline]
pub fn trim(input: &str) -> &str {
    input.trim()
}

/// Lowercase copy of `input`.
#[inline]
pub fn to_lower(input: &str) -> String {
    input.to_lowercase()
}

/// Uppercase copy of `input`.
#[inline]
pub fn to_upper(input: &str) -> String {
    input.to_uppercase()
}

/// Splits `input` on `separator`.
///
/// An empty separator splits into characters rather than producing empty
/// leading and trailing pieces.
///
/// ```rust
/// use fnkit::utility::string::split;
///
/// assert_eq!(split(",", "a,b,,c"), vec!["a", "b", "", "c"]);
/// assert_eq!(split("", "abc"), vec!["a", "b", "c"]);
/// ```
pub fn split<'a>(separator: &str, input: &'a str) -> Vec<&'a str> {
    if separator.is_empty() {
        input
            .char_indices()
            .map(|(index, character)| &input[index..index + character.len_utf8()])
            .collect()
    } else {
        input.split(separator).collect()
    }
}
