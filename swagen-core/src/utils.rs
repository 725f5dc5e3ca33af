//! Shared utility functions for code generation.

/// Convert a string to camelCase (e.g., "get_user-by id" -> "getUserById").
///
/// Every run of characters outside `[A-Za-z0-9]` is removed and the character
/// following it is uppercased. A leading uppercase ASCII letter is lowered.
/// A trailing separator run is kept as is.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending = String::new();

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending.is_empty() {
                result.push(c);
            } else {
                pending.clear();
                result.push(c.to_ascii_uppercase());
            }
        } else {
            pending.push(c);
        }
    }
    result.push_str(&pending);

    let mut chars = result.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            first.to_ascii_lowercase().to_string() + chars.as_str()
        }
        _ => result,
    }
}

/// Uppercase the first character (e.g., "pet" -> "Pet").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Check whether `s` can be used as a bare JavaScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Wrap a string in single quotes, escaping backslashes, quotes and newlines.
pub fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
