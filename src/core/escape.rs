//! Markup escaping for engine-facing strings.
//!
//! The rendering engine escapes most HTML on its own but still parses inline
//! styling tags such as `<b>` out of names and categories, so only the angle
//! brackets are replaced here. Each engine-facing string is escaped exactly
//! once, by the configurator that emits it.

/// Replaces `<` and `>` with `&lt;` and `&gt;`.
#[must_use]
pub fn escape_angle_brackets(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes an optional string, keeping absent and empty values as they are.
#[must_use]
pub fn escape_optional(input: Option<&str>) -> Option<String> {
    input.map(escape_angle_brackets)
}
