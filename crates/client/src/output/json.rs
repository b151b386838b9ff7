//! JSON output formatting.

/// Format a value as compact JSON on a single line.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
