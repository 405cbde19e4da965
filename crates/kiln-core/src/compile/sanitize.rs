//! Redaction of internal paths from compiler diagnostics.

/// Remove every literal occurrence of `input_path` from `raw`.
///
/// Plain substring removal: no path parsing or pattern matching. Text without
/// the path comes back unchanged.
pub fn sanitize(raw: &str, input_path: &str) -> String {
    if input_path.is_empty() {
        return raw.to_string();
    }
    raw.replace(input_path, "")
}
