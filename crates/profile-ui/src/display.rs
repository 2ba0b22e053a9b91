//! Display formatting for optional profile fields.

/// Fallback text shown for absent fields.
pub const PLACEHOLDER: &str = "N/A";

/// Formats an optional text field, substituting the placeholder when the
/// value is absent or blank.
pub fn text_display(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Formats a count. Zero is a real value and renders as "0"; counts are
/// never absent (missing counts deserialize to zero), so there is no
/// placeholder case.
pub fn count_display(value: u32) -> String {
    value.to_string()
}

/// Whether a contact row should show its action button: requires both a
/// handler and a non-blank value.
pub fn action_visible(value: Option<&str>, has_handler: bool) -> bool {
    has_handler && value.is_some_and(|v| !v.trim().is_empty())
}
