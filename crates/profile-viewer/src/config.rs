//! Runtime configuration shared between the entry point and components.

use std::sync::OnceLock;

/// Default API host serving the event-forms records.
pub const DEFAULT_API_BASE: &str = "https://api.regeve.in";

static API_BASE: OnceLock<String> = OnceLock::new();
static WEB_BASE: OnceLock<String> = OnceLock::new();

/// Stores the API base URL. First call wins.
pub fn set_api_base(base: String) {
    API_BASE.set(base).ok();
}

/// The API base URL, [`DEFAULT_API_BASE`] unless overridden.
pub fn api_base() -> &'static str {
    API_BASE.get().map(String::as_str).unwrap_or(DEFAULT_API_BASE)
}

/// Stores the base URL for shareable profile links. First call wins.
pub fn set_web_base(base: String) {
    WEB_BASE.set(base).ok();
}

/// Base URL used when building the shareable profile link. Falls back to
/// the API base when not set.
pub fn web_base() -> &'static str {
    WEB_BASE.get().map(String::as_str).unwrap_or_else(api_base)
}

/// The shareable link for a member profile.
pub fn profile_url(member_id: &str) -> String {
    format!("{}/member/{}", web_base().trim_end_matches('/'), member_id)
}
