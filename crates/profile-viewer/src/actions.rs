//! Contact and share actions dispatched to OS URL handlers.
//!
//! Every action is fire-and-forget: the URL is handed to the system and
//! no result is awaited. Absent or blank inputs are no-ops.

use reqwest::Url;

/// Capability for opening URLs outside the app. Injected so tests can
/// record intended navigations instead of performing them.
pub trait ExternalNav {
    fn open_url(&self, url: &str);
}

/// Dispatches URLs to the operating system's default handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNav;

impl ExternalNav for SystemNav {
    fn open_url(&self, url: &str) {
        if let Err(err) = open::that(url) {
            tracing::error!("Failed to open {}: {}", url, err);
        }
    }
}

/// Opens a WhatsApp share sheet with a message linking to the profile.
pub fn share_profile(nav: &dyn ExternalNav, name: &str, member_id: &str, profile_url: &str) {
    let message = format!(
        "View Member Profile for {} (ID: {}).\n\nProfile Link:\n{}",
        name, member_id, profile_url
    );
    match Url::parse_with_params("https://api.whatsapp.com/send", [("text", message.as_str())]) {
        Ok(url) => nav.open_url(url.as_str()),
        Err(err) => tracing::error!("Failed to build share link: {}", err),
    }
}

/// Opens the telephone dialer with the raw phone number.
pub fn call(nav: &dyn ExternalNav, phone: Option<&str>) {
    if let Some(phone) = non_blank(phone) {
        nav.open_url(&format!("tel:{}", phone));
    }
}

/// Opens a WhatsApp chat with the number, digits only.
pub fn whatsapp(nav: &dyn ExternalNav, number: Option<&str>) {
    if let Some(number) = non_blank(number) {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            nav.open_url(&format!("https://wa.me/{}", digits));
        }
    }
}

/// Opens a mail composer for the raw address.
pub fn email(nav: &dyn ExternalNav, address: Option<&str>) {
    if let Some(address) = non_blank(address) {
        nav.open_url(&format!("mailto:{}", address));
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNav {
        opened: RefCell<Vec<String>>,
    }

    impl RecordingNav {
        fn opened(&self) -> Vec<String> {
            self.opened.borrow().clone()
        }
    }

    impl ExternalNav for RecordingNav {
        fn open_url(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_call_uses_raw_number() {
        let nav = RecordingNav::default();
        call(&nav, Some("555-0100"));
        assert_eq!(nav.opened(), ["tel:555-0100"]);
    }

    #[test]
    fn test_whatsapp_strips_non_digits() {
        let nav = RecordingNav::default();
        whatsapp(&nav, Some("+1 (555) 123-4567"));
        assert_eq!(nav.opened(), ["https://wa.me/15551234567"]);
    }

    #[test]
    fn test_email_uses_mailto() {
        let nav = RecordingNav::default();
        email(&nav, Some("jane@example.com"));
        assert_eq!(nav.opened(), ["mailto:jane@example.com"]);
    }

    #[test]
    fn test_absent_inputs_are_no_ops() {
        let nav = RecordingNav::default();
        call(&nav, None);
        call(&nav, Some("   "));
        whatsapp(&nav, None);
        whatsapp(&nav, Some("ext."));
        email(&nav, None);
        email(&nav, Some(""));
        assert!(nav.opened().is_empty());
    }

    #[test]
    fn test_share_builds_encoded_whatsapp_link() {
        let nav = RecordingNav::default();
        share_profile(
            &nav,
            "Jane Doe",
            "ABC123",
            "https://api.regeve.in/member/ABC123",
        );
        let opened = nav.opened();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://api.whatsapp.com/send?text="));
        assert!(opened[0].contains("Jane+Doe"));
        assert!(opened[0].contains("ABC123"));
    }
}
