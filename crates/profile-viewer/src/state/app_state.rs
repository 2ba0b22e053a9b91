//! Main application state for the profile viewer.

use profile_api::{ApiError, MemberProfile};

/// Fetch outcome for the identifier being viewed.
///
/// Exactly one fetch runs per identifier; the only transitions are
/// `Loading -> Found` and `Loading -> NotFound`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// The server returned a record.
    Found(MemberProfile),
    /// Any fetch failure or an empty payload.
    NotFound,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Identifier currently being viewed.
    pub member_id: String,

    /// Fetch outcome for `member_id`.
    pub profile: ProfileState,

    /// Previously viewed identifiers, oldest first.
    pub history: Vec<String>,

    /// Set when the profile photo failed to load; forces the letter avatar.
    pub photo_failed: bool,
}

impl AppState {
    /// Creates state for an initial identifier, with the fetch pending.
    pub fn new(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            profile: ProfileState::Loading,
            history: Vec::new(),
            photo_failed: false,
        }
    }

    /// Marks the start of a fetch for the current identifier.
    pub fn begin_loading(&mut self) {
        self.profile = ProfileState::Loading;
        self.photo_failed = false;
    }

    /// Applies the outcome of a completed fetch. Every error and an empty
    /// payload collapse to NotFound; the error itself only goes to the log.
    pub fn apply_result(&mut self, result: Result<Option<MemberProfile>, ApiError>) {
        self.profile = match result {
            Ok(Some(profile)) => ProfileState::Found(profile),
            Ok(None) => {
                tracing::warn!("No record for member {}", self.member_id);
                ProfileState::NotFound
            }
            Err(err) => {
                tracing::error!("Error fetching member {}: {}", self.member_id, err);
                ProfileState::NotFound
            }
        };
    }

    /// Navigates to a different identifier, remembering the current one.
    /// Blank or identical identifiers are ignored.
    pub fn navigate_to(&mut self, member_id: impl Into<String>) {
        let member_id = member_id.into();
        if member_id.trim().is_empty() || member_id == self.member_id {
            return;
        }
        self.history
            .push(std::mem::replace(&mut self.member_id, member_id));
        self.begin_loading();
    }

    /// Returns to the previously viewed identifier, if any.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.member_id = previous;
                self.begin_loading();
                true
            }
            None => false,
        }
    }

    /// Whether the fetch for the current identifier is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.profile, ProfileState::Loading)
    }

    /// The fetched record, when in the Found state.
    pub fn found_profile(&self) -> Option<&MemberProfile> {
        match &self.profile {
            ProfileState::Found(profile) => Some(profile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> MemberProfile {
        MemberProfile {
            name: Some("Jane Doe".to_string()),
            adult_count: 2,
            children_count: 1,
            phone_number: Some("555-0100".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_found_after_successful_fetch() {
        let mut state = AppState::new("ABC123");
        assert!(state.is_loading());

        state.apply_result(Ok(Some(jane())));
        let profile = state.found_profile().unwrap();
        assert_eq!(profile.total_members(), 3);
        assert_eq!(profile.phone_number.as_deref(), Some("555-0100"));
        assert!(profile.email.is_none());
        assert!(profile.whatsapp_number.is_none());
    }

    #[test]
    fn test_empty_payload_is_not_found() {
        let mut state = AppState::new("MISSING");
        state.apply_result(Ok(None));
        assert_eq!(state.profile, ProfileState::NotFound);
        assert!(state.found_profile().is_none());
    }

    #[test]
    fn test_server_error_is_not_found() {
        let mut state = AppState::new("ABC123");
        state.apply_result(Err(ApiError::Server { status: 500 }));
        assert_eq!(state.profile, ProfileState::NotFound);
    }

    #[test]
    fn test_navigate_pushes_history_and_reloads() {
        let mut state = AppState::new("ABC123");
        state.apply_result(Ok(Some(jane())));
        state.photo_failed = true;

        state.navigate_to("XYZ789");
        assert_eq!(state.member_id, "XYZ789");
        assert_eq!(state.history, ["ABC123"]);
        assert!(state.is_loading());
        assert!(!state.photo_failed);
    }

    #[test]
    fn test_navigate_ignores_blank_and_same_id() {
        let mut state = AppState::new("ABC123");
        state.apply_result(Ok(Some(jane())));

        state.navigate_to("");
        state.navigate_to("  ");
        state.navigate_to("ABC123");
        assert!(state.history.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_go_back_pops_history() {
        let mut state = AppState::new("ABC123");
        state.navigate_to("XYZ789");
        state.apply_result(Ok(None));

        assert!(state.go_back());
        assert_eq!(state.member_id, "ABC123");
        assert!(state.is_loading());
        assert!(state.history.is_empty());

        // Nothing left to go back to
        assert!(!state.go_back());
    }
}
