//! Profile header with photo, identity, and the share action.

use dioxus::prelude::*;
use profile_api::MemberProfile;
use profile_ui::text_display;

use crate::actions::{self, SystemNav};
use crate::config;
use crate::state::AppState;

/// Header card: avatar (photo or letter fallback), name, company, the
/// identifier badge, and the share button.
#[component]
pub fn ProfileHeader(state: Signal<AppState>, profile: MemberProfile) -> Element {
    let mut state_write = state;
    let member_id = state.read().member_id.clone();
    let photo_failed = state.read().photo_failed;

    let photo_url = profile.photo_url(config::api_base());
    let name = text_display(profile.name.as_deref());
    let company = text_display(profile.company_id.as_deref());

    // First letter of the name for the placeholder avatar
    let initial = profile
        .name
        .as_deref()
        .and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    let avatar = match photo_source(photo_url, photo_failed) {
        Some(url) => rsx! {
            img {
                class: "avatar-photo",
                src: "{url}",
                onerror: move |_| {
                    tracing::debug!("Profile photo failed to load, using placeholder");
                    state_write.write().photo_failed = true;
                },
            }
        },
        None => rsx! {
            div {
                class: "avatar-placeholder",
                "{initial}"
            }
        },
    };

    let share_name = name.clone();
    let share_id = member_id.clone();

    rsx! {
        section {
            class: "profile-header",

            div {
                class: "avatar-block",
                {avatar}
                span {
                    class: "id-badge",
                    "ID: {member_id}"
                }
            }

            div {
                class: "identity-block",
                h2 {
                    class: "profile-name",
                    "{name}"
                }
                div {
                    class: "profile-tags",
                    span {
                        class: "profile-company",
                        "Company: {company}"
                    }
                    span {
                        class: "profile-status",
                        "Registered"
                    }
                }
            }

            button {
                class: "share-btn",
                onclick: move |_| {
                    let link = config::profile_url(&share_id);
                    actions::share_profile(&SystemNav, &share_name, &share_id, &link);
                },
                "Share Profile"
            }
        }
    }
}

/// Which image the avatar should show. `None` means the letter placeholder:
/// either there is no photo, or it failed to load.
fn photo_source(photo_url: Option<String>, photo_failed: bool) -> Option<String> {
    if photo_failed {
        None
    } else {
        photo_url
    }
}
