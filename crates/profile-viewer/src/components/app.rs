//! Root application component for the profile viewer.

use dioxus::prelude::*;
use profile_ui::ThemedRoot;

use crate::state::AppState;

use super::{ContactPanel, LoadingScreen, NotFoundScreen, PersonalPanel, ProfileHeader, StatsPanel};

/// Root application component. Renders one of the three view states.
#[component]
pub fn App(state: Signal<AppState>) -> Element {
    let is_loading = state.read().is_loading();
    let found = state.read().found_profile().cloned();

    let body = if is_loading {
        rsx! {
            LoadingScreen {}
        }
    } else if let Some(profile) = found {
        rsx! {
            main {
                class: "main-content",

                ProfileHeader { state, profile: profile.clone() }

                div {
                    class: "detail-grid",

                    // Left column - counts and personal info
                    div {
                        class: "left-column",
                        StatsPanel { profile: profile.clone() }
                        PersonalPanel { profile: profile.clone() }
                    }

                    // Right column - contact details
                    ContactPanel { profile }
                }
            }
        }
    } else {
        rsx! {
            NotFoundScreen { state }
        }
    };

    rsx! {
        ThemedRoot {
            div {
                class: "profile-viewer",

                Header { state }

                {body}
            }
        }
    }
}

/// Header with the app title, current identifier, and an identifier input
/// for opening another profile.
#[component]
fn Header(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let mut id_input = use_signal(String::new);
    let member_id = state.read().member_id.clone();

    let mut open_entered = move || {
        let id = id_input.read().trim().to_string();
        if !id.is_empty() {
            state_write.write().navigate_to(id);
            id_input.set(String::new());
        }
    };

    rsx! {
        header {
            class: "header",

            div {
                class: "header-left",
                h1 {
                    class: "header-title",
                    "Member Profile"
                }
                span {
                    class: "header-member",
                    "ID: {member_id}"
                }
            }

            div {
                class: "header-right",
                input {
                    class: "id-input",
                    placeholder: "Open another ID",
                    value: "{id_input}",
                    oninput: move |evt| id_input.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            open_entered();
                        }
                    },
                }
                button {
                    class: "id-open-btn",
                    onclick: move |_| open_entered(),
                    "Open"
                }
            }
        }
    }
}
