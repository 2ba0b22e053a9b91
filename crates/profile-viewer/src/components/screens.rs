//! Full-page loading and not-found screens.

use dioxus::prelude::*;

use crate::state::AppState;

/// Shown while the fetch for the current identifier is in flight.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "state-screen",

            div {
                class: "state-card",
                div {
                    class: "spinner",
                }
                p {
                    class: "state-message",
                    "Loading member profile..."
                }
            }
        }
    }
}

/// Shown when the fetch failed or the server carried no record. The only
/// recovery action is returning to the previously viewed identifier.
#[component]
pub fn NotFoundScreen(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let can_go_back = !state.read().history.is_empty();

    rsx! {
        div {
            class: "state-screen",

            div {
                class: "state-card not-found-card",
                div {
                    class: "not-found-icon",
                    "!"
                }
                h3 {
                    class: "not-found-title",
                    "Member Not Found"
                }
                p {
                    class: "not-found-text",
                    "The requested member profile could not be loaded."
                }
                button {
                    class: "back-btn",
                    disabled: !can_go_back,
                    onclick: move |_| {
                        state_write.write().go_back();
                    },
                    "Go Back"
                }
            }
        }
    }
}
