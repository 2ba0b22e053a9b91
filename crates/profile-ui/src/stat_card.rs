//! Labeled stat card used in the guest and food overview grid.

use dioxus::prelude::*;

/// A single stat card with a preformatted value and an accent color class.
#[component]
pub fn StatCard(label: String, value: String, accent: String) -> Element {
    rsx! {
        div {
            class: "stat-card stat-{accent}",

            span {
                class: "stat-value",
                "{value}"
            }

            span {
                class: "stat-label",
                "{label}"
            }
        }
    }
}
