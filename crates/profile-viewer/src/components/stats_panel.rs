//! Guest/food count stats and the personal info panel.

use dioxus::prelude::*;
use profile_api::MemberProfile;
use profile_ui::{count_display, text_display, StatCard};

/// Guest and food overview: total party plus the four counts. Zero is a
/// real count and renders as "0".
#[component]
pub fn StatsPanel(profile: MemberProfile) -> Element {
    rsx! {
        section {
            class: "panel stats-panel",

            div {
                class: "panel-header",
                h2 {
                    class: "panel-title",
                    "Guest & Food Overview"
                }
            }

            div {
                class: "stats-grid",

                StatCard {
                    label: "Total Party".to_string(),
                    value: profile.total_members().to_string(),
                    accent: "indigo".to_string(),
                }

                StatCard {
                    label: "Adults".to_string(),
                    value: count_display(profile.adult_count),
                    accent: "teal".to_string(),
                }

                StatCard {
                    label: "Children".to_string(),
                    value: count_display(profile.children_count),
                    accent: "teal".to_string(),
                }

                StatCard {
                    label: "Veg".to_string(),
                    value: count_display(profile.veg_count),
                    accent: "green".to_string(),
                }

                StatCard {
                    label: "Non-Veg".to_string(),
                    value: count_display(profile.non_veg_count),
                    accent: "red".to_string(),
                }
            }
        }
    }
}

/// Age and gender rows.
#[component]
pub fn PersonalPanel(profile: MemberProfile) -> Element {
    let age = text_display(profile.age.map(|a| a.to_string()).as_deref());
    let gender = text_display(profile.gender.as_deref());

    rsx! {
        section {
            class: "panel personal-panel",

            div {
                class: "panel-header",
                h2 {
                    class: "panel-title",
                    "Personal Info"
                }
            }

            div {
                class: "personal-rows",

                div {
                    class: "personal-row",
                    span {
                        class: "personal-label",
                        "Age"
                    }
                    span {
                        class: "personal-value",
                        "{age}"
                    }
                }

                div {
                    class: "personal-row",
                    span {
                        class: "personal-label",
                        "Gender"
                    }
                    span {
                        class: "personal-value",
                        "{gender}"
                    }
                }
            }
        }
    }
}
