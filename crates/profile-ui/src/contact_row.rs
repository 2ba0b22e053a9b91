//! Contact detail row with an optional action button.

use dioxus::prelude::*;

use crate::display::{action_visible, text_display};

/// A labeled contact value. The action button renders only when both an
/// action handler and a non-blank value are present; absent values render
/// the placeholder with no button.
#[component]
pub fn ContactDetailItem(
    label: String,
    value: Option<String>,
    #[props(default = String::new())] action_label: String,
    #[props(default)] on_action: Option<EventHandler<()>>,
) -> Element {
    let show_action =
        action_visible(value.as_deref(), on_action.is_some()) && !action_label.is_empty();
    let display = text_display(value.as_deref());

    rsx! {
        div {
            class: "contact-row",

            div {
                class: "contact-info",
                div {
                    class: "contact-label",
                    "{label}"
                }
                div {
                    class: "contact-value",
                    "{display}"
                }
            }

            if show_action {
                button {
                    class: "contact-action",
                    onclick: move |_| {
                        if let Some(handler) = on_action {
                            handler.call(());
                        }
                    },
                    "{action_label}"
                }
            }
        }
    }
}
