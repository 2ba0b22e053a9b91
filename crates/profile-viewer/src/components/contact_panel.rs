//! Contact details panel with call, WhatsApp, and email actions.

use dioxus::prelude::*;
use profile_api::MemberProfile;
use profile_ui::ContactDetailItem;

use crate::actions::{self, SystemNav};

/// Contact rows for phone, WhatsApp, email, and address. Action buttons
/// appear only for rows whose value is present.
#[component]
pub fn ContactPanel(profile: MemberProfile) -> Element {
    let phone = profile.phone_number.clone();
    let whatsapp = profile.whatsapp_number.clone();
    let email = profile.email.clone();

    rsx! {
        section {
            class: "panel contact-panel",

            div {
                class: "panel-header",
                h2 {
                    class: "panel-title",
                    "Primary Contact Information"
                }
            }

            div {
                class: "contact-list",

                ContactDetailItem {
                    label: "Phone Number".to_string(),
                    value: profile.phone_number.clone(),
                    action_label: "Call".to_string(),
                    on_action: move |_: ()| actions::call(&SystemNav, phone.as_deref()),
                }

                ContactDetailItem {
                    label: "WhatsApp Number".to_string(),
                    value: profile.whatsapp_number.clone(),
                    action_label: "WhatsApp".to_string(),
                    on_action: move |_: ()| actions::whatsapp(&SystemNav, whatsapp.as_deref()),
                }

                ContactDetailItem {
                    label: "Email Address".to_string(),
                    value: profile.email.clone(),
                    action_label: "Email".to_string(),
                    on_action: move |_: ()| actions::email(&SystemNav, email.as_deref()),
                }

                ContactDetailItem {
                    label: "Address".to_string(),
                    value: profile.address.clone(),
                }
            }
        }
    }
}
