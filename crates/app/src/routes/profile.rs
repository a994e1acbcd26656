use crate::auth::use_auth;
use crate::routes::shared::SectionHeader;
use dioxus::prelude::*;
use shared_types::policy::Section;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, DetailItem, DetailList};

/// The signed-in user's own account.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let Some(user) = auth.user() else {
        return rsx! {};
    };

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Profile }

            Card {
                CardContent {
                    div { class: "profile-summary",
                        span { class: "profile-avatar", "{user.initials()}" }
                        div {
                            h2 { class: "profile-name", "{user.full_name()}" }
                            Badge { variant: BadgeVariant::Secondary, "{user.role.display_name()}" }
                        }
                    }
                    DetailList {
                        DetailItem { label: "Username", value: user.username.clone() }
                        DetailItem { label: "First Name", value: user.first_name.clone() }
                        DetailItem { label: "Last Name", value: user.last_name.clone() }
                        DetailItem { label: "Email", value: user.email.clone() }
                        DetailItem { label: "Phone", value: user.phone_number.clone().unwrap_or_default() }
                    }
                }
            }
        }
    }
}
