use crate::auth::use_role;
use crate::routes::{section_icon, Route};
use client::router::AppPath;
use dioxus::prelude::*;
use shared_types::policy;
use shared_ui::EmptyState;

/// Unknown path. Only signed-in users get here; the session gate sends
/// everyone else to the login page first. There is no sidebar outside the
/// app layout, so the sections the role can open are listed instead.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let role = use_role();
    let path = AppPath::parse(&format!("/{}", route.join("/"))).as_path();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            EmptyState {
                title: "Page not found",
                description: format!("Nothing lives at {path}."),
            }
            nav { class: "not-found-links",
                for item in policy::navigation(role) {
                    Link {
                        key: "{item.path}",
                        to: Route::for_section(item.section),
                        class: "not-found-link",
                        {section_icon(item.section)}
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}
