use dioxus::prelude::*;

/// Placeholder shown when a list has nothing to display.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: String,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            if let Some(icon) = icon {
                div { class: "empty-state-icon", {icon} }
            }
            h3 { class: "empty-state-title", "{title}" }
            if !description.is_empty() {
                p { class: "empty-state-description", "{description}" }
            }
        }
    }
}
