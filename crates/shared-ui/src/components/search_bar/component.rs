use dioxus::prelude::*;

/// Filter controls above a list. Inputs and selects go in the children;
/// `actions` sits at the trailing edge, e.g. a clear button.
#[component]
pub fn SearchBar(
    #[props(default = "Filters".to_string())] label: String,
    #[props(default)] actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search", aria_label: "{label}",
            div { class: "search-bar-fields", {children} }
            if let Some(actions) = actions {
                div { class: "search-bar-actions", {actions} }
            }
        }
    }
}
