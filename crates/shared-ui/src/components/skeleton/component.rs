use dioxus::prelude::*;

/// Loading placeholder with an animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Full-page spinner used while the session is being restored.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-screen",
            div { class: "loading-spinner" }
            p { "{message}" }
        }
    }
}
