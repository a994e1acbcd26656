use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Centered modal with a backdrop. Clicking the backdrop or the close
/// button calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] footer: Option<Element>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                    }
                }
                div { class: "modal-body", {children} }
                if let Some(footer) = footer {
                    div { class: "modal-footer", {footer} }
                }
            }
        }
    }
}
