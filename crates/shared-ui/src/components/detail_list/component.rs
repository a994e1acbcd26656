use dioxus::prelude::*;

/// A container for label/value pairs in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// For plain text pass `value`; for rich content (badges, links) use
/// children instead. Blank values render as `N/A`.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());
    let shown = if value.trim().is_empty() { "N/A".to_string() } else { value };

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{shown}"
                }
            }
        }
    }
}
