use dioxus::prelude::*;

/// Scrollable table. `headers` become the single header row; rows go in
/// the children, usually one [`DataTableRow`] per record.
#[component]
pub fn DataTable(headers: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for header in headers {
                            th { key: "{header}", scope: "col", "{header}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// Table row, clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        tr {
            class: "data-table-row",
            "data-clickable": clickable,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Table cell. `numeric` right-aligns figures such as scores.
#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { "data-numeric": numeric, {children} }
    }
}
