use dioxus::prelude::*;

/// One `<option>`: the submitted value and the text shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Native `<select>` over a fixed option list.
///
/// A non-empty `placeholder` adds a leading option with an empty value,
/// used by filters as the "no restriction" choice.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<SelectOption>,
    #[props(default)] placeholder: String,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let narrowed = !placeholder.is_empty() && !value.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                "data-filtered": narrowed,
                value: value.clone(),
                disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
