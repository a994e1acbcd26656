use crate::auth::{use_role, use_session_store};
use crate::routes::shared::{ClearFilters, FilterKind, ListEmpty, ListLoading, SectionHeader};
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{CollectionFilter, SearchFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{Entity, Subject};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardGrid, CardHeader, CardTitle, DetailItem,
    DetailList, Input, Modal, SearchBar,
};

#[component]
pub fn Subjects() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Subject>::None);

    let data = use_resource(move || {
        let store = store.clone();
        async move { pages::load_collection::<Subject>(&store, Entity::Subjects).await }
    });

    let filter = SearchFilter::<Subject>::new(search());
    let fields = policy::columns(role, Section::Subjects);

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Subjects }

            SearchBar {
                actions: rsx! {
                    ClearFilters {
                        active: filter.is_active(),
                        on_clear: move |_| search.set(String::new()),
                    }
                },
                Input {
                    value: search(),
                    placeholder: "Search subjects...",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            match &*data.read() {
                Some(subjects) => {
                    let shown = filter.apply(subjects);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Subjects.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::SearchOnly,
                            }
                        }
                    } else {
                        rsx! {
                            CardGrid {
                                for subject in shown {
                                    SubjectCard {
                                        key: "{subject.id}",
                                        subject: subject.clone(),
                                        fields: fields.clone(),
                                        on_select: move |s: Subject| selected.set(Some(s)),
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! { ListLoading {} },
            }

            if let Some(subject) = selected() {
                Modal {
                    open: true,
                    title: "Subject Details",
                    on_close: move |_| selected.set(None),
                    DetailList {
                        DetailItem { label: "Subject Name", value: subject.name.clone() }
                        DetailItem { label: "Subject Code", value: subject.code.clone() }
                        DetailItem { label: "Credits", value: subject.credits.to_string() }
                        DetailItem { label: "Description", value: subject.description.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectCard(subject: Subject, fields: Vec<Column>, on_select: EventHandler<Subject>) -> Element {
    let clicked = subject.clone();
    rsx! {
        Card {
            class: "entity-card",
            onclick: move |_| on_select.call(clicked.clone()),
            CardHeader {
                CardTitle { "{subject.name}" }
            }
            CardContent {
                for field in fields {
                    match field {
                        Column::Code => rsx! {
                            Badge { variant: BadgeVariant::Outline, "{subject.code}" }
                        },
                        Column::Credits => rsx! {
                            span { class: "subject-credits", "{subject.credits_label()}" }
                        },
                        Column::Description => rsx! {
                            p { class: "entity-card-description", "{subject.description}" }
                        },
                        _ => rsx! {},
                    }
                }
            }
        }
    }
}
