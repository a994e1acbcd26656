use crate::auth::{use_role, use_session_store};
use crate::routes::shared::{ClearFilters, FilterKind, ListEmpty, ListLoading, SectionHeader};
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{CollectionFilter, SearchFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{Entity, SchoolClass};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardGrid, CardHeader, CardTitle,
    DetailItem, DetailList, Input, Modal, SearchBar,
};

#[component]
pub fn Classes() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<SchoolClass>::None);

    let data = use_resource(move || {
        let store = store.clone();
        async move { pages::load_collection::<SchoolClass>(&store, Entity::Classes).await }
    });

    let filter = SearchFilter::<SchoolClass>::new(search());
    let fields = policy::columns(role, Section::Classes);

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Classes }

            SearchBar {
                actions: rsx! {
                    ClearFilters {
                        active: filter.is_active(),
                        on_clear: move |_| search.set(String::new()),
                    }
                },
                Input {
                    value: search(),
                    placeholder: "Search classes...",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            match &*data.read() {
                Some(classes) => {
                    let shown = filter.apply(classes);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Classes.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::SearchOnly,
                            }
                        }
                    } else {
                        rsx! {
                            CardGrid {
                                for item in shown {
                                    ClassCard {
                                        key: "{item.id}",
                                        item: item.clone(),
                                        fields: fields.clone(),
                                        on_select: move |c: SchoolClass| selected.set(Some(c)),
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! { ListLoading {} },
            }

            if let Some(item) = selected() {
                ClassDetails { item, on_close: move |_| selected.set(None) }
            }
        }
    }
}

/// "Mon, Wed 09:00", or whichever half is known.
fn schedule_label(class: &SchoolClass) -> String {
    let days = class.schedule_days.as_deref().unwrap_or("").trim();
    let time = class.schedule_time.as_deref().unwrap_or("").trim();
    match (days.is_empty(), time.is_empty()) {
        (false, false) => format!("{} {}", days, time),
        (false, true) => days.to_string(),
        (true, false) => time.to_string(),
        (true, true) => String::new(),
    }
}

fn enrollment_label(class: &SchoolClass) -> String {
    format!("{} / {} students", class.student_count, class.max_capacity)
}

#[component]
fn ClassCard(item: SchoolClass, fields: Vec<Column>, on_select: EventHandler<SchoolClass>) -> Element {
    let clicked = item.clone();
    let code = item.subject.as_ref().map(|s| s.code.clone()).unwrap_or_default();

    rsx! {
        Card {
            class: "entity-card",
            onclick: move |_| on_select.call(clicked.clone()),
            CardHeader {
                CardTitle { "{item.name}" }
                if !code.is_empty() {
                    Badge { variant: BadgeVariant::Outline, "{code}" }
                }
            }
            CardContent {
                DetailList {
                    for field in fields {
                        {class_field(&item, field)}
                    }
                }
            }
        }
    }
}

fn class_field(class: &SchoolClass, field: Column) -> Element {
    match field {
        Column::Subject => rsx! { DetailItem { label: "Subject", value: class.subject_name().to_string() } },
        Column::Teacher => rsx! { DetailItem { label: "Teacher", value: class.teacher_name() } },
        Column::Schedule => rsx! { DetailItem { label: "Schedule", value: schedule_label(class) } },
        Column::Room => rsx! { DetailItem { label: "Room", value: class.room_number.clone().unwrap_or_default() } },
        Column::Capacity => rsx! { DetailItem { label: "Enrollment", value: enrollment_label(class) } },
        _ => rsx! {},
    }
}

#[component]
fn ClassDetails(item: SchoolClass, on_close: EventHandler<()>) -> Element {
    let subject = item
        .subject
        .as_ref()
        .map(|s| format!("{} ({})", s.name, s.code))
        .unwrap_or_default();
    let credits = item.subject.as_ref().map(|s| s.credits).unwrap_or(0);
    let description = item
        .subject
        .as_ref()
        .map(|s| s.description.clone())
        .unwrap_or_default();

    rsx! {
        Modal {
            open: true,
            title: "Class Details",
            on_close: move |_| on_close.call(()),
            DetailList {
                DetailItem { label: "Class Name", value: item.name.clone() }
                DetailItem { label: "Subject", value: subject }
                DetailItem { label: "Teacher", value: item.teacher_name() }
                DetailItem { label: "Room Number", value: item.room_number.clone().unwrap_or_default() }
                DetailItem { label: "Schedule Time", value: item.schedule_time.clone().unwrap_or_default() }
                DetailItem { label: "Schedule Days", value: item.schedule_days.clone().unwrap_or_default() }
                DetailItem { label: "Credits", value: credits.to_string() }
                DetailItem { label: "Enrollment", value: enrollment_label(&item) }
                if !description.is_empty() {
                    DetailItem { label: "Subject Description", value: description }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_joins_known_parts() {
        let mut class = SchoolClass {
            schedule_days: Some("Mon, Wed".into()),
            schedule_time: Some("09:00".into()),
            ..SchoolClass::default()
        };
        assert_eq!(schedule_label(&class), "Mon, Wed 09:00");

        class.schedule_time = None;
        assert_eq!(schedule_label(&class), "Mon, Wed");

        class.schedule_days = Some("  ".into());
        assert_eq!(schedule_label(&class), "");
    }

    #[test]
    fn enrollment_shows_count_over_capacity() {
        let class = SchoolClass {
            student_count: 18,
            max_capacity: 30,
            ..SchoolClass::default()
        };
        assert_eq!(enrollment_label(&class), "18 / 30 students");
    }
}
