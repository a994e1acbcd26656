use crate::auth::{use_role, use_session_store};
use crate::format_helpers::format_date_human;
use crate::routes::shared::{
    attendance_badge, ClearFilters, FilterKind, ListEmpty, ListLoading, PersonCell, SectionHeader,
};
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{AttendanceFilter, CollectionFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{AttendanceRecord, AttendanceStatus, Entity};
use shared_ui::{
    Badge, DataTable, DataTableCell, DataTableRow, FormSelect, Input, SearchBar, SelectOption,
};

#[component]
pub fn Attendance() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut status = use_signal(|| Option::<AttendanceStatus>::None);

    let data = use_resource(move || {
        let store = store.clone();
        async move {
            pages::load_collection::<AttendanceRecord>(&store, Entity::Attendance).await
        }
    });

    let filter = AttendanceFilter {
        search: search(),
        date: date(),
        status: status(),
    };
    let columns = policy::columns(role, Section::Attendance);
    let status_value = status().map(|s| s.code()).unwrap_or_default().to_string();
    let status_options: Vec<SelectOption> = AttendanceStatus::FILTERABLE
        .iter()
        .map(|s| SelectOption::new(s.code(), s.label()))
        .collect();

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Attendance }

            SearchBar {
                actions: rsx! {
                    ClearFilters {
                        active: filter.is_active(),
                        on_clear: move |_| {
                            search.set(String::new());
                            date.set(String::new());
                            status.set(None);
                        },
                    }
                },
                Input {
                    value: search(),
                    placeholder: "Search...",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                }
                Input {
                    input_type: "date",
                    value: date(),
                    on_input: move |evt: FormEvent| date.set(evt.value()),
                }
                FormSelect {
                    value: status_value,
                    placeholder: "All Status",
                    options: status_options,
                    onchange: move |evt: FormEvent| status.set(AttendanceStatus::from_code(&evt.value())),
                }
            }

            match &*data.read() {
                Some(records) => {
                    let shown = filter.apply(records);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Attendance.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::Combined,
                            }
                        }
                    } else {
                        rsx! {
                            DataTable {
                                headers: columns.iter().map(|c| c.header()).collect::<Vec<_>>(),
                                for record in shown {
                                    DataTableRow { key: "{record.id}",
                                        for column in columns.iter() {
                                            DataTableCell { {attendance_cell(&record, *column)} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! { ListLoading {} },
            }
        }
    }
}

fn attendance_cell(record: &AttendanceRecord, column: Column) -> Element {
    match column {
        Column::Student => match &record.student {
            Some(student) => rsx! {
                PersonCell {
                    name: student.user.full_name(),
                    initials: student.user.initials(),
                    detail: student.student_id.clone(),
                }
            },
            None => rsx! { "N/A" },
        },
        Column::Class => {
            let class_name = record.class_session.as_ref().map(|c| c.name.clone()).unwrap_or_default();
            let subject = record
                .class_session
                .as_ref()
                .map(|c| c.subject_name().to_string())
                .unwrap_or_default();
            rsx! {
                div { class: "stacked-cell",
                    span { "{class_name}" }
                    if !subject.is_empty() {
                        span { class: "person-detail", "{subject}" }
                    }
                }
            }
        }
        Column::Date => rsx! { "{format_date_human(&record.date)}" },
        Column::Status => rsx! {
            Badge { variant: attendance_badge(record.status), dot: true, "{record.status.label()}" }
        },
        Column::MarkedBy => {
            let marked_by = record
                .marked_by
                .as_ref()
                .map(|p| p.full_name())
                .unwrap_or_else(|| "N/A".into());
            rsx! { "{marked_by}" }
        }
        Column::Notes => {
            let notes = record
                .notes
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "-".into());
            rsx! { "{notes}" }
        }
        _ => rsx! {},
    }
}
