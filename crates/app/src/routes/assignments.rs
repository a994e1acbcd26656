use crate::auth::{use_role, use_session_store};
use crate::format_helpers::{format_datetime_human, format_due_in, format_points};
use crate::routes::shared::{
    assignment_badge, ClearFilters, FilterKind, ListEmpty, ListLoading, SectionHeader,
};
use chrono::Utc;
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{AssignmentFilter, CollectionFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{parse_timestamp, Assignment, AssignmentStatus, Entity};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardGrid, CardHeader, CardTitle, DetailItem,
    DetailList, FormSelect, Input, Modal, SearchBar, SelectOption,
};

#[component]
pub fn Assignments() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| Option::<AssignmentStatus>::None);
    let mut selected = use_signal(|| Option::<Assignment>::None);

    let data = use_resource(move || {
        let store = store.clone();
        async move { pages::load_collection::<Assignment>(&store, Entity::Assignments).await }
    });

    let filter = AssignmentFilter {
        search: search(),
        status: status(),
    };
    let fields = policy::columns(role, Section::Assignments);
    let status_value = status().map(|s| s.code()).unwrap_or_default().to_string();
    let status_options: Vec<SelectOption> = AssignmentStatus::FILTERABLE
        .iter()
        .map(|s| SelectOption::new(s.code(), s.label()))
        .collect();

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Assignments }

            SearchBar {
                actions: rsx! {
                    ClearFilters {
                        active: filter.is_active(),
                        on_clear: move |_| {
                            search.set(String::new());
                            status.set(None);
                        },
                    }
                },
                Input {
                    value: search(),
                    placeholder: "Search assignments...",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                }
                FormSelect {
                    value: status_value,
                    placeholder: "All Status",
                    options: status_options,
                    onchange: move |evt: FormEvent| status.set(AssignmentStatus::from_code(&evt.value())),
                }
            }

            match &*data.read() {
                Some(assignments) => {
                    let shown = filter.apply(assignments);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Assignments.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::Combined,
                            }
                        }
                    } else {
                        rsx! {
                            CardGrid {
                                for assignment in shown {
                                    AssignmentCard {
                                        key: "{assignment.id}",
                                        assignment: assignment.clone(),
                                        fields: fields.clone(),
                                        on_select: move |a: Assignment| selected.set(Some(a)),
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! { ListLoading {} },
            }

            if let Some(assignment) = selected() {
                AssignmentDetails { assignment, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn StatusBadges(assignment: Assignment) -> Element {
    let overdue = assignment.shows_overdue_flag(Utc::now());
    rsx! {
        div { class: "badge-row",
            Badge { variant: assignment_badge(assignment.status), "{assignment.status.label()}" }
            if overdue {
                Badge { variant: BadgeVariant::Destructive, "Overdue" }
            }
        }
    }
}

#[component]
fn AssignmentCard(
    assignment: Assignment,
    fields: Vec<Column>,
    on_select: EventHandler<Assignment>,
) -> Element {
    let clicked = assignment.clone();
    let now = Utc::now();
    let due_class = if assignment.is_overdue(now) { "due-date overdue" } else { "due-date" };
    let due_hint = match assignment.status {
        AssignmentStatus::Published => {
            parse_timestamp(&assignment.due_date).and_then(|due| format_due_in(due, now))
        }
        _ => None,
    };

    rsx! {
        Card {
            class: "entity-card",
            onclick: move |_| on_select.call(clicked.clone()),
            CardHeader {
                CardTitle { "{assignment.title}" }
                if fields.contains(&Column::Status) {
                    StatusBadges { assignment: assignment.clone() }
                }
            }
            CardContent {
                p { class: "entity-card-description", "{assignment.description}" }
                DetailList {
                    for field in fields.iter().filter(|f| **f != Column::Status) {
                        match field {
                            Column::Class => rsx! {
                                DetailItem { label: "Class", value: assignment.class_name().to_string() }
                            },
                            Column::Subject => rsx! {
                                DetailItem { label: "Subject", value: assignment.subject_name().to_string() }
                            },
                            Column::Teacher => rsx! {
                                DetailItem { label: "Teacher", value: assignment.teacher_name() }
                            },
                            Column::MaxPoints => rsx! {
                                DetailItem { label: "Points", value: format_points(assignment.max_points) }
                            },
                            Column::DueDate => rsx! {
                                DetailItem { label: "Due",
                                    span { class: due_class, "{format_datetime_human(&assignment.due_date)}" }
                                    if let Some(hint) = &due_hint {
                                        span { class: "due-hint", "{hint}" }
                                    }
                                }
                            },
                            Column::Submissions => rsx! {
                                DetailItem { label: "Submissions", value: assignment.submission_count.to_string() }
                            },
                            _ => rsx! {},
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AssignmentDetails(assignment: Assignment, on_close: EventHandler<()>) -> Element {
    let due_class = if assignment.is_overdue(Utc::now()) { "due-date overdue" } else { "due-date" };

    rsx! {
        Modal {
            open: true,
            title: "Assignment Details",
            on_close: move |_| on_close.call(()),
            h4 { class: "modal-subtitle", "{assignment.title}" }
            StatusBadges { assignment: assignment.clone() }
            DetailList {
                DetailItem { label: "Class", value: assignment.class_name().to_string() }
                DetailItem { label: "Subject", value: assignment.subject_name().to_string() }
                DetailItem { label: "Teacher", value: assignment.teacher_name() }
                DetailItem { label: "Max Points", value: format_points(assignment.max_points) }
                DetailItem { label: "Due Date",
                    span { class: due_class, "{format_datetime_human(&assignment.due_date)}" }
                }
                DetailItem { label: "Submissions", value: assignment.submission_count.to_string() }
                DetailItem { label: "Description", value: assignment.description.clone() }
                DetailItem { label: "Created", value: format_datetime_human(&assignment.created_at) }
                DetailItem { label: "Updated", value: format_datetime_human(&assignment.updated_at) }
            }
        }
    }
}
