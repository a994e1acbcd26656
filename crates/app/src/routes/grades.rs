use crate::auth::{use_role, use_session_store};
use crate::format_helpers::{format_date_human, format_points};
use crate::routes::shared::{
    grade_badge, ClearFilters, FilterKind, ListEmpty, ListLoading, PersonCell, SectionHeader,
};
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{self, CollectionFilter, GradeFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{Entity, Grade, Subject};
use shared_ui::{
    Badge, Card, CardContent, DataTable, DataTableCell, DataTableRow, FormSelect, Input, SearchBar,
    SelectOption,
};

#[component]
pub fn Grades() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut subject_id = use_signal(|| Option::<i64>::None);

    let grades_store = store.clone();
    let data = use_resource(move || {
        let store = grades_store.clone();
        async move { pages::load_collection::<Grade>(&store, Entity::Grades).await }
    });
    let subjects = use_resource(move || {
        let store = store.clone();
        async move { pages::load_collection::<Subject>(&store, Entity::Subjects).await }
    });

    let filter = GradeFilter {
        search: search(),
        subject_id: subject_id(),
    };
    let columns = policy::columns(role, Section::Grades);
    let subject_value = subject_id().map(|id| id.to_string()).unwrap_or_default();
    let subject_options: Vec<SelectOption> = subjects
        .read()
        .iter()
        .flatten()
        .map(|s| SelectOption::new(s.id, &s.name))
        .collect();

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Grades,
                if let Some(grades) = &*data.read() {
                    if let Some(average) = filters::average_percentage(&filter.apply(grades)) {
                        Card { class: "average-card",
                            CardContent {
                                div { class: "stat-value", "{average:.1}%" }
                                div { class: "stat-label", "Average Grade" }
                            }
                        }
                    }
                }
            }

            SearchBar {
                actions: rsx! {
                    ClearFilters {
                        active: filter.is_active(),
                        on_clear: move |_| {
                            search.set(String::new());
                            subject_id.set(None);
                        },
                    }
                },
                Input {
                    value: search(),
                    placeholder: "Search...",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                }
                FormSelect {
                    value: subject_value,
                    placeholder: "All Subjects",
                    options: subject_options,
                    onchange: move |evt: FormEvent| subject_id.set(evt.value().parse::<i64>().ok()),
                }
            }

            match &*data.read() {
                Some(grades) => {
                    let shown = filter.apply(grades);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Grades.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::Combined,
                            }
                        }
                    } else {
                        rsx! {
                            DataTable {
                                headers: columns.iter().map(|c| c.header()).collect::<Vec<_>>(),
                                for grade in shown {
                                    DataTableRow { key: "{grade.id}",
                                        for column in columns.iter() {
                                            DataTableCell {
                                                numeric: matches!(column, Column::Grade | Column::Percentage),
                                                {grade_cell(&grade, *column)}
                                            }
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

fn grade_cell(grade: &Grade, column: Column) -> Element {
    match column {
        Column::Student => match &grade.student {
            Some(student) => rsx! {
                PersonCell {
                    name: student.user.full_name(),
                    initials: student.user.initials(),
                    detail: student.student_id.clone(),
                }
            },
            None => rsx! { "N/A" },
        },
        Column::Subject => {
            let (name, code) = grade
                .subject
                .as_ref()
                .map(|s| (s.name.clone(), s.code.clone()))
                .unwrap_or_default();
            rsx! {
                div { class: "stacked-cell",
                    span { "{name}" }
                    if !code.is_empty() {
                        span { class: "person-detail", "{code}" }
                    }
                }
            }
        }
        Column::Assignment => rsx! { "{grade.assignment_name}" },
        Column::Grade => {
            let earned = format_points(grade.grade);
            let max = format_points(grade.max_grade);
            rsx! { "{earned}/{max}" }
        }
        Column::Percentage => rsx! { "{grade.percentage:.1}%" },
        Column::LetterGrade => {
            let letter = filters::letter_grade(grade.percentage);
            rsx! {
                Badge { variant: grade_badge(grade.percentage), "{letter}" }
            }
        }
        Column::Date => rsx! { "{format_date_human(&grade.date_assigned)}" },
        _ => rsx! {},
    }
}
