use crate::auth::{use_role, use_session_store};
use crate::format_helpers::format_date_human;
use crate::routes::shared::{
    ClearFilters, FilterKind, ListEmpty, ListLoading, PersonCell, SectionHeader,
};
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{CollectionFilter, SearchFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{Entity, Student};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableCell, DataTableRow, DetailItem, DetailList, Input,
    Modal, SearchBar,
};

#[component]
pub fn Students() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Student>::None);

    let data = use_resource(move || {
        let store = store.clone();
        async move { pages::load_collection::<Student>(&store, Entity::Students).await }
    });

    let filter = SearchFilter::<Student>::new(search());
    let columns = policy::columns(role, Section::Students);

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Students }

            if policy::show_search(role, Section::Students) {
                SearchBar {
                    actions: rsx! {
                        ClearFilters {
                            active: filter.is_active(),
                            on_clear: move |_| search.set(String::new()),
                        }
                    },
                    Input {
                        value: search(),
                        placeholder: "Search students...",
                        on_input: move |evt: FormEvent| search.set(evt.value()),
                    }
                }
            }

            match &*data.read() {
                Some(students) => {
                    let shown = filter.apply(students);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Students.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::SearchOnly,
                            }
                        }
                    } else {
                        rsx! {
                            DataTable {
                                headers: columns.iter().map(|c| c.header()).collect::<Vec<_>>(),
                                for student in shown {
                                    StudentRow {
                                        key: "{student.id}",
                                        student: student.clone(),
                                        columns: columns.clone(),
                                        on_select: move |s: Student| selected.set(Some(s)),
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! { ListLoading {} },
            }

            if let Some(student) = selected() {
                StudentDetails { student, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn StudentRow(student: Student, columns: Vec<Column>, on_select: EventHandler<Student>) -> Element {
    let row_student = student.clone();
    rsx! {
        DataTableRow {
            onclick: move |_| on_select.call(row_student.clone()),
            for column in columns {
                DataTableCell { {student_cell(&student, column)} }
            }
        }
    }
}

fn student_cell(student: &Student, column: Column) -> Element {
    match column {
        Column::Student => rsx! {
            PersonCell {
                name: student.user.full_name(),
                initials: student.user.initials(),
                detail: student.user.email.clone(),
            }
        },
        Column::StudentId => rsx! { "{student.student_id}" },
        Column::GradeLevel => rsx! { "{student.grade_level}" },
        Column::EnrollmentDate => rsx! { "{format_date_human(&student.enrollment_date)}" },
        Column::Contact => {
            let phone = student.user.phone_number.clone().unwrap_or_else(|| "N/A".into());
            let parent = student.parent_name.clone().unwrap_or_default();
            rsx! {
                div { class: "contact-cell",
                    span { "{phone}" }
                    if !parent.is_empty() {
                        span { class: "person-detail", "Parent: {parent}" }
                    }
                }
            }
        }
        Column::Actions => rsx! {
            Button { variant: ButtonVariant::Ghost, "View" }
        },
        _ => rsx! {},
    }
}

#[component]
fn StudentDetails(student: Student, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal {
            open: true,
            title: "Student Details",
            on_close: move |_| on_close.call(()),
            DetailList {
                DetailItem { label: "Name", value: student.user.full_name() }
                DetailItem { label: "Student ID", value: student.student_id.clone() }
                DetailItem { label: "Email", value: student.user.email.clone() }
                DetailItem { label: "Phone", value: student.user.phone_number.clone().unwrap_or_default() }
                DetailItem { label: "Grade Level", value: student.grade_level.clone() }
                DetailItem { label: "Enrollment Date", value: format_date_human(&student.enrollment_date) }
                DetailItem { label: "Address", value: student.user.address.clone().unwrap_or_default() }
                DetailItem { label: "Parent Name", value: student.parent_name.clone().unwrap_or_default() }
                DetailItem { label: "Parent Phone", value: student.parent_phone.clone().unwrap_or_default() }
            }
        }
    }
}
