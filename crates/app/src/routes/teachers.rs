use crate::auth::{use_role, use_session_store};
use crate::format_helpers::format_date_human;
use crate::routes::shared::{
    ClearFilters, FilterKind, ListEmpty, ListLoading, PersonCell, SectionHeader,
};
use client::pages;
use dioxus::prelude::*;
use shared_types::filters::{CollectionFilter, SearchFilter};
use shared_types::policy::{self, Column, Section};
use shared_types::{Entity, Teacher};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableCell, DataTableRow, DetailItem,
    DetailList, Input, Modal, SearchBar,
};

#[component]
pub fn Teachers() -> Element {
    let store = use_session_store();
    let role = use_role();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Teacher>::None);

    let data = use_resource(move || {
        let store = store.clone();
        async move { pages::load_collection::<Teacher>(&store, Entity::Teachers).await }
    });

    let filter = SearchFilter::<Teacher>::new(search());
    let columns = policy::columns(role, Section::Teachers);

    rsx! {
        div { class: "container",
            SectionHeader { section: Section::Teachers }

            SearchBar {
                actions: rsx! {
                    ClearFilters {
                        active: filter.is_active(),
                        on_clear: move |_| search.set(String::new()),
                    }
                },
                Input {
                    value: search(),
                    placeholder: "Search teachers...",
                    on_input: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            match &*data.read() {
                Some(teachers) => {
                    let shown = filter.apply(teachers);
                    if shown.is_empty() {
                        rsx! {
                            ListEmpty {
                                noun: Entity::Teachers.noun(),
                                filtered: filter.is_active(),
                                kind: FilterKind::SearchOnly,
                            }
                        }
                    } else {
                        rsx! {
                            DataTable {
                                headers: columns.iter().map(|c| c.header()).collect::<Vec<_>>(),
                                for teacher in shown {
                                    TeacherRow {
                                        key: "{teacher.id}",
                                        teacher: teacher.clone(),
                                        columns: columns.clone(),
                                        on_select: move |t: Teacher| selected.set(Some(t)),
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! { ListLoading {} },
            }

            if let Some(teacher) = selected() {
                TeacherDetails { teacher, on_close: move |_| selected.set(None) }
            }
        }
    }
}

/// "1 year" / "5 years".
fn experience_label(years: i64) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    }
}

#[component]
fn TeacherRow(teacher: Teacher, columns: Vec<Column>, on_select: EventHandler<Teacher>) -> Element {
    let row_teacher = teacher.clone();
    rsx! {
        DataTableRow {
            onclick: move |_| on_select.call(row_teacher.clone()),
            for column in columns {
                DataTableCell { {teacher_cell(&teacher, column)} }
            }
        }
    }
}

fn teacher_cell(teacher: &Teacher, column: Column) -> Element {
    match column {
        Column::Teacher => rsx! {
            PersonCell {
                name: teacher.user.full_name(),
                initials: teacher.user.initials(),
                detail: teacher.user.email.clone(),
            }
        },
        Column::EmployeeId => rsx! { "{teacher.employee_id}" },
        Column::Department => rsx! {
            Badge { variant: BadgeVariant::Secondary, "{teacher.department}" }
        },
        Column::Experience => rsx! { "{experience_label(teacher.experience_years)}" },
        Column::HireDate => rsx! { "{format_date_human(&teacher.hire_date)}" },
        Column::Actions => rsx! {
            Button { variant: ButtonVariant::Ghost, "View" }
        },
        _ => rsx! {},
    }
}

#[component]
fn TeacherDetails(teacher: Teacher, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal {
            open: true,
            title: "Teacher Details",
            on_close: move |_| on_close.call(()),
            DetailList {
                DetailItem { label: "Name", value: teacher.user.full_name() }
                DetailItem { label: "Employee ID", value: teacher.employee_id.clone() }
                DetailItem { label: "Email", value: teacher.user.email.clone() }
                DetailItem { label: "Phone", value: teacher.user.phone_number.clone().unwrap_or_default() }
                DetailItem { label: "Department", value: teacher.department.clone() }
                DetailItem { label: "Experience", value: experience_label(teacher.experience_years) }
                DetailItem { label: "Hire Date", value: format_date_human(&teacher.hire_date) }
                DetailItem { label: "Qualification", value: teacher.qualification.clone().unwrap_or_default() }
                DetailItem { label: "Address", value: teacher.user.address.clone().unwrap_or_default() }
            }
        }
    }
}
