//! Pieces every list page renders the same way.

use crate::auth::use_role;
use dioxus::prelude::*;
use shared_types::policy::{self, Section};
use shared_types::{AssignmentStatus, AttendanceStatus};
use shared_ui::{
    BadgeVariant, Button, ButtonVariant, EmptyState, PageDescription, PageHeader, PageTitle,
    Skeleton,
};

/// Title and description for `section`, worded for the current role.
#[component]
pub fn SectionHeader(section: Section, children: Element) -> Element {
    let role = use_role();
    rsx! {
        PageHeader {
            div {
                PageTitle { "{policy::page_title(role, section)}" }
                PageDescription { "{policy::page_description(role, section)}" }
            }
            {children}
        }
    }
}

#[component]
pub fn ListLoading() -> Element {
    rsx! {
        div { class: "loading",
            Skeleton {}
            Skeleton {}
            Skeleton {}
        }
    }
}

/// How the page narrows its list; decides the empty-state hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    SearchOnly,
    Combined,
}

/// Title and hint for an empty list. `filtered` means some control is set,
/// so the records exist but none match.
pub fn empty_copy(noun: &str, filtered: bool, kind: FilterKind) -> (String, String) {
    let title = format!("No {} found", noun);
    let hint = match (filtered, kind) {
        (true, FilterKind::SearchOnly) => "Try adjusting your search terms.".to_string(),
        (true, FilterKind::Combined) => "Try adjusting your filters.".to_string(),
        (false, _) => format!("No {} available at the moment.", noun),
    };
    (title, hint)
}

#[component]
pub fn ListEmpty(noun: &'static str, filtered: bool, kind: FilterKind) -> Element {
    let (title, description) = empty_copy(noun, filtered, kind);
    rsx! {
        EmptyState { title, description }
    }
}

/// "Clear Filters", shown only while a filter is active.
#[component]
pub fn ClearFilters(active: bool, on_clear: EventHandler<()>) -> Element {
    if !active {
        return rsx! {};
    }
    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_| on_clear.call(()),
            "Clear Filters"
        }
    }
}

/// Avatar initials next to a name, as in the people tables.
#[component]
pub fn PersonCell(name: String, initials: String, #[props(default)] detail: String) -> Element {
    rsx! {
        div { class: "person-cell",
            span { class: "person-avatar", "{initials}" }
            div { class: "person-text",
                span { class: "person-name", "{name}" }
                if !detail.is_empty() {
                    span { class: "person-detail", "{detail}" }
                }
            }
        }
    }
}

pub fn attendance_badge(status: AttendanceStatus) -> BadgeVariant {
    match status {
        AttendanceStatus::Present => BadgeVariant::Success,
        AttendanceStatus::Absent => BadgeVariant::Destructive,
        AttendanceStatus::Late => BadgeVariant::Warning,
        AttendanceStatus::Excused => BadgeVariant::Primary,
        AttendanceStatus::Unknown => BadgeVariant::Outline,
    }
}

pub fn assignment_badge(status: AssignmentStatus) -> BadgeVariant {
    match status {
        AssignmentStatus::Published => BadgeVariant::Success,
        AssignmentStatus::Draft => BadgeVariant::Secondary,
        AssignmentStatus::Closed => BadgeVariant::Destructive,
        AssignmentStatus::Unknown => BadgeVariant::Outline,
    }
}

/// Badge colour for a percentage, by letter band.
pub fn grade_badge(percentage: f64) -> BadgeVariant {
    match shared_types::letter_grade(percentage) {
        'A' => BadgeVariant::Success,
        'B' => BadgeVariant::Primary,
        'C' => BadgeVariant::Warning,
        _ => BadgeVariant::Destructive,
    }
}
