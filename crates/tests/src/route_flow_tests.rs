use crate::common::*;
use client::router::{decide, AppPath, RouteDecision, ViewState};
use client::MemoryTokenStore;
use pretty_assertions::assert_eq;
use shared_types::policy::{self, Column, Section};
use shared_types::Role;
use std::sync::Arc;

#[tokio::test]
async fn startup_moves_from_loading_to_login() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));

    let loading = ViewState::from_session(&store.snapshot());
    assert_eq!(loading, ViewState::Loading);
    assert_eq!(
        decide(loading, AppPath::parse("/grades")),
        RouteDecision::ShowLoading
    );

    let ready = ViewState::from_session(&store.restore().await);
    assert_eq!(ready, ViewState::Unauthenticated);
    assert_eq!(
        decide(ready, AppPath::parse("/grades")),
        RouteDecision::Redirect(AppPath::Login)
    );
    assert_eq!(
        decide(ready, AppPath::parse("/register")),
        RouteDecision::Render(AppPath::Register)
    );
}

#[tokio::test]
async fn restored_student_is_routed_by_role() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    let state = ViewState::from_session(&store.restore().await);

    assert_eq!(state, ViewState::Authenticated(Role::Student));
    assert_eq!(
        decide(state, AppPath::parse("/login")),
        RouteDecision::Redirect(AppPath::DASHBOARD)
    );
    assert_eq!(
        decide(state, AppPath::parse("/students")),
        RouteDecision::Redirect(AppPath::DASHBOARD)
    );
    assert_eq!(
        decide(state, AppPath::parse("/attendance/")),
        RouteDecision::Render(AppPath::Section(Section::Attendance))
    );
}

#[tokio::test]
async fn signing_out_sends_protected_paths_to_login() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    store.logout().await;
    let state = ViewState::from_session(&store.snapshot());

    assert_eq!(
        decide(state, AppPath::parse("/dashboard")),
        RouteDecision::Redirect(AppPath::Login)
    );
}

#[test]
fn teacher_navigation_excludes_admin_sections() {
    let sections: Vec<Section> = policy::navigation(Role::Teacher)
        .iter()
        .map(|item| item.section)
        .collect();

    assert!(!sections.contains(&Section::Students));
    assert!(!sections.contains(&Section::Teachers));
    for expected in [
        Section::Classes,
        Section::Attendance,
        Section::Grades,
        Section::Assignments,
    ] {
        assert!(sections.contains(&expected), "missing {:?}", expected);
    }
}

#[test]
fn student_attendance_columns_exclude_student() {
    let columns = policy::columns(Role::Student, Section::Attendance);

    assert!(!columns.contains(&Column::Student));
    assert!(columns.contains(&Column::Status));
    assert!(policy::columns(Role::Admin, Section::Attendance).contains(&Column::Student));
}

#[test]
fn sidebar_and_guard_agree_for_every_role() {
    for role in [Role::Admin, Role::Teacher, Role::Student, Role::Unknown] {
        let visible: Vec<Section> = policy::navigation(role)
            .iter()
            .map(|item| item.section)
            .collect();
        for section in Section::ALL {
            let rendered = decide(
                ViewState::Authenticated(role),
                AppPath::Section(section),
            ) == RouteDecision::Render(AppPath::Section(section));
            assert_eq!(visible.contains(&section), rendered, "{:?} {:?}", role, section);
        }
    }
}
