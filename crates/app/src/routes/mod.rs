pub mod assignments;
pub mod attendance;
pub mod classes;
pub mod dashboard;
pub mod grades;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod shared;
pub mod students;
pub mod subjects;
pub mod teachers;

use crate::auth::{use_auth, use_session_store};
use client::router::{self, AppPath, RouteDecision};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdBookOpen, LdCalendar, LdFileText, LdFolder, LdGraduationCap, LdLayoutDashboard,
    LdLogOut, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::policy::{self, Section};
use shared_ui::{
    LoadingScreen, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger,
};
use tracing::debug;

use assignments::Assignments;
use attendance::Attendance;
use classes::Classes;
use dashboard::Dashboard;
use grades::Grades;
use login::Login;
use not_found::NotFound;
use profile::Profile;
use register::Register;
use students::Students;
use subjects::Subjects;
use teachers::Teachers;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SessionGate)]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/")]
    Home {},
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/students")]
    Students {},
    #[route("/teachers")]
    Teachers {},
    #[route("/classes")]
    Classes {},
    #[route("/subjects")]
    Subjects {},
    #[route("/attendance")]
    Attendance {},
    #[route("/grades")]
    Grades {},
    #[route("/assignments")]
    Assignments {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Dashboard => Route::Dashboard {},
            Section::Profile => Route::Profile {},
            Section::Students => Route::Students {},
            Section::Teachers => Route::Teachers {},
            Section::Classes => Route::Classes {},
            Section::Subjects => Route::Subjects {},
            Section::Attendance => Route::Attendance {},
            Section::Grades => Route::Grades {},
            Section::Assignments => Route::Assignments {},
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Dashboard {} => Some(Section::Dashboard),
            Route::Profile {} => Some(Section::Profile),
            Route::Students {} => Some(Section::Students),
            Route::Teachers {} => Some(Section::Teachers),
            Route::Classes {} => Some(Section::Classes),
            Route::Subjects {} => Some(Section::Subjects),
            Route::Attendance {} => Some(Section::Attendance),
            Route::Grades {} => Some(Section::Grades),
            Route::Assignments {} => Some(Section::Assignments),
            Route::Login {} | Route::Register {} | Route::Home {} | Route::NotFound { .. } => None,
        }
    }

    fn app_path(&self) -> AppPath {
        match self {
            Route::Login {} => AppPath::Login,
            Route::Register {} => AppPath::Register,
            Route::Home {} => AppPath::Root,
            Route::NotFound { route } => AppPath::NotFound(format!("/{}", route.join("/"))),
            other => other
                .section()
                .map(AppPath::Section)
                .unwrap_or(AppPath::Root),
        }
    }

    fn from_app_path(path: &AppPath) -> Self {
        match path {
            AppPath::Root => Route::Home {},
            AppPath::Login => Route::Login {},
            AppPath::Register => Route::Register {},
            AppPath::Section(section) => Route::for_section(*section),
            AppPath::NotFound(path) => Route::NotFound {
                route: path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

/// `/` only ever redirects; the gate sends it to the dashboard or login.
#[component]
fn Home() -> Element {
    rsx! {}
}

/// Session gate: every route goes through [`router::decide`].
///
/// While the stored session is being restored nothing but the loading
/// screen renders, so protected pages never see a half-restored session.
#[component]
fn SessionGate() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    match router::decide(auth.view_state(), route.app_path()) {
        RouteDecision::ShowLoading => rsx! {
            LoadingScreen {}
        },
        RouteDecision::Render(_) => rsx! {
            Outlet::<Route> {}
        },
        RouteDecision::Redirect(target) => {
            debug!(from = ?route, to = ?target, "redirecting");
            navigator().replace(Route::from_app_path(&target));
            rsx! {
                LoadingScreen { message: "Redirecting..." }
            }
        }
    }
}

pub(crate) fn section_icon(section: Section) -> Element {
    match section {
        Section::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Section::Profile => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        Section::Students => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 } },
        Section::Teachers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Section::Classes => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        Section::Subjects => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        Section::Attendance => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        Section::Grades => rsx! { Icon::<LdAward> { icon: LdAward, width: 18, height: 18 } },
        Section::Assignments => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
    }
}

/// Main app layout with the role-filtered sidebar and top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let store = use_session_store();

    let role = auth.role();
    let user = auth.user();
    let display_name = user.as_ref().map(|u| u.full_name()).unwrap_or_default();
    let initials = user.as_ref().map(|u| u.initials()).unwrap_or_default();
    let page_title = route
        .section()
        .map(|section| policy::nav_label(role, section))
        .unwrap_or_default();

    let handle_logout = move |_| {
        let store = store.clone();
        async move {
            store.logout().await;
            auth.sync(&store);
            navigator().replace(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 22, height: 22 }
                        span { class: "sidebar-brand-name", "School Portal" }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for item in policy::navigation(role) {
                            SidebarMenuItem { key: "{item.path}",
                                Link { to: Route::for_section(item.section),
                                    SidebarMenuButton { active: route.section() == Some(item.section),
                                        {section_icon(item.section)}
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        span { class: "sidebar-user-avatar", "{initials}" }
                        div { class: "sidebar-user-details",
                            span { class: "sidebar-user-name", "{display_name}" }
                            span { class: "sidebar-user-role", "{role.display_name()}" }
                        }
                    }
                    button {
                        class: "sidebar-logout",
                        r#type: "button",
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                header { class: "navbar-bar",
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "navbar-title", "{page_title}" }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
