use crate::auth::{use_auth, use_session_store};
use crate::routes::shared::ListLoading;
use crate::routes::Route;
use client::pages;
use dioxus::prelude::*;
use shared_types::policy::{self, StatCard};
use shared_types::{DashboardStats, Role};
use shared_ui::{
    Card, CardContent, CardDescription, CardGrid, CardHeader, CardTitle, PageDescription,
    PageHeader, PageTitle,
};

/// Role-specific counters, plus shortcuts and progress bars for students.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let store = use_session_store();
    let role = auth.role();
    let user = auth.user();

    let stats = use_resource(move || {
        let store = store.clone();
        async move { pages::load_dashboard(&store).await }
    });

    let greeting = user
        .map(|u| format!("Welcome back, {} ({})", u.full_name(), u.role.display_name()))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Dashboard" }
                    PageDescription { "{greeting}" }
                }
            }

            match &*stats.read() {
                Some(stats) => rsx! {
                    StatGrid { cards: policy::dashboard_cards(role, stats) }
                    if role == Role::Student {
                        StudentPanels { stats: stats.clone() }
                    }
                },
                None => rsx! { ListLoading {} },
            }
        }
    }
}

#[component]
fn StatGrid(cards: Vec<StatCard>) -> Element {
    rsx! {
        CardGrid {
            for card in cards {
                Card { key: "{card.label}", class: "stat-card",
                    CardContent {
                        div { class: "stat-label", "{card.label}" }
                        div { class: "stat-value", "{card.value}" }
                    }
                }
            }
        }
    }
}

/// Width for a progress bar, clamped to 0..=100.
fn bar_width(percent: Option<f64>) -> f64 {
    percent.unwrap_or(0.0).clamp(0.0, 100.0)
}

#[component]
fn StudentPanels(stats: DashboardStats) -> Element {
    let average = stats.average_grade.unwrap_or(0.0);
    let attendance = stats.attendance_rate.unwrap_or(0.0);
    let average_width = bar_width(stats.average_grade);
    let attendance_width = bar_width(stats.attendance_rate);

    rsx! {
        div { class: "dashboard-panels",
            Card {
                CardHeader {
                    CardTitle { "Quick Actions" }
                }
                CardContent {
                    div { class: "quick-actions",
                        for (label, section) in policy::quick_actions(Role::Student) {
                            Link {
                                key: "{label}",
                                to: Route::for_section(section),
                                class: "quick-action",
                                "{label}"
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Performance Overview" }
                    CardDescription { "Across all of your classes" }
                }
                CardContent {
                    div { class: "progress-row",
                        div { class: "progress-label",
                            span { "Average Grade" }
                            span { class: "progress-value", "{average:.1}%" }
                        }
                        div { class: "progress-track",
                            div {
                                class: "progress-fill progress-fill-grade",
                                style: "width: {average_width}%",
                            }
                        }
                    }
                    div { class: "progress-row",
                        div { class: "progress-label",
                            span { "Attendance Rate" }
                            span { class: "progress-value", "{attendance}%" }
                        }
                        div { class: "progress-track",
                            div {
                                class: "progress-fill progress-fill-attendance",
                                style: "width: {attendance_width}%",
                            }
                        }
                    }
                }
            }
        }
    }
}
