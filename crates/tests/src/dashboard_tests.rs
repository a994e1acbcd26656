use crate::common::*;
use client::{pages, MemoryTokenStore};
use pretty_assertions::assert_eq;
use shared_types::policy;
use std::sync::Arc;

#[tokio::test]
async fn student_dashboard_counters() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    let stats = pages::load_dashboard(&store).await;

    assert_eq!(stats.enrolled_classes, Some(4));
    assert_eq!(stats.pending_assignments, Some(2));
    assert_eq!(stats.average_grade, Some(87.5));
    assert_eq!(stats.attendance_rate, Some(96.0));
    assert_eq!(stats.total_students, None);

    let role = store.role().unwrap_or_default();
    let cards: Vec<(&str, String)> = policy::dashboard_cards(role, &stats)
        .into_iter()
        .map(|card| (card.label, card.value))
        .collect();
    assert_eq!(
        cards,
        vec![
            ("Enrolled Classes", "4".to_string()),
            ("Pending Assignments", "2".to_string()),
            ("Average Grade", "87.5%".to_string()),
            ("Attendance Rate", "96%".to_string()),
        ]
    );
}

#[tokio::test]
async fn signed_out_dashboard_is_empty() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));
    store.restore().await;

    let stats = pages::load_dashboard(&store).await;

    assert_eq!(stats, shared_types::DashboardStats::default());
}
