use crate::common::*;
use client::{pages, MemoryTokenStore};
use pretty_assertions::assert_eq;
use shared_types::filters::{self, CollectionFilter, SearchFilter};
use shared_types::{Assignment, Entity, SchoolClass, Student, Subject};
use std::sync::Arc;

#[tokio::test]
async fn paginated_collection_filters_end_to_end() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    let assignments: Vec<Assignment> =
        pages::load_collection(&store, Entity::Assignments).await;
    assert_eq!(assignments.len(), 2);

    let shown = filters::search(&assignments, "lab");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, 2);
    assert_eq!(shown[0].title, "Lab Report");
}

#[tokio::test]
async fn blank_search_keeps_every_record() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    let assignments: Vec<Assignment> =
        pages::load_collection(&store, Entity::Assignments).await;
    let filter = SearchFilter::<Assignment>::new("   ");

    assert!(!filter.is_active());
    assert_eq!(filter.apply(&assignments), assignments);
}

#[tokio::test]
async fn bare_array_collection_decodes() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    let subjects: Vec<Subject> = pages::load_collection(&store, Entity::Subjects).await;

    let codes: Vec<&str> = subjects.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["MATH101", "CHEM201"]);
    assert_eq!(filters::search(&subjects, "chem").len(), 1);
}

#[tokio::test]
async fn null_columns_keep_every_record() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    let classes: Vec<SchoolClass> = pages::load_collection(&store, Entity::Classes).await;

    let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Grade 10A", "Grade 11B"]);
    assert_eq!(classes[0].teacher_name(), "Ada Lovelace");
    assert_eq!(classes[0].student_count, 0);
    assert_eq!(classes[0].room_number, None);
    assert_eq!(classes[1].subject_name(), "");
    assert_eq!(classes[1].teacher_name(), "");
    assert_eq!(classes[1].max_capacity, 0);
    assert_eq!(filters::search(&classes, "lovelace").len(), 1);
}

#[tokio::test]
async fn server_error_becomes_empty_list() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    store.restore().await;

    let students: Vec<Student> = pages::load_collection(&store, Entity::Students).await;

    assert!(students.is_empty());
}

#[tokio::test]
async fn signed_out_store_fetches_nothing() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));
    store.restore().await;

    let assignments: Vec<Assignment> =
        pages::load_collection(&store, Entity::Assignments).await;

    assert!(assignments.is_empty());
}

#[tokio::test]
async fn api_client_rejects_wrong_token() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));

    let err = store
        .api()
        .collection::<Assignment>(Entity::Assignments, "nope")
        .await
        .unwrap_err();

    assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid token.");
}
