use crate::common::*;
use client::{AuthOutcome, MemoryTokenStore, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::{RegisterRequest, Role};
use std::sync::Arc;

fn registration(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.into(),
        email: "new@example.org".into(),
        password: "longenough".into(),
        password_confirm: "longenough".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        role: Role::Teacher,
        phone_number: None,
    }
}

#[tokio::test]
async fn register_signs_the_new_user_in() {
    let api = MockApi::start().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let store = api.store(tokens.clone());
    store.restore().await;

    let outcome = store.register(registration("ada")).await;

    let user = match outcome {
        AuthOutcome::Success(user) => user,
        other => panic!("expected success, got {:?}", other),
    };
    assert_eq!(user.username, "ada");
    assert_eq!(user.role, Role::Teacher);
    assert_eq!(store.role(), Some(Role::Teacher));
    assert_eq!(tokens.load().unwrap().as_deref(), Some("tok-new"));
}

#[tokio::test]
async fn register_reports_server_field_errors() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));
    store.restore().await;

    let outcome = store.register(registration(USERNAME)).await;

    match outcome {
        AuthOutcome::Failure { field_errors, .. } => {
            assert_eq!(
                field_errors.get("username").map(String::as_str),
                Some("A user with that username already exists.")
            );
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(store.current_user(), None);
}

#[tokio::test]
async fn register_mismatched_passwords_is_rejected_locally() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));
    store.restore().await;

    let mut details = registration("ada");
    details.password_confirm = "different1".into();
    let outcome = store.register(details).await;

    match outcome {
        AuthOutcome::Failure { field_errors, .. } => {
            assert!(field_errors.contains_key("password_confirm"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn register_leaves_field_rules_to_the_server() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));
    store.restore().await;

    let details = RegisterRequest {
        username: "al".into(),
        email: String::new(),
        password: "pw1234".into(),
        password_confirm: "pw1234".into(),
        first_name: String::new(),
        last_name: String::new(),
        role: Role::Student,
        phone_number: None,
    };
    let outcome = store.register(details).await;

    assert!(matches!(outcome, AuthOutcome::Success(_)), "got {:?}", outcome);
    assert_eq!(store.token().as_deref(), Some("tok-new"));
}
