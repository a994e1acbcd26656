use crate::common::*;
use client::{AuthOutcome, MemoryTokenStore, Session, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::{Identity, LoginRequest, Role};
use std::sync::Arc;

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn login_bad_credentials_surfaces_server_message() {
    let api = MockApi::start().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let store = api.store(tokens.clone());
    store.restore().await;

    let outcome = store.login(credentials(USERNAME, "wrong")).await;

    match outcome {
        AuthOutcome::Failure { message, .. } => {
            assert_eq!(message, "Unable to log in with provided credentials.")
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(store.token(), None);
    assert_eq!(store.current_user(), None);
    assert_eq!(tokens.load().unwrap(), None);
}

#[tokio::test]
async fn login_good_credentials_stores_token_and_identity() {
    let api = MockApi::start().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let store = api.store(tokens.clone());
    store.restore().await;

    let outcome = store.login(credentials(USERNAME, PASSWORD)).await;

    let user = match outcome {
        AuthOutcome::Success(user) => user,
        other => panic!("expected success, got {:?}", other),
    };
    assert_eq!(user.username, USERNAME);
    assert_eq!(user.role, Role::Student);
    assert_eq!(store.token().as_deref(), Some(TOKEN));
    assert_eq!(store.current_user(), Some(user));
    assert_eq!(tokens.load().unwrap().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn fresh_store_restores_the_same_identity() {
    let api = MockApi::start().await;
    let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::new());

    let first = api.store(tokens.clone());
    first.restore().await;
    let signed_in: Identity = match first.login(credentials(USERNAME, PASSWORD)).await {
        AuthOutcome::Success(user) => user,
        other => panic!("expected success, got {:?}", other),
    };

    let second = api.store(tokens.clone());
    let restored: Session = second.restore().await;

    assert_eq!(restored.user, Some(signed_in));
    assert_eq!(restored.token.as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn failed_login_keeps_existing_session() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));
    let before = store.restore().await;
    assert!(before.is_authenticated());

    let outcome = store.login(credentials("someone", "else")).await;

    assert!(!outcome.is_success());
    assert_eq!(store.snapshot(), before);
}
