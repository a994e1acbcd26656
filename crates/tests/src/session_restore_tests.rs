use crate::common::*;
use client::{MemoryTokenStore, SessionStatus, TokenStore};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn restore_without_token_makes_no_profile_request() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));

    let session = store.restore().await;

    assert_eq!(session.status, SessionStatus::Ready);
    assert!(!session.is_authenticated());
    assert_eq!(api.profile_calls(), 0);
}

#[tokio::test]
async fn restore_with_valid_token_loads_identity() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::with_token(TOKEN)));

    let session = store.restore().await;

    assert!(session.is_authenticated());
    assert_eq!(session.token.as_deref(), Some(TOKEN));
    let user = session.user.unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(user.full_name(), "Jane Doe");
    assert_eq!(user.role, shared_types::Role::Student);
    assert_eq!(api.profile_calls(), 1);
}

#[tokio::test]
async fn restore_with_rejected_token_clears_it() {
    let api = MockApi::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_token("expired"));
    let store = api.store(tokens.clone());

    let session = store.restore().await;

    assert_eq!(session.status, SessionStatus::Ready);
    assert_eq!(session.token, None);
    assert_eq!(session.user, None);
    assert_eq!(tokens.load().unwrap(), None);
    assert_eq!(api.profile_calls(), 1);
}
