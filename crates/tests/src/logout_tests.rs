use crate::common::*;
use client::{MemoryTokenStore, SessionStatus, TokenStore};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn logout_clears_session_and_storage() {
    let api = MockApi::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_token(TOKEN));
    let store = api.store(tokens.clone());
    assert!(store.restore().await.is_authenticated());

    store.logout().await;

    assert_eq!(api.logout_calls(), 1);
    assert_eq!(store.token(), None);
    assert_eq!(store.current_user(), None);
    assert_eq!(store.snapshot().status, SessionStatus::Ready);
    assert_eq!(tokens.load().unwrap(), None);
}

#[tokio::test]
async fn logout_clears_local_state_when_server_fails() {
    let api = MockApi::start().await;
    api.fail_logout();
    let tokens = Arc::new(MemoryTokenStore::with_token(TOKEN));
    let store = api.store(tokens.clone());
    assert!(store.restore().await.is_authenticated());

    store.logout().await;

    assert_eq!(api.logout_calls(), 1);
    assert_eq!(store.token(), None);
    assert_eq!(store.current_user(), None);
    assert_eq!(tokens.load().unwrap(), None);
}

#[tokio::test]
async fn logout_without_session_skips_the_server() {
    let api = MockApi::start().await;
    let store = api.store(Arc::new(MemoryTokenStore::new()));
    store.restore().await;

    store.logout().await;

    assert_eq!(api.logout_calls(), 0);
    assert!(!store.snapshot().is_authenticated());
}
