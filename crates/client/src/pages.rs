//! Data loading for the list pages and the dashboard.
//!
//! Pages never show a fetch error: a failed load is logged and the page
//! renders its empty state.

use serde::de::DeserializeOwned;
use shared_types::policy::{self, DataScope};
use shared_types::{DashboardStats, Entity};
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::session::SessionStore;

/// Fetch one collection, logging and swallowing failures.
pub async fn fetch_collection<T: DeserializeOwned>(
    api: &ApiClient,
    token: &str,
    entity: Entity,
) -> Vec<T> {
    match api.collection::<T>(entity, token).await {
        Ok(items) => {
            debug!(entity = entity.noun(), count = items.len(), "collection loaded");
            items
        }
        Err(e) => {
            warn!(entity = entity.noun(), error = %e, "failed to load collection");
            Vec::new()
        }
    }
}

/// Fetch a collection for the signed-in user. Nothing is requested when
/// there is no session or the role has no data scope.
pub async fn load_collection<T: DeserializeOwned>(
    session: &SessionStore,
    entity: Entity,
) -> Vec<T> {
    let Some(token) = session.token() else {
        return Vec::new();
    };
    let role = session.role().unwrap_or_default();
    if policy::data_scope(role) == DataScope::None {
        debug!(entity = entity.noun(), ?role, "role has no data scope, skipping fetch");
        return Vec::new();
    }
    fetch_collection(session.api(), &token, entity).await
}

/// Dashboard counters; all-empty on failure.
pub async fn load_dashboard(session: &SessionStore) -> DashboardStats {
    let Some(token) = session.token() else {
        return DashboardStats::default();
    };
    if policy::data_scope(session.role().unwrap_or_default()) == DataScope::None {
        return DashboardStats::default();
    }
    session.api().dashboard(&token).await.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load dashboard");
        DashboardStats::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;
    use shared_types::{ApiConfig, Student};
    use std::sync::Arc;

    fn offline_session() -> SessionStore {
        let api = ApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1/api".into(),
            timeout_secs: 2,
        })
        .unwrap();
        SessionStore::new(api, Arc::new(MemoryTokenStore::new()))
    }

    #[tokio::test]
    async fn no_session_loads_nothing() {
        let session = offline_session();
        let students: Vec<Student> = load_collection(&session, Entity::Students).await;
        assert!(students.is_empty());
        assert_eq!(load_dashboard(&session).await, DashboardStats::default());
    }

    #[tokio::test]
    async fn transport_failure_becomes_empty_collection() {
        let session = offline_session();
        let students: Vec<Student> =
            fetch_collection(session.api(), "abc", Entity::Students).await;
        assert!(students.is_empty());
    }
}
