//! Who is signed in.
//!
//! [`SessionStore`] owns the token lifecycle: it restores the persisted
//! token at startup, replaces the session on login/register and clears it on
//! logout. It is cheap to clone and every clone sees the same state.

use parking_lot::RwLock;
use shared_types::{
    AppError, AuthResponse, ClientConfig, Identity, LoginRequest, RegisterRequest, Role,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, LOGIN_FAILED, REGISTRATION_FAILED};
use crate::error_convert::ValidateRequest;
use crate::storage::{self, TokenStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The persisted token has not been checked yet.
    #[default]
    Loading,
    Ready,
}

/// A point-in-time copy of the session.
///
/// `user` is only ever set together with the token it was fetched with, and
/// is cleared whenever the token is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<Identity>,
    pub status: SessionStatus,
}

impl Session {
    fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            status: SessionStatus::Ready,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Result of a login or registration attempt, ready for a form to show.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Success(Identity),
    Failure {
        message: String,
        field_errors: HashMap<String, String>,
    },
}

impl AuthOutcome {
    fn failure(err: AppError, default_message: &str) -> Self {
        AuthOutcome::Failure {
            message: err.friendly_message_or(default_message),
            field_errors: err.field_errors,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }
}

#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    tokens: Arc<dyn TokenStore>,
    state: Arc<RwLock<Session>>,
}

/// Two handles are equal when they share the same session.
impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl SessionStore {
    pub fn new(api: ApiClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            state: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Build the API client and the platform token store from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        let api = ApiClient::new(&config.api)?;
        Ok(Self::new(api, storage::default_store(&config.storage)))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.state.read().user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().role()
    }

    fn replace(&self, session: Session) {
        *self.state.write() = session;
    }

    /// Exchange the persisted token for a profile.
    ///
    /// Never fails: any problem (no token, rejected token, transport or
    /// decode error) ends in a signed-out `Ready` session, and a token that
    /// did not work is removed from storage. Without a stored token no
    /// request is made.
    pub async fn restore(&self) -> Session {
        let stored = self.tokens.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read stored token");
            None
        });

        let Some(token) = stored else {
            debug!("no stored token, starting signed out");
            self.replace(Session::signed_out());
            return self.snapshot();
        };

        match self.api.profile(&token).await {
            Ok(user) => {
                info!(user_id = user.id, role = ?user.role, "session restored");
                self.replace(Session {
                    token: Some(token),
                    user: Some(user),
                    status: SessionStatus::Ready,
                });
            }
            Err(e) => {
                warn!(error = %e, "stored token rejected, signing out");
                self.forget_token();
                self.replace(Session::signed_out());
            }
        }

        self.snapshot()
    }

    /// `POST /auth/login/`. On failure the current session is untouched.
    pub async fn login(&self, credentials: LoginRequest) -> AuthOutcome {
        match self.api.login(&credentials).await {
            Ok(response) => self.establish(response),
            Err(e) => {
                warn!(error = %e, "login failed");
                AuthOutcome::failure(e, LOGIN_FAILED)
            }
        }
    }

    /// `POST /auth/register/`, after local validation. Success signs the
    /// new user in exactly like [`login`](Self::login).
    pub async fn register(&self, details: RegisterRequest) -> AuthOutcome {
        if let Err(e) = details.validate_request() {
            debug!(fields = ?e.field_errors.keys().collect::<Vec<_>>(), "registration rejected locally");
            return AuthOutcome::failure(e, REGISTRATION_FAILED);
        }

        match self.api.register(&details).await {
            Ok(response) => self.establish(response),
            Err(e) => {
                warn!(error = %e, "registration failed");
                AuthOutcome::failure(e, REGISTRATION_FAILED)
            }
        }
    }

    /// Best-effort remote logout, then an unconditional local sign-out.
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            if let Err(e) = self.api.logout(&token).await {
                warn!(error = %e, "remote logout failed, clearing local session anyway");
            }
        }
        self.forget_token();
        self.replace(Session::signed_out());
        info!("signed out");
    }

    /// Persist the new token and swap in the new identity in one write.
    fn establish(&self, response: AuthResponse) -> AuthOutcome {
        let AuthResponse { token, user } = response;

        if let Err(e) = self.tokens.save(&token) {
            warn!(error = %e, "could not persist token, session will not survive a restart");
        }

        info!(user_id = user.id, role = ?user.role, "signed in");
        self.replace(Session {
            token: Some(token),
            user: Some(user.clone()),
            status: SessionStatus::Ready,
        });
        AuthOutcome::Success(user)
    }

    fn forget_token(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "could not clear stored token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;
    use pretty_assertions::assert_eq;
    use shared_types::ApiConfig;

    fn offline_store(tokens: Arc<dyn TokenStore>) -> SessionStore {
        let api = ApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1/api".into(),
            timeout_secs: 2,
        })
        .unwrap();
        SessionStore::new(api, tokens)
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            username: "jdoe".into(),
            email: "jdoe@example.org".into(),
            password: "secret123".into(),
            password_confirm: "secret456".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            role: Role::Student,
            phone_number: None,
        }
    }

    #[test]
    fn new_store_starts_loading_and_signed_out() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        let session = store.snapshot();
        assert_eq!(session.status, SessionStatus::Loading);
        assert!(!session.is_authenticated());
        assert_eq!(store.role(), None);
    }

    #[tokio::test]
    async fn restore_without_token_is_ready_and_signed_out() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        let session = store.restore().await;
        assert_eq!(session, Session::signed_out());
    }

    #[tokio::test]
    async fn restore_with_unreachable_api_clears_token() {
        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let store = offline_store(tokens.clone());
        let session = store.restore().await;
        assert_eq!(session.status, SessionStatus::Ready);
        assert_eq!(session.user, None);
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[tokio::test]
    async fn login_transport_failure_uses_default_message() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        store.restore().await;
        let outcome = store
            .login(LoginRequest {
                username: "jdoe".into(),
                password: "secret".into(),
            })
            .await;
        match outcome {
            AuthOutcome::Failure { message, .. } => assert_eq!(message, "Login failed"),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(store.snapshot(), Session::signed_out());
    }

    #[tokio::test]
    async fn register_checks_password_confirmation_before_sending() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        match store.register(registration()).await {
            AuthOutcome::Failure {
                message,
                field_errors,
            } => {
                assert_eq!(message, "Please correct the highlighted fields");
                assert_eq!(
                    field_errors.get("password_confirm").map(String::as_str),
                    Some("Passwords do not match")
                );
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn logout_while_offline_still_signs_out() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let store = offline_store(tokens.clone());
        store.establish(AuthResponse {
            token: "abc".into(),
            user: Identity {
                id: 1,
                role: Role::Admin,
                ..Identity::default()
            },
        });
        assert!(store.snapshot().is_authenticated());
        assert_eq!(tokens.load().unwrap().as_deref(), Some("abc"));

        store.logout().await;
        assert_eq!(store.snapshot(), Session::signed_out());
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[test]
    fn clones_share_state() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        let other = store.clone();
        store.establish(AuthResponse {
            token: "abc".into(),
            user: Identity {
                id: 7,
                role: Role::Teacher,
                ..Identity::default()
            },
        });
        assert_eq!(other.role(), Some(Role::Teacher));
        assert_eq!(other.token().as_deref(), Some("abc"));
        assert!(store == other);
        assert!(store != offline_store(Arc::new(MemoryTokenStore::new())));
    }
}
