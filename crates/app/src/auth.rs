use client::router::ViewState;
use client::{Session, SessionStore};
use dioxus::prelude::*;
use shared_types::{Identity, Role};

/// Reactive mirror of the [`SessionStore`].
///
/// The store is the source of truth; every operation that changes it is
/// followed by [`AuthState::sync`] so components re-render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new(initial: Session) -> Self {
        Self {
            session: Signal::new(initial),
        }
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::from_session(&self.session.read())
    }

    pub fn user(&self) -> Option<Identity> {
        self.session.read().user.clone()
    }

    pub fn role(&self) -> Role {
        self.session.read().role().unwrap_or_default()
    }

    pub fn sync(&mut self, store: &SessionStore) {
        self.session.set(store.snapshot());
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}

/// Role of the signed-in user; `Unknown` while signed out.
pub fn use_role() -> Role {
    use_auth().role()
}
