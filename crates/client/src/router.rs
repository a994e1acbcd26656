//! Which view a path resolves to for the current session.
//!
//! The Dioxus route guards call [`decide`]; keeping the decision here keeps
//! it testable without a renderer.

use shared_types::policy::{self, Section};
use shared_types::Role;

use crate::session::{Session, SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPath {
    Root,
    Login,
    Register,
    Section(Section),
    NotFound(String),
}

impl AppPath {
    pub const DASHBOARD: AppPath = AppPath::Section(Section::Dashboard);

    /// Parse a browser path. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => AppPath::Root,
            "/login" => AppPath::Login,
            "/register" => AppPath::Register,
            other => Section::from_path(other)
                .map(AppPath::Section)
                .unwrap_or_else(|| AppPath::NotFound(path.to_string())),
        }
    }

    pub fn as_path(&self) -> String {
        match self {
            AppPath::Root => "/".to_string(),
            AppPath::Login => "/login".to_string(),
            AppPath::Register => "/register".to_string(),
            AppPath::Section(section) => section.path().to_string(),
            AppPath::NotFound(path) => path.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Unauthenticated,
    Authenticated(Role),
}

impl ViewState {
    pub fn from_session(session: &Session) -> Self {
        match (&session.status, &session.user) {
            (SessionStatus::Loading, _) => ViewState::Loading,
            (SessionStatus::Ready, Some(user)) if session.token.is_some() => {
                ViewState::Authenticated(user.role)
            }
            (SessionStatus::Ready, _) => ViewState::Unauthenticated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    ShowLoading,
    Render(AppPath),
    Redirect(AppPath),
}

pub fn decide(state: ViewState, path: AppPath) -> RouteDecision {
    match state {
        ViewState::Loading => RouteDecision::ShowLoading,
        ViewState::Unauthenticated => match path {
            AppPath::Login | AppPath::Register => RouteDecision::Render(path),
            _ => RouteDecision::Redirect(AppPath::Login),
        },
        ViewState::Authenticated(role) => match path {
            AppPath::Root | AppPath::Login | AppPath::Register => {
                RouteDecision::Redirect(AppPath::DASHBOARD)
            }
            AppPath::Section(section) if policy::can_view(role, section) => {
                RouteDecision::Render(path)
            }
            AppPath::Section(_) => RouteDecision::Redirect(AppPath::DASHBOARD),
            AppPath::NotFound(_) => RouteDecision::Render(path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Identity;

    fn section(s: Section) -> AppPath {
        AppPath::Section(s)
    }

    #[test]
    fn parse_known_and_unknown_paths() {
        assert_eq!(AppPath::parse("/"), AppPath::Root);
        assert_eq!(AppPath::parse(""), AppPath::Root);
        assert_eq!(AppPath::parse("/login"), AppPath::Login);
        assert_eq!(AppPath::parse("/register/"), AppPath::Register);
        assert_eq!(AppPath::parse("/grades?subject=2"), section(Section::Grades));
        assert_eq!(
            AppPath::parse("/library"),
            AppPath::NotFound("/library".into())
        );
        assert_eq!(section(Section::Attendance).as_path(), "/attendance");
    }

    #[test]
    fn loading_always_shows_loading() {
        for path in [AppPath::Login, AppPath::Root, section(Section::Grades)] {
            assert_eq!(decide(ViewState::Loading, path), RouteDecision::ShowLoading);
        }
    }

    #[test]
    fn unauthenticated_only_reaches_login_and_register() {
        let state = ViewState::Unauthenticated;
        assert_eq!(decide(state, AppPath::Login), RouteDecision::Render(AppPath::Login));
        assert_eq!(
            decide(state, AppPath::Register),
            RouteDecision::Render(AppPath::Register)
        );
        for path in [
            AppPath::Root,
            section(Section::Dashboard),
            section(Section::Students),
            AppPath::NotFound("/nope".into()),
        ] {
            assert_eq!(decide(state, path), RouteDecision::Redirect(AppPath::Login));
        }
    }

    #[test]
    fn authenticated_skips_auth_pages() {
        let state = ViewState::Authenticated(Role::Student);
        for path in [AppPath::Root, AppPath::Login, AppPath::Register] {
            assert_eq!(decide(state, path), RouteDecision::Redirect(AppPath::DASHBOARD));
        }
    }

    #[test]
    fn guard_follows_policy() {
        let teacher = ViewState::Authenticated(Role::Teacher);
        assert_eq!(
            decide(teacher, section(Section::Grades)),
            RouteDecision::Render(section(Section::Grades))
        );
        assert_eq!(
            decide(teacher, section(Section::Students)),
            RouteDecision::Redirect(AppPath::DASHBOARD)
        );

        let unknown = ViewState::Authenticated(Role::Unknown);
        assert_eq!(
            decide(unknown, section(Section::Classes)),
            RouteDecision::Redirect(AppPath::DASHBOARD)
        );
        assert_eq!(
            decide(unknown, section(Section::Profile)),
            RouteDecision::Render(section(Section::Profile))
        );
    }

    #[test]
    fn authenticated_unknown_path_renders_not_found() {
        let path = AppPath::NotFound("/nope".into());
        assert_eq!(
            decide(ViewState::Authenticated(Role::Admin), path.clone()),
            RouteDecision::Render(path)
        );
    }

    #[test]
    fn view_state_from_session() {
        assert_eq!(ViewState::from_session(&Session::default()), ViewState::Loading);

        let mut session = Session {
            status: SessionStatus::Ready,
            ..Session::default()
        };
        assert_eq!(ViewState::from_session(&session), ViewState::Unauthenticated);

        session.token = Some("abc".into());
        session.user = Some(Identity {
            id: 1,
            role: Role::Teacher,
            ..Identity::default()
        });
        assert_eq!(
            ViewState::from_session(&session),
            ViewState::Authenticated(Role::Teacher)
        );
    }
}
