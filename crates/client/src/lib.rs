//! Session, transport and routing logic for the school portal.
//!
//! Nothing in here touches the UI: the `app` crate drives these types from
//! Dioxus components, and the integration tests drive them directly.

pub mod api;
pub mod config;
pub mod error_convert;
pub mod pages;
pub mod router;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use session::{AuthOutcome, Session, SessionStatus, SessionStore};
pub use storage::{MemoryTokenStore, TokenStore};
