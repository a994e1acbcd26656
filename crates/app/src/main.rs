use client::config::load_config;
use client::SessionStore;
use dioxus::prelude::*;
use tracing::{error, info};

mod auth;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let store = use_hook(|| {
        let config = load_config();
        info!(platform = client_platform(), api = %config.api.base_url, "starting school portal");
        SessionStore::from_config(config).map_err(|e| {
            error!(error = %e, "could not create API client");
            e.message
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        match store {
            Ok(store) => rsx! { Portal { store } },
            Err(message) => rsx! {
                div { class: "startup-error",
                    h1 { "The portal could not start" }
                    p { "{message}" }
                }
            },
        }
    }
}

/// Provides the session to every route and restores it once on mount.
#[component]
fn Portal(store: SessionStore) -> Element {
    let store = use_context_provider(|| store);
    let mut auth = use_context_provider(|| AuthState::new(store.snapshot()));

    // The router shows its loading state until this finishes.
    use_hook(move || {
        spawn(async move {
            let session = store.restore().await;
            auth.session.set(session);
        })
    });

    rsx! {
        Router::<Route> {}
    }
}
