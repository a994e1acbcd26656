use crate::auth::{use_auth, use_session_store};
use crate::routes::Route;
use client::AuthOutcome;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input,
};
use std::collections::HashMap;

/// Username/password sign-in.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let store = use_session_store();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let store = store.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let credentials = LoginRequest {
                username: username(),
                password: password(),
            };
            match store.login(credentials).await {
                AuthOutcome::Success(_) => {
                    auth.sync(&store);
                    navigator().replace(Route::Dashboard {});
                }
                AuthOutcome::Failure {
                    message,
                    field_errors: fe,
                } => {
                    error_msg.set(Some(message));
                    field_errors.set(fe);
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign in to your account" }
                    CardDescription { "School Management System" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Username",
                            value: username(),
                            placeholder: "Username",
                            required: true,
                            error: field_errors.read().get("username").cloned(),
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            placeholder: "Password",
                            required: true,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Sign up here" }
                    }
                }
            }
        }
    }
}
