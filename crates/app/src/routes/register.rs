use crate::auth::{use_auth, use_session_store};
use crate::routes::Route;
use client::AuthOutcome;
use dioxus::prelude::*;
use shared_types::{RegisterRequest, Role, KNOWN_ROLES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormSelect, Input, SelectOption,
};
use std::collections::HashMap;

/// Account creation. Success signs the new user straight in.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let store = use_session_store();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let store = store.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let phone_number = Some(phone().trim().to_string()).filter(|p| !p.is_empty());
            let details = RegisterRequest {
                username: username(),
                email: email(),
                password: password(),
                password_confirm: password_confirm(),
                first_name: first_name(),
                last_name: last_name(),
                role: role(),
                phone_number,
            };

            match store.register(details).await {
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

    let field_error = move |name: &str| field_errors.read().get(name).cloned();
    let role_options: Vec<SelectOption> = KNOWN_ROLES
        .iter()
        .map(|r| SelectOption::new(r.code(), r.display_name()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card auth-card-wide",

                CardHeader {
                    CardTitle { "Create your account" }
                    CardDescription { "School Management System" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_register,
                        div { class: "auth-form-row",
                            Input {
                                label: "First Name",
                                value: first_name(),
                                required: true,
                                error: field_error("first_name"),
                                on_input: move |evt: FormEvent| first_name.set(evt.value()),
                            }
                            Input {
                                label: "Last Name",
                                value: last_name(),
                                required: true,
                                error: field_error("last_name"),
                                on_input: move |evt: FormEvent| last_name.set(evt.value()),
                            }
                        }
                        Input {
                            label: "Username",
                            value: username(),
                            required: true,
                            error: field_error("username"),
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            required: true,
                            error: field_error("email"),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FormSelect {
                            label: "Role",
                            value: role().code().to_string(),
                            options: role_options,
                            onchange: move |evt: FormEvent| role.set(Role::from_str_or_default(&evt.value())),
                        }
                        if let Some(message) = field_error("role") {
                            p { class: "input-error", "{message}" }
                        }
                        Input {
                            label: "Phone Number (optional)",
                            input_type: "tel",
                            value: phone(),
                            error: field_error("phone_number"),
                            on_input: move |evt: FormEvent| phone.set(evt.value()),
                        }
                        div { class: "auth-form-row",
                            Input {
                                label: "Password",
                                input_type: "password",
                                value: password(),
                                required: true,
                                error: field_error("password"),
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }
                            Input {
                                label: "Confirm Password",
                                input_type: "password",
                                value: password_confirm(),
                                required: true,
                                error: field_error("password_confirm"),
                                on_input: move |evt: FormEvent| password_confirm.set(evt.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            class: "auth-submit",
                            if loading() { "Creating account..." } else { "Create account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in here" }
                    }
                }
            }
        }
    }
}
