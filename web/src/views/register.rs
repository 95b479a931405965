//! Registration view with a role picker (regular user or cook).

use api::models::RegisterRequest;
use dioxus::prelude::*;
use store::Role;
use ui::{use_api, use_session, ErrorBanner};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    if session.current().is_some() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if password() != confirm() {
            error.set("Passwords do not match".to_string());
            return;
        }
        if password().len() < 6 {
            error.set("Password must be at least 6 characters".to_string());
            return;
        }
        let api = api.clone();
        spawn(async move {
            error.set(String::new());
            loading.set(true);
            let request = RegisterRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: role(),
            };
            match api.register(&request).await {
                Ok(()) => {
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    loading.set(false);
                    error.set(err.message().to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "page auth-page",
            div {
                class: "auth-card",
                h1 { "Create Account" }
                p { class: "auth-subtitle", "Join the community and start sharing recipes" }

                ErrorBanner { message: error() }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    input {
                        r#type: "text",
                        placeholder: "Username",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        autocomplete: "new-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirm Password",
                        autocomplete: "new-password",
                        value: confirm(),
                        oninput: move |evt| confirm.set(evt.value()),
                    }

                    div {
                        class: "role-picker",
                        span { class: "filter-label", "I want to:" }
                        label {
                            class: if role() == Role::User { "chip chip-active" } else { "chip" },
                            input {
                                r#type: "radio",
                                name: "role",
                                checked: role() == Role::User,
                                onchange: move |_| role.set(Role::User),
                            }
                            "Browse and rate recipes"
                        }
                        label {
                            class: if role() == Role::Cook { "chip chip-active" } else { "chip" },
                            input {
                                r#type: "radio",
                                name: "role",
                                checked: role() == Role::Cook,
                                onchange: move |_| role.set(Role::Cook),
                            }
                            "Share my own recipes"
                        }
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign In" }
                }
            }
        }
    }
}
