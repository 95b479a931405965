//! Login view.

use dioxus::prelude::*;
use store::Session;
use ui::{use_api, use_session, ErrorBanner};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already logged in: nothing to do here.
    if session.current().is_some() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut session = session.clone();
        spawn(async move {
            error.set(String::new());
            loading.set(true);
            match api.login(username().trim(), &password()).await {
                Ok(resp) => {
                    session.login(Session::new(
                        resp.token,
                        resp.user_id,
                        resp.username,
                        resp.role,
                    ));
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set("Invalid username or password".to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "page auth-page",
            div {
                class: "auth-card",
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to continue to Recipe Platform" }

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
                        r#type: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign Up" }
                }
            }
        }
    }
}
