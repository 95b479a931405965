//! Admin dashboard: user management.

use api::models::UserAccount;
use dioxus::prelude::*;
use store::{authz, Role, RouteRequirement};
use ui::{confirm, use_api, use_session, ErrorBanner, Guarded};

use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        Guarded {
            requirement: RouteRequirement::Roles(vec![Role::Admin]),
            UserList {}
        }
    }
}

#[component]
fn UserList() -> Element {
    let api = use_api();
    let session = use_session();

    let mut users = use_signal(Vec::<UserAccount>::new);
    let mut error = use_signal(String::new);

    let current = session.current();

    let list_api = api.clone();
    let mut loader = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.list_users().await {
                Ok(list) => users.set(list),
                Err(err) => {
                    tracing::error!("fetching users: {err}");
                    error.set(format!("Could not load users: {}", err.message()));
                }
            }
        }
    });

    let delete_session = session.clone();
    let remove_user = use_callback(move |user_id: i64| {
        // The self-deletion guard runs before any request goes out.
        if !authz::can_delete_user(delete_session.current().as_ref(), user_id) {
            return;
        }
        let username = users()
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default();
        if !confirm(&format!(
            "Delete user \"{username}\" and all of their content?"
        )) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            match api.delete_user(user_id).await {
                Ok(()) => loader.restart(),
                Err(err) => {
                    tracing::error!("deleting user {user_id}: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    });

    rsx! {
        div {
            class: "page admin",
            h1 { "User Management" }
            p { class: "admin-subtitle", "All registered accounts on the platform" }

            ErrorBanner { message: error() }

            table {
                class: "user-table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Email" }
                        th { "Role" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users() {
                        tr {
                            key: "{user.id}",
                            td {
                                Link {
                                    to: Route::AdminUserRecipes { user_id: user.id },
                                    "{user.username}"
                                }
                            }
                            td { {user.email.clone().unwrap_or_default()} }
                            td {
                                span { class: "chip", "{user.role.label()}" }
                            }
                            td {
                                button {
                                    class: "danger",
                                    disabled: !authz::can_delete_user(current.as_ref(), user.id),
                                    onclick: move |_| remove_user.call(user.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if users().is_empty() && error().is_empty() {
                p { class: "empty-state", "No users found." }
            }
        }
    }
}
