use dioxus::prelude::*;

use store::{authz, Role};
use ui::{initials, Navbar, SessionProvider, use_session};
use views::{
    AdminDashboard, AdminUserRecipes, CreateRecipe, EditRecipe, Home, Login, Profile,
    RecipeDetail, Register, ReelsFeed,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/recipe/:id")]
        RecipeDetail { id: i64 },
        #[route("/create-recipe")]
        CreateRecipe {},
        #[route("/edit-recipe/:id")]
        EditRecipe { id: i64 },
        #[route("/reels")]
        ReelsFeed {},
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/users/:user_id")]
        AdminUserRecipes { user_id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Persistent shell around every view: navbar with role-conditional links
/// above the routed content.
#[component]
fn AppShell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let current = session.current();

    let is_admin = matches!(current.as_ref().map(|s| s.role), Some(Role::Admin));
    let can_create = authz::can_create_recipe(current.as_ref());

    rsx! {
        Navbar {
            Link { class: "nav-link", to: Route::Home {}, "Home" }
            Link { class: "nav-link", to: Route::ReelsFeed {}, "Reels" }
            if can_create {
                Link { class: "nav-link", to: Route::CreateRecipe {}, "Create Recipe" }
            }
            if is_admin {
                Link { class: "nav-link", to: Route::AdminDashboard {}, "Admin" }
            }
            if let Some(user) = current {
                Link {
                    class: "nav-link nav-profile",
                    to: Route::Profile {},
                    span { class: "avatar avatar-small", "{initials(&user.username)}" }
                    "{user.username}"
                }
                button {
                    class: "nav-link nav-logout",
                    onclick: move |_| {
                        session.logout();
                        nav.push(Route::Home {});
                    },
                    "Logout"
                }
            } else {
                Link { class: "nav-link", to: Route::Login {}, "Login" }
                Link { class: "nav-link nav-register", to: Route::Register {}, "Register" }
            }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
