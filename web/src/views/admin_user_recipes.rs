//! Admin drill-down: one user's recipes, with inline deletion.

use api::models::{RecipeSummary, UserAccount};
use dioxus::prelude::*;
use store::{Role, RouteRequirement};
use ui::{confirm, initials, use_api, ErrorBanner, Guarded, RecipeCard};

use crate::Route;

#[component]
pub fn AdminUserRecipes(user_id: i64) -> Element {
    rsx! {
        Guarded {
            requirement: RouteRequirement::Roles(vec![Role::Admin]),
            UserRecipes { user_id }
        }
    }
}

/// Remove a deleted recipe from the locally held grid, leaving the rest of
/// the list (and unknown ids) untouched.
fn splice_out(list: &mut Vec<RecipeSummary>, recipe_id: i64) {
    list.retain(|r| r.id != recipe_id);
}

#[component]
fn UserRecipes(user_id: i64) -> Element {
    let api = use_api();
    let nav = use_navigator();

    let mut account = use_signal(|| Option::<UserAccount>::None);
    let mut recipes = use_signal(Vec::<RecipeSummary>::new);
    let mut error = use_signal(String::new);

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.user(user_id).await {
                Ok(user) => account.set(Some(user)),
                Err(err) => {
                    tracing::error!("fetching user {user_id}: {err}");
                    error.set(format!("Could not load user: {}", err.message()));
                    return;
                }
            }
            match api.user_recipes(user_id).await {
                Ok(list) => recipes.set(list),
                Err(err) => {
                    tracing::error!("fetching recipes of user {user_id}: {err}");
                    error.set(format!("Could not load recipes: {}", err.message()));
                }
            }
        }
    });

    let open_recipe = move |id: i64| {
        nav.push(Route::RecipeDetail { id });
    };

    // The deleted card is spliced out of the grid locally instead of
    // refetching the whole list.
    let remove_recipe = use_callback(move |recipe_id: i64| {
        if !confirm("Delete this recipe?") {
            return;
        }
        let api = api.clone();
        spawn(async move {
            match api.delete_recipe(recipe_id).await {
                Ok(()) => {
                    recipes.with_mut(|list| splice_out(list, recipe_id));
                }
                Err(err) => {
                    tracing::error!("deleting recipe {recipe_id}: {err}");
                    error.set(err.message().to_string());
                }
            }
        });
    });

    rsx! {
        div {
            class: "page admin",
            Link { class: "back-link", to: Route::AdminDashboard {}, "Back to users" }

            ErrorBanner { message: error() }

            if let Some(user) = account() {
                header {
                    class: "profile-header",
                    span { class: "avatar avatar-large", "{initials(&user.username)}" }
                    div {
                        h1 { "{user.username}" }
                        span { class: "chip", "{user.role.label()}" }
                        if let Some(email) = user.email.as_ref() {
                            p { class: "admin-subtitle", "{email}" }
                        }
                    }
                }
            }

            h2 { "Recipes ({recipes().len()})" }

            if recipes().is_empty() && error().is_empty() {
                p { class: "empty-state", "This user hasn't posted any recipes." }
            }

            div {
                class: "recipe-grid",
                for recipe in recipes() {
                    div {
                        key: "{recipe.id}",
                        class: "admin-recipe-cell",
                        RecipeCard {
                            recipe: recipe.clone(),
                            on_open: open_recipe,
                        }
                        button {
                            class: "danger",
                            onclick: move |_| remove_recipe.call(recipe.id),
                            "Delete Recipe"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::Category;

    fn summary(id: i64) -> RecipeSummary {
        RecipeSummary {
            id,
            title: format!("Recipe {id}"),
            description: String::new(),
            image_url: None,
            category: Category::Vegan,
            username: None,
            average_rating: None,
        }
    }

    #[test]
    fn deleted_recipe_is_absent_from_the_held_list() {
        let mut list = vec![summary(1), summary(2), summary(3)];
        splice_out(&mut list, 2);
        let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn splicing_an_unknown_id_changes_nothing() {
        let mut list = vec![summary(1), summary(2)];
        splice_out(&mut list, 99);
        assert_eq!(list.len(), 2);
    }
}
