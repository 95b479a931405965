//! Profile view: the viewer's own recipes, comments and ratings.

use api::models::{Comment, RatingEntry, RecipeSummary};
use dioxus::prelude::*;
use store::RouteRequirement;
use ui::{initials, use_api, use_session, ErrorBanner, Guarded, RecipeCard, Stars};

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Recipes,
    Comments,
    Ratings,
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        Guarded {
            requirement: RouteRequirement::Authenticated,
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut tab = use_signal(|| ProfileTab::Recipes);
    let mut recipes = use_signal(Vec::<RecipeSummary>::new);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut ratings = use_signal(Vec::<RatingEntry>::new);
    let mut error = use_signal(String::new);

    let current = session.current();

    // Each tab switch fetches fresh data for the visible tab only.
    let _loader = use_resource(move || {
        let api = api.clone();
        let selected = tab();
        async move {
            error.set(String::new());
            let outcome = match selected {
                ProfileTab::Recipes => match api.my_recipes().await {
                    Ok(list) => {
                        recipes.set(list);
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                ProfileTab::Comments => match api.my_comments().await {
                    Ok(list) => {
                        comments.set(list);
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                ProfileTab::Ratings => match api.my_ratings().await {
                    Ok(list) => {
                        ratings.set(list);
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
            };
            if let Err(err) = outcome {
                tracing::error!("fetching profile data: {err}");
                error.set(format!("Could not load your activity: {}", err.message()));
            }
        }
    });

    let open_recipe = move |id: i64| {
        nav.push(Route::RecipeDetail { id });
    };

    let Some(user) = current else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "page profile",
            header {
                class: "profile-header",
                span { class: "avatar avatar-large", "{initials(&user.username)}" }
                div {
                    h1 { "{user.username}" }
                    span { class: "chip", "{user.role.label()}" }
                }
            }

            div {
                class: "tabs",
                button {
                    class: if tab() == ProfileTab::Recipes { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Recipes),
                    "My Recipes"
                }
                button {
                    class: if tab() == ProfileTab::Comments { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Comments),
                    "My Comments"
                }
                button {
                    class: if tab() == ProfileTab::Ratings { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Ratings),
                    "My Ratings"
                }
            }

            ErrorBanner { message: error() }

            {match tab() {
                ProfileTab::Recipes => rsx! {
                    if recipes().is_empty() {
                        p { class: "empty-state", "You haven't posted any recipes yet." }
                    }
                    div {
                        class: "recipe-grid",
                        for recipe in recipes() {
                            RecipeCard {
                                key: "{recipe.id}",
                                recipe: recipe.clone(),
                                on_open: open_recipe,
                            }
                        }
                    }
                },
                ProfileTab::Comments => rsx! {
                    if comments().is_empty() {
                        p { class: "empty-state", "You haven't commented on anything yet." }
                    }
                    div {
                        class: "activity-list",
                        for comment in comments() {
                            div {
                                key: "{comment.id}",
                                class: "activity-item",
                                p { class: "comment-body", "{comment.content}" }
                                if let Some(recipe) = comment.recipe.as_ref() {
                                    Link {
                                        to: Route::RecipeDetail { id: recipe.id },
                                        {format!("on {}", recipe.title.as_deref().unwrap_or("a recipe"))}
                                    }
                                }
                            }
                        }
                    }
                },
                ProfileTab::Ratings => rsx! {
                    if ratings().is_empty() {
                        p { class: "empty-state", "You haven't rated any recipes yet." }
                    }
                    div {
                        class: "activity-list",
                        for rating in ratings() {
                            div {
                                key: "{rating.id}",
                                class: "activity-item",
                                Stars { value: rating.score as f64 }
                                if let Some(recipe) = rating.recipe.as_ref() {
                                    Link {
                                        to: Route::RecipeDetail { id: recipe.id },
                                        {recipe.title.clone().unwrap_or_else(|| "View recipe".to_string())}
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
