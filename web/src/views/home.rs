//! Home view: Discover/Following tabs, keyword search, category filter.

use api::models::{Category, RecipeSummary};
use dioxus::prelude::*;
use ui::{use_api, use_session, ErrorBanner, RecipeCard};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut recipes = use_signal(Vec::<RecipeSummary>::new);
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| Option::<Category>::None);
    let mut following_tab = use_signal(|| false);
    let mut error = use_signal(String::new);

    let logged_in = session.current().is_some();

    // One listing endpoint per (tab, search, category) combination; any
    // change restarts the fetch and the previous future is dropped.
    let _loader = use_resource(move || {
        let api = api.clone();
        let keyword = search().trim().to_string();
        let selected = category();
        let following = following_tab();
        async move {
            error.set(String::new());
            let result = if following {
                api.feed().await
            } else if !keyword.is_empty() {
                api.search_recipes(&keyword).await
            } else if let Some(selected) = selected {
                api.recipes_by_category(selected).await
            } else {
                api.list_recipes().await
            };
            match result {
                Ok(list) => recipes.set(list),
                Err(err) => {
                    tracing::error!("fetching recipes: {err}");
                    error.set(format!("Could not fetch recipes: {}", err.message()));
                }
            }
        }
    });

    let open_recipe = move |id: i64| {
        nav.push(Route::RecipeDetail { id });
    };

    // Search and category only apply to Discover, so switching tabs
    // clears them.
    let mut select_tab = move |following: bool| {
        following_tab.set(following);
        search.set(String::new());
        category.set(None);
    };

    rsx! {
        div {
            class: "page home",
            header {
                class: "home-hero",
                h1 { "Discover Delicious Recipes" }
                p { "Explore recipes from talented home cooks" }
            }

            div {
                class: "home-controls",
                if logged_in {
                    div {
                        class: "tabs",
                        button {
                            class: if !following_tab() { "tab tab-active" } else { "tab" },
                            onclick: move |_| select_tab(false),
                            "Discover"
                        }
                        button {
                            class: if following_tab() { "tab tab-active" } else { "tab" },
                            onclick: move |_| select_tab(true),
                            "Following"
                        }
                    }
                }

                if !following_tab() {
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search for recipes, ingredients, or cuisines...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                    div {
                        class: "category-filter",
                        span { class: "filter-label", "Filter by:" }
                        button {
                            class: if category().is_none() { "chip chip-active" } else { "chip" },
                            onclick: move |_| category.set(None),
                            "All Recipes"
                        }
                        for option in Category::ALL {
                            button {
                                class: if category() == Some(option) { "chip chip-active" } else { "chip" },
                                onclick: move |_| category.set(Some(option)),
                                "{option.label()}"
                            }
                        }
                    }
                }
            }

            ErrorBanner { message: error() }

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

            if recipes().is_empty() && error().is_empty() {
                div {
                    class: "empty-state",
                    h2 {
                        if following_tab() { "No Recipes in Your Feed" } else { "No Recipes Found" }
                    }
                    p {
                        if following_tab() {
                            "You're not following any cooks yet, or they haven't posted recipes."
                        } else {
                            "Try adjusting your search or filter criteria."
                        }
                    }
                }
            }
        }
    }
}
