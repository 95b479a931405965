//! Full-screen vertical feed of top rated recipes.

use api::models::RecipeSummary;
use dioxus::prelude::*;
use ui::{scroll_into_view, use_api, ErrorBanner, RecipeReel};

use crate::Route;

#[component]
pub fn ReelsFeed() -> Element {
    let api = use_api();
    let nav = use_navigator();

    let mut reels = use_signal(Vec::<RecipeSummary>::new);
    let mut active = use_signal(|| 0usize);
    let mut error = use_signal(String::new);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            match api.top_rated().await {
                Ok(list) => reels.set(list),
                Err(err) => {
                    tracing::error!("fetching top rated recipes: {err}");
                    error.set(format!("Could not load reels: {}", err.message()));
                }
            }
        }
    });

    let open_recipe = move |id: i64| {
        nav.push(Route::RecipeDetail { id });
    };

    // Arrow keys step one reel at a time; scroll-snap CSS handles touch
    // and wheel input.
    let mut step = move |delta: isize| {
        let count = reels().len();
        if count == 0 {
            return;
        }
        let next = active()
            .saturating_add_signed(delta)
            .min(count - 1);
        active.set(next);
        scroll_into_view(&format!("reel-{next}"));
    };

    let handle_keys = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowDown => {
            evt.prevent_default();
            step(1);
        }
        Key::ArrowUp => {
            evt.prevent_default();
            step(-1);
        }
        _ => {}
    };

    rsx! {
        div {
            class: "reels-page",
            tabindex: 0,
            onkeydown: handle_keys,

            ErrorBanner { message: error() }

            if reels().is_empty() && error().is_empty() {
                div {
                    class: "empty-state",
                    h2 { "No Reels Yet" }
                    p { "Rated recipes will show up here." }
                }
            }

            div {
                class: "reels-track",
                for (index, recipe) in reels().into_iter().enumerate() {
                    div {
                        key: "{recipe.id}",
                        id: "reel-{index}",
                        class: "reel-slot",
                        RecipeReel {
                            recipe: recipe.clone(),
                            on_open: open_recipe,
                        }
                    }
                }
            }
        }
    }
}
