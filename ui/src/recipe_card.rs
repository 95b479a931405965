use api::models::{display_rating, RecipeSummary};
use dioxus::prelude::*;

use crate::navbar::initials;
use crate::rating::Stars;
use crate::PLACEHOLDER_IMAGE;

/// Grid card for a recipe listing. Navigation is delegated to the caller
/// so the card stays independent of the router's route type.
#[component]
pub fn RecipeCard(recipe: RecipeSummary, on_open: EventHandler<i64>) -> Element {
    let image = recipe
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let author = recipe.username.clone().unwrap_or_else(|| "Unknown".into());
    let rating_text = display_rating(recipe.average_rating);
    let id = recipe.id;

    rsx! {
        div {
            class: "recipe-card",
            onclick: move |_| on_open.call(id),
            div {
                class: "recipe-card-media",
                img { src: "{image}", alt: "{recipe.title}", loading: "lazy" }
                span { class: "recipe-card-category", "{recipe.category.label()}" }
            }
            div {
                class: "recipe-card-body",
                h3 { class: "recipe-card-title", "{recipe.title}" }
                p { class: "recipe-card-description", "{recipe.description}" }
                div {
                    class: "recipe-card-author",
                    span { class: "avatar avatar-small", "{initials(&author)}" }
                    span { "{author}" }
                }
                if let Some(text) = rating_text {
                    div {
                        class: "recipe-card-rating",
                        Stars { value: recipe.average_rating.unwrap_or(0.0) }
                        span { class: "rating-value", "{text}" }
                    }
                }
            }
        }
    }
}
