use api::models::{display_rating, RecipeSummary};
use dioxus::prelude::*;

use crate::navbar::initials;
use crate::rating::Stars;
use crate::PLACEHOLDER_IMAGE;

/// One full-viewport, scroll-snapped recipe presentation in the reels
/// feed. The background image fills the slot with a gradient overlay
/// keeping the text readable.
#[component]
pub fn RecipeReel(recipe: RecipeSummary, on_open: EventHandler<i64>) -> Element {
    let image = recipe
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let author = recipe.username.clone().unwrap_or_else(|| "Unknown".into());
    let rating_text = display_rating(recipe.average_rating);
    let id = recipe.id;

    rsx! {
        div {
            class: "reel",
            div {
                class: "reel-background",
                style: "background-image: url('{image}');",
            }
            div { class: "reel-overlay" }
            div {
                class: "reel-content",
                div {
                    class: "reel-author",
                    span { class: "avatar", "{initials(&author)}" }
                    span { class: "reel-author-name", "{author}" }
                }
                h2 { class: "reel-title", "{recipe.title}" }
                p { class: "reel-description", "{recipe.description}" }
                div {
                    class: "reel-meta",
                    if let Some(text) = rating_text {
                        span {
                            class: "reel-rating",
                            Stars { value: recipe.average_rating.unwrap_or(0.0) }
                            span { class: "rating-value", "{text}" }
                        }
                    }
                    span { class: "reel-category", "{recipe.category.label()}" }
                }
                button {
                    class: "reel-open",
                    onclick: move |_| on_open.call(id),
                    "View Full Recipe"
                }
            }
        }
    }
}
