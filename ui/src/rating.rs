use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

const MAX_SCORE: u8 = 5;

/// Read-only star row for an average rating.
#[component]
pub fn Stars(value: f64) -> Element {
    let filled = value.round().clamp(0.0, MAX_SCORE as f64) as u8;
    rsx! {
        span {
            class: "stars",
            for position in 1..=MAX_SCORE {
                span {
                    class: if position <= filled { "star star-filled" } else { "star star-empty" },
                    Icon { icon: FaStar, width: 16, height: 16 }
                }
            }
        }
    }
}

/// Interactive 1-5 star input. Disabled while logged out; the caller is
/// told the chosen score and performs the mutation.
#[component]
pub fn RatingInput(value: u8, disabled: bool, on_rate: EventHandler<u8>) -> Element {
    rsx! {
        span {
            class: if disabled { "rating-input rating-input-disabled" } else { "rating-input" },
            for score in 1..=MAX_SCORE {
                button {
                    class: if score <= value { "rating-star star-filled" } else { "rating-star star-empty" },
                    disabled,
                    "aria-label": "rate {score}",
                    onclick: move |_| on_rate.call(score),
                    Icon { icon: FaStar, width: 20, height: 20 }
                }
            }
        }
    }
}
