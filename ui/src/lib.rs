//! Shared UI for the recipe platform client.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_api, use_session, SessionHandle, SessionProvider};

mod guard;
pub use guard::Guarded;

mod navbar;
pub use navbar::{initials, Navbar};

mod banner;
pub use banner::{ErrorBanner, SuccessBanner};

mod rating;
pub use rating::{RatingInput, Stars};

mod recipe_card;
pub use recipe_card::RecipeCard;

mod reel;
pub use reel::RecipeReel;

/// Native browser confirmation dialog; always true off the web platform.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

/// Smooth-scroll the element with the given id into view.
pub fn scroll_into_view(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id));
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
    }
}

/// Redirect by replacing the browser location. Used by the guard and the
/// login flow where a typed route is not in scope.
pub(crate) fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Placeholder art for recipes without an image.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/EEE/31343C?text=Recipe";
