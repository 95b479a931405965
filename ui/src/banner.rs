use dioxus::prelude::*;

/// Inline error banner. Renders nothing for an empty message so views can
/// bind it straight to their error signal.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "banner banner-error", "{message}" }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "banner banner-success", "{message}" }
    }
}
