//! Route guard wrapper.

use dioxus::prelude::*;
use store::guard::{evaluate, GuardOutcome, RouteRequirement};

use crate::session::use_session;

/// Renders its children only when the guard allows it; otherwise replaces
/// the location with the login view (not authenticated) or the home view
/// (authenticated but wrong role). Evaluated on every render, so a logout
/// while the view is open redirects on the next pass.
#[component]
pub fn Guarded(requirement: RouteRequirement, children: Element) -> Element {
    let session = use_session();
    let current = session.current();

    match evaluate(current.as_ref(), &requirement) {
        GuardOutcome::Render => rsx! {
            {children}
        },
        GuardOutcome::RedirectLogin => {
            crate::redirect("/login");
            rsx! {}
        }
        GuardOutcome::RedirectHome => {
            tracing::warn!("navigation rejected: role not permitted");
            crate::redirect("/");
            rsx! {}
        }
    }
}
