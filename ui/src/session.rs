//! Session context for the application.
//!
//! One injected service owns all reads and writes of persisted session
//! state; components never touch localStorage directly. The provider also
//! constructs the [`ApiClient`] so every request reads the bearer token
//! from the same store.

use std::sync::Arc;

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::{Session, SessionStore};

fn make_store() -> Arc<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
}

/// Handle to the session service: persistent store plus the reactive copy
/// views subscribe to.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn SessionStore>,
    current: Signal<Option<Session>>,
}

impl SessionHandle {
    /// The session as of the last read/write, or `None` when logged out.
    pub fn current(&self) -> Option<Session> {
        (self.current)()
    }

    /// Persist a fresh session and publish it to subscribers.
    pub fn login(&mut self, session: Session) {
        self.store.save(&session);
        self.current.set(Some(session));
    }

    /// Clear all persisted fields wholesale and publish the logout.
    pub fn logout(&mut self) {
        self.store.clear();
        self.current.set(None);
        tracing::info!("session cleared");
    }
}

/// Get the session service from context.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the shared API client from context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component wrapping the app. Restores any persisted session on
/// mount so a page reload keeps the user logged in.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_hook(make_store);

    let current = use_signal({
        let store = store.clone();
        move || store.load()
    });

    use_context_provider({
        let store = store.clone();
        move || ApiClient::new(ApiConfig::resolve(), store.clone())
    });
    use_context_provider(move || SessionHandle { store, current });

    rsx! {
        {children}
    }
}
