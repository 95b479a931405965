use std::sync::{Arc, Mutex};

use crate::session::Session;
use crate::store::SessionStore;

/// In-memory SessionStore for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{evaluate, GuardOutcome, RouteRequirement};
    use crate::session::Role;

    fn cook_session() -> Session {
        Session::new("tok-1".into(), 7, "maria".into(), Role::Cook)
    }

    #[test]
    fn save_then_load_returns_all_fields() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&cook_session());

        let loaded = store.load().expect("session present");
        assert_eq!(loaded.token, "tok-1");
        assert_eq!(loaded.user_id, 7);
        assert_eq!(loaded.username, "maria");
        assert_eq!(loaded.role, Role::Cook);
    }

    #[test]
    fn save_replaces_previous_session_wholesale() {
        let store = MemoryStore::new();
        store.save(&cook_session());
        store.save(&Session::new("tok-2".into(), 9, "admin".into(), Role::Admin));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.user_id, 9);
        assert_eq!(loaded.role, Role::Admin);
    }

    #[test]
    fn logout_clears_every_field_and_guards_redirect_to_login() {
        let store = MemoryStore::new();
        store.save(&cook_session());
        store.clear();

        assert!(store.load().is_none());
        assert_eq!(
            evaluate(store.load().as_ref(), &RouteRequirement::Authenticated),
            GuardOutcome::RedirectLogin,
        );
    }
}
