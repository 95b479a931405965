//! localStorage-backed session store for the web platform.
//!
//! Persists the session as four flat keys (`token`, `username`, `role`,
//! `userId`) with no namespacing, matching what the rest of the browsing
//! context expects to find. All errors degrade to "no session": an
//! unavailable or corrupted localStorage reads back as logged out rather
//! than crashing the UI.

use crate::session::Session;
use crate::store::SessionStore;

const KEY_TOKEN: &str = "token";
const KEY_USERNAME: &str = "username";
const KEY_ROLE: &str = "role";
const KEY_USER_ID: &str = "userId";

/// Browser localStorage implementation of [`SessionStore`].
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(KEY_TOKEN).ok().flatten()?;
        let username = storage.get_item(KEY_USERNAME).ok().flatten()?;
        let role = storage.get_item(KEY_ROLE).ok().flatten()?.parse().ok()?;
        let user_id = storage
            .get_item(KEY_USER_ID)
            .ok()
            .flatten()?
            .parse()
            .ok()?;
        Some(Session::new(token, user_id, username, role))
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(KEY_TOKEN, &session.token);
        let _ = storage.set_item(KEY_USERNAME, &session.username);
        let _ = storage.set_item(KEY_ROLE, session.role.as_str());
        let _ = storage.set_item(KEY_USER_ID, &session.user_id.to_string());
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(KEY_TOKEN);
        let _ = storage.remove_item(KEY_USERNAME);
        let _ = storage.remove_item(KEY_ROLE);
        let _ = storage.remove_item(KEY_USER_ID);
    }
}
