use crate::session::Session;

/// Persistent session storage behind one read/write/clear contract.
///
/// `save` writes all four session fields as one unit from the caller's
/// perspective; `load` returns a session only when every field is present.
/// There is no expiry tracking and no refresh.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}
