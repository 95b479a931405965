//! Shared authorization predicates.
//!
//! Both the route guard wrapper and per-page conditional rendering consume
//! these, so the two enforcement points cannot drift apart. The backend
//! remains the actual enforcer; these only decide what the client shows
//! and which requests it is willing to issue.

use crate::session::{Role, Session};

/// Posting recipes is limited to cooks and admins.
pub fn can_create_recipe(session: Option<&Session>) -> bool {
    matches!(
        session.map(|s| s.role),
        Some(Role::Cook) | Some(Role::Admin)
    )
}

/// Edit/delete controls on a recipe: its author, or any admin.
pub fn can_manage_recipe(session: Option<&Session>, author_id: Option<i64>) -> bool {
    let Some(session) = session else {
        return false;
    };
    session.role == Role::Admin || author_id == Some(session.user_id)
}

/// Comment deletion: the comment's author, or any admin.
pub fn can_delete_comment(session: Option<&Session>, comment_author_id: Option<i64>) -> bool {
    let Some(session) = session else {
        return false;
    };
    session.role == Role::Admin || comment_author_id == Some(session.user_id)
}

/// The follow control is shown only when the viewer is logged in, the
/// author is somebody else, and the author is a cook or an admin. The
/// backend rejects follows of regular users; the client does not offer
/// them in the first place.
pub fn can_follow_author(
    session: Option<&Session>,
    author_id: Option<i64>,
    author_role: Option<Role>,
) -> bool {
    let Some(session) = session else {
        return false;
    };
    let Some(author_id) = author_id else {
        return false;
    };
    author_id != session.user_id
        && matches!(author_role, Some(Role::Cook) | Some(Role::Admin))
}

/// Admin user management, with the self-deletion guard: an admin may never
/// delete their own account from the user list. Checked before any network
/// call is issued.
pub fn can_delete_user(session: Option<&Session>, target_id: i64) -> bool {
    match session {
        Some(s) => s.role == Role::Admin && s.user_id != target_id,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user_id: i64, role: Role) -> Session {
        Session::new("tok".into(), user_id, "u".into(), role)
    }

    #[test]
    fn recipe_creation_requires_cook_or_admin() {
        assert!(!can_create_recipe(None));
        assert!(!can_create_recipe(Some(&session(1, Role::User))));
        assert!(can_create_recipe(Some(&session(1, Role::Cook))));
        assert!(can_create_recipe(Some(&session(1, Role::Admin))));
    }

    #[test]
    fn recipe_management_is_author_or_admin() {
        let author = session(5, Role::Cook);
        assert!(can_manage_recipe(Some(&author), Some(5)));
        assert!(!can_manage_recipe(Some(&author), Some(6)));
        assert!(can_manage_recipe(Some(&session(1, Role::Admin)), Some(6)));
        assert!(!can_manage_recipe(None, Some(5)));
        // Unknown author: only admins get the controls.
        assert!(!can_manage_recipe(Some(&author), None));
        assert!(can_manage_recipe(Some(&session(1, Role::Admin)), None));
    }

    #[test]
    fn comment_deletion_is_author_or_admin() {
        assert!(can_delete_comment(Some(&session(3, Role::User)), Some(3)));
        assert!(!can_delete_comment(Some(&session(3, Role::User)), Some(4)));
        assert!(can_delete_comment(Some(&session(1, Role::Admin)), Some(4)));
        assert!(!can_delete_comment(None, Some(3)));
    }

    #[test]
    fn follow_is_offered_for_other_cooks_and_admins() {
        let viewer = session(2, Role::User);
        assert!(can_follow_author(Some(&viewer), Some(9), Some(Role::Cook)));
        assert!(can_follow_author(Some(&viewer), Some(9), Some(Role::Admin)));
        // Never for yourself.
        assert!(!can_follow_author(Some(&viewer), Some(2), Some(Role::Cook)));
        // Never for regular-user authors or unknown roles.
        assert!(!can_follow_author(Some(&viewer), Some(9), Some(Role::User)));
        assert!(!can_follow_author(Some(&viewer), Some(9), None));
        assert!(!can_follow_author(None, Some(9), Some(Role::Cook)));
    }

    #[test]
    fn admin_cannot_delete_own_account() {
        let admin = session(1, Role::Admin);
        assert!(can_delete_user(Some(&admin), 2));
        assert!(!can_delete_user(Some(&admin), 1));
        assert!(!can_delete_user(Some(&session(1, Role::User)), 2));
        assert!(!can_delete_user(None, 2));
    }
}
