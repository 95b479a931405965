//! Client-held session state: who is logged in and with which role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the authenticated user, as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "COOK")]
    Cook,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    /// Wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Cook => "COOK",
            Role::Admin => "ADMIN",
        }
    }

    /// Label shown in menus and chips.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Cook => "Cook",
            Role::Admin => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "COOK" => Ok(Role::Cook),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// The locally persisted record of the authenticated user.
///
/// All four fields exist together or the session is absent entirely
/// (`Option<Session>`); a partial session is not representable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: String, user_id: i64, username: String, role: Role) -> Self {
        Self {
            token,
            user_id,
            username,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_format() {
        for role in [Role::User, Role::Cook, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("ROLE_ADMIN".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn role_serde_uses_wire_tokens() {
        let json = serde_json::to_string(&Role::Cook).unwrap();
        assert_eq!(json, "\"COOK\"");
        let back: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(back, Role::Admin);
    }
}
