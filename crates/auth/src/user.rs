//! User identity received from the auth boundary.

use serde::{Deserialize, Serialize};

use bankshell_core::UserId;

use crate::Role;

/// Immutable identity value for an authenticated user.
///
/// Produced by the auth boundary on login; the shell never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub avatar: Option<String>,
}

impl UserInfo {
    /// `"{first} {last}"` with surrounding whitespace trimmed, so a user
    /// with only one name part still renders cleanly.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> UserInfo {
        UserInfo {
            id: UserId::new(),
            email: "person@example.com".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: Role::Viewer,
            avatar: None,
        }
    }

    #[test]
    fn display_name_joins_and_trims() {
        assert_eq!(user("Ada", "Lovelace").display_name(), "Ada Lovelace");
        assert_eq!(user("Ada", "").display_name(), "Ada");
        assert_eq!(user("", "").display_name(), "");
    }
}
