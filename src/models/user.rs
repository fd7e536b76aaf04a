//! User and role models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Platform roles, mirrored from the `app_role` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "app_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    Moderator,
    User,
    Buyer,
    Seller,
}

/// Account standing of a marketplace user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row for the Users page: a profile joined with its marketplace role
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub status: UserStatus,
    pub role: Option<AppRole>,
    pub created_at: DateTime<Utc>,
}

/// Moderation actions available on a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Verify,
    Reject,
    Block,
    Unblock,
}

impl UserAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Verify => "verify",
            UserAction::Reject => "reject",
            UserAction::Block => "block",
            UserAction::Unblock => "unblock",
        }
    }
}

/// Resolve the target status for a moderation action, if legal from `from`
pub fn user_transition(action: UserAction, from: UserStatus) -> Option<UserStatus> {
    match (action, from) {
        (UserAction::Verify, UserStatus::Pending) => Some(UserStatus::Active),
        (UserAction::Reject, UserStatus::Pending) => Some(UserStatus::Blocked),
        (UserAction::Block, UserStatus::Active) => Some(UserStatus::Blocked),
        (UserAction::Unblock, UserStatus::Blocked) => Some(UserStatus::Active),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_only_from_pending() {
        assert_eq!(
            user_transition(UserAction::Verify, UserStatus::Pending),
            Some(UserStatus::Active)
        );
        assert_eq!(user_transition(UserAction::Verify, UserStatus::Active), None);
        assert_eq!(user_transition(UserAction::Verify, UserStatus::Blocked), None);
    }

    #[test]
    fn block_and_unblock_are_inverse_edges() {
        assert_eq!(
            user_transition(UserAction::Block, UserStatus::Active),
            Some(UserStatus::Blocked)
        );
        assert_eq!(
            user_transition(UserAction::Unblock, UserStatus::Blocked),
            Some(UserStatus::Active)
        );
        assert_eq!(user_transition(UserAction::Block, UserStatus::Blocked), None);
        assert_eq!(user_transition(UserAction::Unblock, UserStatus::Active), None);
    }

    #[test]
    fn reject_sends_pending_to_blocked() {
        assert_eq!(
            user_transition(UserAction::Reject, UserStatus::Pending),
            Some(UserStatus::Blocked)
        );
        assert_eq!(user_transition(UserAction::Reject, UserStatus::Active), None);
    }
}
