//! # User model for authenticated accounts
//!
//! Two representations of a user:
//!
//! - [`User`] (server only) — the full `users` row, loaded via
//!   [`sqlx::FromRow`]. Carries the Argon2 `password_hash`, which never
//!   leaves the server. [`User::to_info`] projects it for the client.
//! - [`UserInfo`] — the client-safe subset (`id` as `String` so it works
//!   in WASM, plus `email`). This is what the session store holds and
//!   what server functions return.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

impl UserInfo {
    /// Short display name: the mailbox part of the email address.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_mailbox_part() {
        let u = UserInfo {
            id: "u1".into(),
            email: "vendedor@example.com".into(),
        };
        assert_eq!(u.display_name(), "vendedor");
    }
}
