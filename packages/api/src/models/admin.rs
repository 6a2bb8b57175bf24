//! # Admin accounts
//!
//! Two representations of a dashboard operator:
//!
//! - [`Admin`] (server only): the full row of the `admins` table, loaded with
//!   [`sqlx::FromRow`]. Carries the Argon2 `password_hash` and audit timestamps.
//! - [`AdminInfo`]: the client-safe projection sent through server functions. No
//!   hash, no timestamps, and the `Uuid` rendered as a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Admin {
    pub fn to_info(&self) -> AdminInfo {
        AdminInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Admin information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl AdminInfo {
    /// Name if set, otherwise the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut info = AdminInfo {
            id: "1".to_string(),
            email: "ops@example.com".to_string(),
            name: None,
        };
        assert_eq!(info.display_name(), "ops@example.com");
        info.name = Some("Ops".to_string());
        assert_eq!(info.display_name(), "Ops");
    }
}
