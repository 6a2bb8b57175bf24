//! Postgres-backed [`UserSource`] over the `users` table.
//!
//! Both queries are unfiltered: the page always covers the whole table. Rows are
//! ordered by `(created_at, uid)` so consecutive windows never overlap or skip.

use chrono::{DateTime, Utc};
use dashboard::{DataError, PageWindow, UserRecord, UserSource};
use sqlx::{FromRow, PgPool};

#[derive(Debug, FromRow)]
struct UserRow {
    uid: String,
    created_at: DateTime<Utc>,
    phone_number: Option<String>,
    email: Option<String>,
    provider: Option<String>,
    is_disabled: bool,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            uid: row.uid,
            created_at: row.created_at,
            phone_number: row.phone_number,
            email: row.email,
            provider: row.provider,
            is_disabled: row.is_disabled,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgUserSource {
    pool: PgPool,
}

impl PgUserSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserSource for PgUserSource {
    async fn count(&self) -> Result<u64, DataError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DataError::load_failed(e.to_string()))?;
        u64::try_from(count).map_err(|e| DataError::load_failed(e.to_string()))
    }

    async fn range(&self, window: PageWindow) -> Result<Vec<UserRecord>, DataError> {
        let offset = i64::try_from(window.start).map_err(|e| DataError::load_failed(e.to_string()))?;
        let limit = i64::try_from(window.len()).map_err(|e| DataError::load_failed(e.to_string()))?;

        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT uid, created_at, phone_number, email, provider, is_disabled
             FROM users
             ORDER BY created_at, uid
             OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DataError::load_failed(e.to_string()))?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_to_record() {
        let created_at = Utc::now();
        let record = UserRecord::from(UserRow {
            uid: "u-1".to_string(),
            created_at,
            phone_number: None,
            email: Some("a@example.com".to_string()),
            provider: Some("email".to_string()),
            is_disabled: true,
        });
        assert_eq!(record.uid, "u-1");
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.email.as_deref(), Some("a@example.com"));
        assert!(record.is_disabled);
    }
}
