//! # User records and their table projection
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | One row of the `users` table as the backend returns it. Read-only for the dashboard. |
//! | [`UserPage`] | The result of one page fetch: the rows inside the requested window plus the table's total row count. |
//! | [`UserRow`] | What the table renders: the record plus a 1-based display index and a formatted creation time. |
//!
//! `UserRecord` and `UserPage` are `Serialize + Deserialize` so they can cross the
//! server/client boundary through server functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as stored in the `users` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    pub created_at: DateTime<Utc>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Auth provider that created the account, e.g. "google" or "phone".
    pub provider: Option<String>,
    pub is_disabled: bool,
}

/// One page of users together with the table's total row count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    pub rows: Vec<UserRecord>,
    pub total: u64,
}

/// A user as displayed in the management table.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    /// Position within the current page, starting at 1.
    pub display_index: usize,
    pub uid: String,
    pub created_at: String,
    pub phone_number: String,
    pub email: String,
    pub provider: String,
    pub is_disabled: bool,
}

impl UserRow {
    pub fn from_record(position: usize, record: &UserRecord) -> Self {
        Self {
            display_index: position + 1,
            uid: record.uid.clone(),
            created_at: format_timestamp(&record.created_at),
            phone_number: record.phone_number.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            provider: record.provider.clone().unwrap_or_default(),
            is_disabled: record.is_disabled,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_disabled {
            "Disabled"
        } else {
            "Active"
        }
    }
}

impl UserPage {
    /// Map the fetched records into table rows, numbered by position in the page.
    pub fn to_rows(&self) -> Vec<UserRow> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| UserRow::from_record(i, r))
            .collect()
    }
}

/// `M/D/YYYY, h:mm:ss AM`, always in UTC.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Client route of a user's profile page.
pub fn profile_path(uid: &str) -> String {
    format!("usermanage/profile/{uid}")
}

#[cfg(test)]
pub(crate) fn sample_record(uid: &str) -> UserRecord {
    use chrono::TimeZone;

    UserRecord {
        uid: uid.to_string(),
        created_at: Utc.with_ymd_and_hms(2023, 4, 7, 15, 4, 5).unwrap(),
        phone_number: Some("+15550100".to_string()),
        email: Some(format!("{uid}@example.com")),
        provider: Some("email".to_string()),
        is_disabled: false,
    }
}
