//! Session keys and lookups.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

/// Key for storing the signed-in admin's ID in the session.
pub const SESSION_ADMIN_ID_KEY: &str = "admin_id";

/// The signed-in admin's ID, if any.
pub async fn current_admin_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let admin_id: Option<String> = session
        .get(SESSION_ADMIN_ID_KEY)
        .await
        .map_err(|e| ApiError::Session(e.to_string()))?;

    match admin_id {
        Some(id) => Uuid::parse_str(&id)
            .map(Some)
            .map_err(|e| ApiError::Session(e.to_string())),
        None => Ok(None),
    }
}

/// Like [`current_admin_id`] but fails when nobody is signed in.
pub async fn require_admin(session: &Session) -> Result<Uuid, ApiError> {
    current_admin_id(session)
        .await?
        .ok_or(ApiError::NotAuthenticated)
}

/// Bind the session to `admin_id`, rotating the session ID first.
pub async fn sign_in(session: &Session, admin_id: Uuid) -> Result<(), ApiError> {
    session
        .cycle_id()
        .await
        .map_err(|e| ApiError::Session(e.to_string()))?;
    session
        .insert(SESSION_ADMIN_ID_KEY, admin_id.to_string())
        .await
        .map_err(|e| ApiError::Session(e.to_string()))
}
