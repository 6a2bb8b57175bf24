//! Server-side failures of the API helpers. Server functions turn these into
//! `ServerFnError` at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Registration is disabled")]
    RegistrationClosed,
    #[error("{0}")]
    Validation(String),
    #[error("Session error: {0}")]
    Session(String),
}
