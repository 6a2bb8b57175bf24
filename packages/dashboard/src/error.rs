//! Error type for the user data path.

use thiserror::Error;

/// The one failure the dashboard knows about: a backend query did not succeed.
///
/// The display text is what the user sees in the blocking alert; the detail
/// string carries the underlying cause for logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Error loading user data!")]
    LoadFailed(String),
}

impl DataError {
    pub fn load_failed(detail: impl Into<String>) -> Self {
        Self::LoadFailed(detail.into())
    }

    /// Underlying cause, for logging.
    pub fn detail(&self) -> &str {
        match self {
            Self::LoadFailed(detail) => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing_message() {
        let err = DataError::load_failed("connection refused");
        assert_eq!(err.to_string(), "Error loading user data!");
        assert_eq!(err.detail(), "connection refused");
    }
}
