//! Admin authentication: password hashing and session handling.

/// Minimum accepted password length for new admin accounts. Shared with the
/// client so the registration form can check it before submitting.
pub const MIN_PASSWORD_LEN: usize = 8;

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::{current_admin_id, require_admin, sign_in, SESSION_ADMIN_ID_KEY};
