//! Data models for the application.

mod admin;

#[cfg(feature = "server")]
pub use admin::Admin;
pub use admin::AdminInfo;
