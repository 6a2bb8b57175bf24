//! # Database module: PostgreSQL connection pool management
//!
//! The shared PostgreSQL pool used by every server function in the `api` crate.
//! Gated behind `#[cfg(feature = "server")]` so client (WASM) builds never pull in
//! SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a [`tokio::sync::OnceCell`].
//! The first call to [`get_pool`] reads the database section of the server settings,
//! opens the pool and caches it for all later callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
