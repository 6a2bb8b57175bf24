//! # API crate: fullstack server functions for the Backoffice dashboard
//!
//! Defines every Dioxus server function the web frontend calls, plus the server-side
//! modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Argon2 password hashing and session helpers for admin sign-in |
//! | [`db`] | none | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | [`error::ApiError`], the failures of the server-side helpers |
//! | [`models`] | none | The `Admin` account row and its client-safe projection `AdminInfo` |
//! | [`settings`] | `server` | Layered server settings (`config` crate) |
//! | [`users`] | `server` | Postgres implementation of [`dashboard::UserSource`] |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `login_password`, `logout`, `register`,
//!   `registration_open`
//! - **User management**: `list_users`
//! - **Configuration**: `get_dashboard_config`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;
#[cfg(feature = "server")]
pub mod users;

pub use dashboard::{DashboardConfig, UserPage};
pub use models::AdminInfo;

/// Largest number of rows a single `list_users` call returns.
pub const MAX_PAGE_LEN: u64 = dashboard::MAX_ITEMS_PER_PAGE;

/// Get the signed-in admin from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<AdminInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Admin;

    let Some(admin_id) = auth::current_admin_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let admin: Option<Admin> = sqlx::query_as("SELECT * FROM admins WHERE id = $1")
        .bind(admin_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(admin.map(|a| a.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<AdminInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current admin by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    let admin_id = auth::current_admin_id(&session).await.ok().flatten();

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(id) = admin_id {
        tracing::info!(admin_id = %id, "admin signed out");
    }
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Create an admin account and sign it in. Refused unless `auth.allow_registration` is set.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<AdminInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::error::ApiError;
    use crate::models::Admin;

    let allowed = settings::settings()
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .auth
        .allow_registration;
    if !allowed {
        return Err(ServerFnError::new(ApiError::RegistrationClosed.to_string()));
    }

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new(
            ApiError::Validation("Invalid email address".to_string()).to_string(),
        ));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM admins WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            ApiError::Validation("An account with this email already exists".to_string())
                .to_string(),
        ));
    }

    let admin: Admin = sqlx::query_as(
        "INSERT INTO admins (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(if name.is_empty() { None } else { Some(&name) })
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    auth::sign_in(&session, admin.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(admin_id = %admin.id, "admin registered");
    Ok(admin.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<AdminInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Whether `register` currently accepts new admin accounts.
#[cfg(feature = "server")]
#[get("/api/auth/registration")]
pub async fn registration_open() -> Result<bool, ServerFnError> {
    let settings = settings::settings().map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(settings.auth.allow_registration)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/registration")]
pub async fn registration_open() -> Result<bool, ServerFnError> {
    Ok(false)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<AdminInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::error::ApiError;
    use crate::models::Admin;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let admin: Option<Admin> = sqlx::query_as("SELECT * FROM admins WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(admin) = admin else {
        tracing::warn!(%email, "login for unknown admin");
        return Err(ServerFnError::new(ApiError::InvalidCredentials.to_string()));
    };

    let valid = auth::verify_password(&password, &admin.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        tracing::warn!(%email, "login with wrong password");
        return Err(ServerFnError::new(ApiError::InvalidCredentials.to_string()));
    }

    auth::sign_in(&session, admin.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(admin_id = %admin.id, "admin signed in");
    Ok(admin.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<AdminInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the users inside the inclusive row range `[start, end]` plus the total count.
#[cfg(feature = "server")]
#[post("/api/users/page", session: tower_sessions::Session)]
pub async fn list_users(start: u64, end: u64) -> Result<UserPage, ServerFnError> {
    use crate::db::get_pool;
    use crate::error::ApiError;
    use dashboard::PageWindow;

    auth::require_admin(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if end < start {
        return Err(ServerFnError::new(
            ApiError::Validation("Invalid page range".to_string()).to_string(),
        ));
    }
    let window = PageWindow {
        start,
        end: end.min(start.saturating_add(MAX_PAGE_LEN - 1)),
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let source = users::PgUserSource::new(pool.clone());
    let page = dashboard::fetch_page(&source, window).await.map_err(|e| {
        tracing::error!(start, end, cause = e.detail(), "user page fetch failed");
        ServerFnError::new(e.to_string())
    })?;

    tracing::debug!(start, end = window.end, total = page.total, "fetched user page");
    Ok(page)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/page")]
pub async fn list_users(start: u64, end: u64) -> Result<UserPage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Display settings for the dashboard.
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn get_dashboard_config() -> Result<DashboardConfig, ServerFnError> {
    let settings = settings::settings().map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(settings.dashboard.clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn get_dashboard_config() -> Result<DashboardConfig, ServerFnError> {
    Ok(DashboardConfig::default())
}
