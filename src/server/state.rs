/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The session token codec (signing keys derived once at startup)
 * - The optional SQLite connection pool
 * - The uploads directory path
 *
 * # Thread Safety
 *
 * This core holds no cross-request mutable state: every field is an
 * immutable, cheaply clonable handle (`Arc`, pool handle), so no locking is
 * required anywhere in request processing.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract a single component
 * (e.g. `State<Option<SqlitePool>>`) without taking the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::sessions::SessionCodec;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g. if the
    /// `DATABASE_URL` environment variable is not set). Handlers check for
    /// `None` and answer with a generic server error.
    pub db_pool: Option<SqlitePool>,

    /// Session token codec, constructed once from the configured secret
    pub sessions: Arc<SessionCodec>,

    /// Directory accepted uploads are written to
    pub uploads_dir: Arc<PathBuf>,
}

/// Allow handlers to extract the optional database pool directly
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers and middleware to extract the session codec directly
impl FromRef<AppState> for Arc<SessionCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
