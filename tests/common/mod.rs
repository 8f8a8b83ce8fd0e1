//! Shared helpers for the integration suite: an in-memory database with
//! migrations applied, a seeded account, and a test server with a cookie jar
//! so login state carries across requests the way a browser would.

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

use userhub::auth::sessions::SessionCodec;
use userhub::auth::users::{create_user, User};
use userhub::routes::create_router;
use userhub::server::config::MIGRATOR;
use userhub::server::state::AppState;

/// Signing secret used by every integration-test codec.
pub const TEST_SECRET: &str = "integration-test-secret";

/// A running test application
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub state: AppState,
    /// Holds the uploads directory alive for the test's duration.
    pub uploads: TempDir,
}

/// Spin up the full router against an in-memory database and a temporary
/// uploads directory.
pub async fn spawn_app() -> TestApp {
    // One connection so every query sees the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    MIGRATOR.run(&pool).await.expect("run migrations");

    let uploads = tempfile::tempdir().expect("create uploads tempdir");

    let state = AppState {
        db_pool: Some(pool.clone()),
        sessions: Arc::new(SessionCodec::new(TEST_SECRET)),
        uploads_dir: Arc::new(uploads.path().to_path_buf()),
    };

    let server = TestServer::builder()
        .save_cookies()
        .build(create_router(state.clone()))
        .expect("build test server");

    TestApp {
        server,
        pool,
        state,
        uploads,
    }
}

/// Insert an account directly into the store.
pub async fn seed_user(pool: &SqlitePool, email: &str, password: &str) -> User {
    // Minimum cost keeps the suite fast; production uses DEFAULT_COST.
    let hash = bcrypt::hash(password, 4).expect("hash password");
    create_user(pool, email.to_string(), hash)
        .await
        .expect("seed user")
}

/// Count the files currently in the uploads directory.
pub fn uploads_on_disk(uploads: &TempDir) -> usize {
    std::fs::read_dir(uploads.path())
        .map(|entries| entries.count())
        .unwrap_or(0)
}
