/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration: the
 * session signing secret, the uploads directory, the listen port, and the
 * optional SQLite database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables once at startup, with
 * sensible defaults for local development where possible. The signing secret
 * has no default: without it every issued token would be forgeable, so a
 * missing `JWT_SECRET` fails startup instead of falling back.
 *
 * # Error Handling
 *
 * Database configuration errors are logged but do not prevent server
 * startup; the pool is set to `None` and login degrades to a service error.
 */

use sqlx::SqlitePool;
use std::path::PathBuf;
use thiserror::Error;

/// Embedded migrations, shared with the test suite.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Default uploads directory when `UPLOADS_DIR` is not set.
const DEFAULT_UPLOADS_DIR: &str = "public/uploads/profile_pics";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `JWT_SECRET` is missing or empty.
    #[error("JWT_SECRET is not set; refusing to start with a forgeable session secret")]
    MissingSessionSecret,
}

/// Process-wide server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret the session codec signs and verifies tokens with.
    /// Rotating it invalidates all previously issued tokens.
    pub session_secret: String,
    /// Directory accepted uploads are written to.
    pub uploads_dir: PathBuf,
    /// TCP port the server listens on.
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET` - required; the session signing secret
    /// - `UPLOADS_DIR` - optional; defaults to `public/uploads/profile_pics`
    /// - `SERVER_PORT` - optional; defaults to 3000
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingSessionSecret` if `JWT_SECRET` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let session_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSessionSecret)?;

        let uploads_dir = std::env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOADS_DIR));

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        Ok(Self {
            session_secret,
            uploads_dir,
            port,
        })
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates an SQLite connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function returns
/// `None` on any error, and login then answers with a generic server error
/// until the database comes back.
pub async fn load_database() -> Option<SqlitePool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Account features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match SqlitePool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Account features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match MIGRATOR.run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_an_error() {
        std::env::remove_var("JWT_SECRET");
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingSessionSecret)));
    }
}
