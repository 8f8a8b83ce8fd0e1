/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * state creation, database loading, uploads directory preparation, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Build the session codec from the configured signing secret
 * 2. Load the optional database pool
 * 3. Ensure the uploads directory exists
 * 4. Create and configure the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database or an uncreatable uploads
 * directory is logged and the server starts anyway, with the affected
 * endpoints degrading to service errors.
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::sessions::SessionCodec;
use crate::routes::router::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Server configuration loaded at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing userhub server");

    // The codec gets the secret exactly once; nothing else reads it.
    let sessions = Arc::new(SessionCodec::new(&config.session_secret));

    let db_pool = load_database().await;

    if let Err(e) = tokio::fs::create_dir_all(&config.uploads_dir).await {
        tracing::error!(
            "Failed to create uploads directory {:?}: {:?}",
            config.uploads_dir,
            e
        );
        tracing::warn!("Uploads will fail until the directory is writable");
    }

    let app_state = AppState {
        db_pool,
        sessions,
        uploads_dir: Arc::new(config.uploads_dir),
    };

    tracing::info!("Router configured");
    create_router(app_state)
}
