//! UserHub - Account Sessions and Gated Uploads
//!
//! UserHub is a small account subsystem: credential-based session issuance
//! (stateless signed tokens carried in an HTTP-only cookie) and a
//! gate-protected profile-picture upload endpoint with type/size validation
//! before storage.
//!
//! # Overview
//!
//! - Login verifies a credential pair against the user store, issues a
//!   signed 15-minute token, and sets it on the session cookie
//! - The authentication gate verifies the cookie per request and threads the
//!   recovered identity to handlers; failures redirect to the login surface
//! - Uploads pass a dual extension+MIME gate and a 5 MiB size gate before a
//!   single byte is persisted
//! - Logout clears the cookie unconditionally
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`auth`** - Session token codec, cookie carrier, user store, and the
//!   account handlers (signup, login, logout, me)
//! - **`middleware`** - The authentication gate and the `AuthUser` extractor
//! - **`upload`** - Upload validation, naming, persistence, and the upload
//!   handler
//! - **`error`** - Error taxonomy and HTTP response conversion
//! - **`routes`** - Router assembly and redirect targets
//! - **`server`** - Configuration, application state, initialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use userhub::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await;
//! // Serve `app` with axum.
//! # Ok(())
//! # }
//! ```

/// Account handling: sessions, cookie, users, handlers
pub mod auth;

/// Error taxonomy and response conversion
pub mod error;

/// HTTP middleware (authentication gate)
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

/// Upload validation and handling
pub mod upload;
