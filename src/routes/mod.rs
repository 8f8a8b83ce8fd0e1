//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server. Routes are
//! organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Public account endpoints (signup, login, logout)
//! - **`upload_routes`** - Gate-protected endpoints (upload, current user)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports, redirect targets
//! ├── router.rs        - Main router creation
//! ├── api_routes.rs    - Public account endpoints
//! └── upload_routes.rs - Gate-protected endpoints
//! ```
//!
//! # Route Map
//!
//! - `POST /user/signup` - Account registration
//! - `POST /user/login` - Credential check, session cookie, redirect
//! - `GET /user/logout` - Clear session cookie, redirect
//! - `PUT /user/profile-pic` - Gated profile picture upload
//! - `GET /user/me` - Gated current-user info
//! - `GET /uploads/*` - Static serving of stored uploads
//!
//! The login and dashboard surfaces themselves are rendered elsewhere; this
//! server only redirects to them.

/// Main router creation
pub mod router;

/// Public account endpoints
pub mod api_routes;

/// Gate-protected endpoints
pub mod upload_routes;

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where a fresh session lands.
pub const DASHBOARD_PATH: &str = "/user/dashboard";

/// Where logout lands.
pub const HOME_PATH: &str = "/";

// Re-export commonly used functions
pub use router::create_router;
