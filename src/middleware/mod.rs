//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. Middleware
//! functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - The authentication gate protecting logged-in-only routes

pub mod auth;

pub use auth::{require_session, AuthUser};
