//! Account Handlers Module
//!
//! This module contains the HTTP handlers for the account endpoints.
//! Handlers are organized into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Account registration handler
//! ├── login.rs    - Authentication handler
//! ├── logout.rs   - Session-clearing handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /user/signup - Account registration
//! - **`login`** - POST /user/login - Credential check, cookie, redirect
//! - **`logout`** - GET /user/logout - Clear cookie, redirect
//! - **`get_me`** - GET /user/me - Current user info (behind the gate)
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Sessions are stateless signed tokens carried in an HTTP-only cookie
//! - Tokens expire after 15 minutes
//! - Unknown account and wrong password are indistinguishable to callers

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
