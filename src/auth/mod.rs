//! Account Module
//!
//! This module handles authentication, session issuance, and account data.
//! It provides the HTTP handlers for the account endpoints and the session
//! token machinery the authentication gate builds on.
//!
//! # Architecture
//!
//! The module is organized into focused submodules:
//!
//! - **`sessions`** - Session token codec (issue and verify signed tokens)
//! - **`cookie`** - The HTTP-only cookie carrying the token between requests
//! - **`users`** - User data model and database operations
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - Session token codec
//! ├── cookie.rs       - Session cookie carrier
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - Account registration handler
//!     ├── login.rs    - Authentication handler
//!     ├── logout.rs   - Session-clearing handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → credentials verified → token issued →
//!    cookie set → redirect to dashboard
//! 2. **Gated request**: cookie → token verified → identity attached →
//!    handler runs
//! 3. **Logout**: cookie cleared (past expiration) → redirect home
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are stateless signed JWTs; verification needs no store
//! - Tokens expire 15 minutes after issuance
//! - Invalid credentials produce one uniform failure (no enumeration)

/// Session token codec
pub mod sessions;

/// Session cookie carrier
pub mod cookie;

/// User data model and database operations
pub mod users;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use cookie::SESSION_COOKIE;
pub use handlers::{get_me, login, logout, signup};
pub use handlers::{LoginRequest, SignupRequest, UserResponse};
pub use sessions::{AuthenticatedUser, SessionCodec, VerifyError};
