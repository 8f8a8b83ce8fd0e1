//! API Error Module
//!
//! This module defines the error taxonomy for the account and upload
//! endpoints and the conversion of those errors into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and status/message accessors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Policy
//!
//! Authentication failures never surface through this module — the gate
//! redirects to the login page instead of producing an error body. Everything
//! else maps to a status code with a short, non-leaking plain-text message;
//! internal detail is logged via `tracing` at the call site and goes no
//! further.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
