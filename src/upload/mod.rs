//! Upload Module
//!
//! This module implements the gated file-upload pipeline: a validator that
//! decides acceptance before anything touches disk, and the HTTP handler
//! wiring it to the multipart endpoint.
//!
//! # Architecture
//!
//! - **`validator`** - size/type gates, unique naming, persistence,
//!   `UploadDescriptor`
//! - **`handlers`** - the PUT /user/profile-pic multipart handler
//!
//! # Acceptance Rules
//!
//! A file is accepted only when it is at most 5 MiB AND both its filename
//! extension and its declared MIME type fall in {jpeg, jpg, png, gif}.
//! Rejected files are never persisted. Accepted files are stored under a
//! generated name (timestamp + random component + original basename) in the
//! configured uploads directory.

/// Size/type gating, naming, and persistence
pub mod validator;

/// HTTP handler for the upload endpoint
pub mod handlers;

// Re-export commonly used types
pub use handlers::{upload_profile_pic, UploadResponse};
pub use validator::{UploadDescriptor, MAX_FILE_BYTES};
