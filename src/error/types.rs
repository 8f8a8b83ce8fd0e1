/**
 * API Error Types
 *
 * This module defines the error types returned by the account and upload
 * handlers. Each variant maps to a fixed HTTP status code and a short
 * user-facing message.
 *
 * # Error Categories
 *
 * ## Account errors
 *
 * - `InvalidCredentials` - login failed; deliberately uniform for unknown
 *   accounts and wrong passwords so callers cannot enumerate users
 * - `ServiceUnavailable` - a collaborator (database, hashing, token
 *   issuance) failed; surfaced as a generic server error
 * - `Validation` - signup input rejected
 * - `EmailTaken` - signup email already registered
 * - `AccountNotFound` - authenticated account no longer exists
 *
 * ## Upload errors
 *
 * - `PayloadTooLarge` - file exceeds the 5 MiB cap
 * - `UnsupportedType` - extension or declared MIME type outside the
 *   image allow-set
 * - `NoFileAttached` - request carried no file part at all
 * - `MalformedUpload` - multipart body could not be read
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the account and upload endpoints
///
/// Response bodies are plain text and never include internal detail; the
/// handler that produces the error logs the specifics before returning it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected. Covers both unknown account and wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A collaborator failed (database, hashing, token issuance, storage).
    #[error("service unavailable")]
    ServiceUnavailable,

    /// Signup input failed validation.
    #[error("validation failed: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Signup email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// The authenticated account no longer exists.
    #[error("account not found")]
    AccountNotFound,

    /// Uploaded file exceeds the size cap.
    #[error("file too large")]
    PayloadTooLarge,

    /// Uploaded file's extension or MIME type is not an allowed image type.
    #[error("file type not supported")]
    UnsupportedType,

    /// The upload request carried no file part.
    #[error("no file uploaded")]
    NoFileAttached,

    /// The multipart body could not be parsed.
    #[error("malformed upload request")]
    MalformedUpload,
}

impl ApiError {
    /// Create a validation error from a message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials` - 400 Bad Request
    /// - `ServiceUnavailable` - 500 Internal Server Error
    /// - `Validation` - 400 Bad Request
    /// - `EmailTaken` - 409 Conflict
    /// - `AccountNotFound` - 404 Not Found
    /// - `PayloadTooLarge` - 413 Payload Too Large
    /// - `UnsupportedType` - 415 Unsupported Media Type
    /// - `NoFileAttached` - 400 Bad Request
    /// - `MalformedUpload` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NoFileAttached => StatusCode::BAD_REQUEST,
            Self::MalformedUpload => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the user-facing message for this error
    ///
    /// Messages are short and intentionally free of internal detail.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::ServiceUnavailable => "Server error".to_string(),
            Self::Validation { message } => message.clone(),
            Self::EmailTaken => "Email already registered".to_string(),
            Self::AccountNotFound => "Account not found".to_string(),
            Self::PayloadTooLarge => "File too large".to_string(),
            Self::UnsupportedType => "File type not supported".to_string(),
            Self::NoFileAttached => "No file uploaded.".to_string(),
            Self::MalformedUpload => "Malformed upload request".to_string(),
        }
    }
}
