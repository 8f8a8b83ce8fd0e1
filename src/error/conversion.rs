/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors, allowing
 * them to be returned directly from Axum handlers.
 *
 * # Response Format
 *
 * Error responses are plain text: the status code carries the machine-readable
 * part and the body is the short message from `ApiError::message`. Nothing
 * about the internal failure (query errors, hash errors, IO errors) is
 * included; those are logged where they occur.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The response is the mapped status code with the user-facing message
    /// as a plain-text body.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        (status, message).into_response()
    }
}
