/**
 * Profile Picture Upload Handler
 *
 * This module implements the handler for PUT /user/profile-pic. The route
 * sits behind the authentication gate; the validator decides acceptance
 * before any bytes are persisted.
 *
 * # Upload Process
 *
 * 1. Find the `profile_pic` part in the multipart body
 * 2. Check the declared filename/MIME pair before buffering the bytes
 * 3. Buffer the part (the route's body limit caps how much can arrive)
 * 4. Hand everything to the validator, which persists and describes the file
 *
 * A request with no file part at all is answered with a plain 400, distinct
 * from a rejected file.
 */

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::upload::validator::{self, UploadDescriptor};

/// Name of the multipart field carrying the file.
const UPLOAD_FIELD: &str = "profile_pic";

/// Successful upload response body
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Descriptor of the stored file
    pub file: UploadDescriptor,
}

fn map_multipart_error(e: MultipartError) -> ApiError {
    // A body cut off by the route's size limit surfaces here; report it as
    // the same rejection the validator's own size gate produces.
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload aborted: body over size limit");
        ApiError::PayloadTooLarge
    } else {
        tracing::warn!("Upload aborted: unreadable multipart body: {:?}", e);
        ApiError::MalformedUpload
    }
}

/// Profile picture upload handler
///
/// # Errors
///
/// * `400 Bad Request` - no file part in the request, or unreadable body
/// * `413 Payload Too Large` - file over 5 MiB
/// * `415 Unsupported Media Type` - extension/MIME pair outside the allow-set
/// * `500 Internal Server Error` - destination not writable
pub async fn upload_profile_pic(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let Some(original_name) = field.file_name().map(str::to_string) else {
            // A bare form value under the file field name is not a file.
            break;
        };
        let mime_type = field.content_type().unwrap_or_default().to_string();

        // Cheap gates first: reject a mislabeled file before buffering it.
        validator::validate_type(&original_name, &mime_type)?;

        let data = field.bytes().await.map_err(map_multipart_error)?;
        let descriptor =
            validator::store(&state.uploads_dir, &original_name, &mime_type, &data).await?;

        tracing::info!(
            "User {} uploaded profile picture {}",
            identity.user_id,
            descriptor.stored_name
        );

        return Ok(Json(UploadResponse {
            message: "File uploaded successfully!".to_string(),
            file: descriptor,
        }));
    }

    tracing::warn!("Upload request from {} had no file part", identity.user_id);
    Err(ApiError::NoFileAttached)
}
