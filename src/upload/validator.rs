/**
 * Upload Validator
 *
 * Decides, per incoming file, whether to accept it and where to persist it.
 * Nothing is written to disk until every gate has passed.
 *
 * # Gates
 *
 * - Size: anything over 5 MiB is rejected
 * - Type: the filename extension (case-insensitive) AND the declared MIME
 *   type must both land in the image allow-set. Either alone is
 *   client-supplied and spoofable; requiring both narrows (does not
 *   eliminate) trivial bypass.
 *
 * # Naming
 *
 * Accepted files are stored under a generated name: millisecond timestamp,
 * a short random component, and the original basename. The random component
 * closes the same-millisecond collision window timestamp-only naming has.
 */

use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::ApiError;

/// Maximum accepted file size: 5 MiB.
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Allowed image types, matched against both the filename extension and the
/// declared MIME subtype.
const ALLOWED_IMAGE_TYPES: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Metadata record describing an accepted file after validation
///
/// Created at receipt time, immutable, discarded after the response is sent;
/// the bytes it describes outlive it on disk.
#[derive(Debug, Clone, Serialize)]
pub struct UploadDescriptor {
    /// Filename as the client declared it
    pub original_name: String,
    /// Generated unique filename the bytes were stored under
    pub stored_name: String,
    /// Declared MIME type
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
    /// Full destination path
    pub path: PathBuf,
}

/// Reduce a client-supplied filename to its final component
///
/// Anything directory-like in the name is discarded so a crafted name cannot
/// escape the uploads directory.
fn basename(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
}

fn has_allowed_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ALLOWED_IMAGE_TYPES.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_allowed_mime(mime_type: &str) -> bool {
    mime_type
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .map(|subtype| ALLOWED_IMAGE_TYPES.contains(&subtype))
        .unwrap_or(false)
}

/// Check the dual type gate
///
/// # Errors
///
/// `ApiError::UnsupportedType` if the extension or the declared MIME type
/// falls outside the allow-set.
pub fn validate_type(file_name: &str, mime_type: &str) -> Result<(), ApiError> {
    if !has_allowed_extension(basename(file_name)) || !is_allowed_mime(mime_type) {
        return Err(ApiError::UnsupportedType);
    }
    Ok(())
}

/// Check the size gate
///
/// # Errors
///
/// `ApiError::PayloadTooLarge` if the observed size exceeds `MAX_FILE_BYTES`.
/// Exactly `MAX_FILE_BYTES` is still accepted.
pub fn ensure_within_limit(size: usize) -> Result<(), ApiError> {
    if size > MAX_FILE_BYTES {
        return Err(ApiError::PayloadTooLarge);
    }
    Ok(())
}

/// Generate a collision-resistant stored filename
///
/// `<millis>-<nonce>-<original basename>`.
pub fn unique_filename(original_name: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let nonce = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", stamp, &nonce[..8], basename(original_name))
}

/// Validate and persist one incoming file
///
/// Runs every gate, then writes the bytes under a generated name in
/// `uploads_dir` and returns the descriptor. On rejection nothing is
/// persisted.
///
/// # Errors
///
/// * `ApiError::PayloadTooLarge` / `ApiError::UnsupportedType` - gate failed
/// * `ApiError::ServiceUnavailable` - destination not writable
pub async fn store(
    uploads_dir: &Path,
    original_name: &str,
    mime_type: &str,
    data: &[u8],
) -> Result<UploadDescriptor, ApiError> {
    ensure_within_limit(data.len())?;
    validate_type(original_name, mime_type)?;

    let stored_name = unique_filename(original_name);
    let path = uploads_dir.join(&stored_name);

    tokio::fs::create_dir_all(uploads_dir).await.map_err(|e| {
        tracing::error!("Failed to create uploads directory {:?}: {:?}", uploads_dir, e);
        ApiError::ServiceUnavailable
    })?;
    tokio::fs::write(&path, data).await.map_err(|e| {
        tracing::error!("Failed to write upload {:?}: {:?}", path, e);
        ApiError::ServiceUnavailable
    })?;

    tracing::info!(
        "Stored upload {} ({} bytes) as {}",
        original_name,
        data.len(),
        stored_name
    );

    Ok(UploadDescriptor {
        original_name: basename(original_name).to_string(),
        stored_name,
        mime_type: mime_type.to_string(),
        size: data.len() as u64,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_gate_boundary() {
        assert!(ensure_within_limit(MAX_FILE_BYTES).is_ok());
        assert!(matches!(
            ensure_within_limit(MAX_FILE_BYTES + 1),
            Err(ApiError::PayloadTooLarge)
        ));
    }

    #[test]
    fn test_type_gate_accepts_matching_pairs() {
        assert!(validate_type("photo.png", "image/png").is_ok());
        assert!(validate_type("photo.jpeg", "image/jpeg").is_ok());
        assert!(validate_type("photo.gif", "image/gif").is_ok());
        // Case-insensitive on both sides.
        assert!(validate_type("PHOTO.PNG", "IMAGE/PNG").is_ok());
    }

    #[test]
    fn test_type_gate_needs_both_checks() {
        // Good extension, bad MIME.
        assert!(matches!(
            validate_type("photo.png", "text/plain"),
            Err(ApiError::UnsupportedType)
        ));
        // Good MIME, bad extension.
        assert!(matches!(
            validate_type("photo.txt", "image/png"),
            Err(ApiError::UnsupportedType)
        ));
        // No extension at all.
        assert!(matches!(
            validate_type("photo", "image/png"),
            Err(ApiError::UnsupportedType)
        ));
        // MIME subtype outside the set despite the image/ prefix.
        assert!(matches!(
            validate_type("photo.svg", "image/svg+xml"),
            Err(ApiError::UnsupportedType)
        ));
    }

    #[test]
    fn test_unique_filename_varies() {
        let a = unique_filename("photo.png");
        let b = unique_filename("photo.png");
        assert_ne!(a, b);
        assert!(a.ends_with("photo.png"));
        assert_ne!(a, "photo.png");
    }

    #[test]
    fn test_unique_filename_strips_directories() {
        let name = unique_filename("../../etc/passwd.png");
        assert!(!name.contains('/'));
        assert!(name.ends_with("passwd.png"));
    }

    #[tokio::test]
    async fn test_store_persists_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let data = vec![7u8; 1024];

        let descriptor = store(dir.path(), "avatar.png", "image/png", &data)
            .await
            .unwrap();
        assert_eq!(descriptor.size, 1024);
        assert_eq!(descriptor.original_name, "avatar.png");
        assert_ne!(descriptor.stored_name, descriptor.original_name);

        let written = tokio::fs::read(&descriptor.path).await.unwrap();
        assert_eq!(written, data);
    }

    #[tokio::test]
    async fn test_store_rejects_oversize_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let data = vec![0u8; MAX_FILE_BYTES + 1];

        let result = store(dir.path(), "big.png", "image/png", &data).await;
        assert!(matches!(result, Err(ApiError::PayloadTooLarge)));

        let mut entries = std::fs::read_dir(dir.path()).unwrap();
        assert!(entries.next().is_none());
    }

    #[tokio::test]
    async fn test_store_rejects_bad_type_without_writing() {
        let dir = tempfile::tempdir().unwrap();

        let result = store(dir.path(), "notes.txt", "text/plain", b"hello").await;
        assert!(matches!(result, Err(ApiError::UnsupportedType)));

        let mut entries = std::fs::read_dir(dir.path()).unwrap();
        assert!(entries.next().is_none());
    }
}
