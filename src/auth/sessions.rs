/**
 * Session Token Codec
 *
 * This module issues and verifies the signed JWTs that prove a prior
 * successful login. Verification is stateless: a token is admitted if and
 * only if its signature checks out against the configured secret and its
 * expiration instant is still in the future. There is no revocation list and
 * no server-side session store.
 *
 * The signing secret is injected once at construction (see
 * `server::config::ServerConfig`); the codec never reads the process
 * environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Session lifetime: tokens expire 15 minutes after issuance.
pub const SESSION_TTL_SECS: u64 = 15 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// The identity recovered from a verified session token
///
/// Exists only for the lifetime of one request: the authentication gate
/// attaches it to the request extensions and handlers pick it up through the
/// `AuthUser` extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Why a token was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Token could not be parsed, its signature did not verify, or its
    /// subject was not a valid user ID.
    #[error("session token is malformed")]
    Malformed,
    /// Token parsed and verified, but its expiration instant has passed.
    #[error("session token has expired")]
    Expired,
}

/// Issues and verifies session tokens against a fixed signing key
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionCodec {
    /// Create a codec from the shared signing secret
    ///
    /// Rotating the secret invalidates every previously issued token.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed token for a user
    ///
    /// The token embeds the user ID as its subject and expires
    /// `SESSION_TTL_SECS` after issuance.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + SESSION_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and recover the identity it carries
    ///
    /// # Returns
    ///
    /// The embedded identity on success, `VerifyError::Expired` when the
    /// expiration instant has passed, `VerifyError::Malformed` for every
    /// other failure (bad format, wrong signature, unparseable subject).
    /// No side effects.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, VerifyError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => VerifyError::Expired,
                _ => VerifyError::Malformed,
            })?;

        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| VerifyError::Malformed)?;

        Ok(AuthenticatedUser { user_id })
    }
}
