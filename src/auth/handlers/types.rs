/**
 * Account Handler Types
 *
 * This module defines the request and response types used by the account
 * handlers. These types are shared across signup, login, and me handlers.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the email and password for account registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login request
///
/// The transient credential pair: consumed once per login attempt, never
/// persisted.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// User response (without sensitive data)
///
/// Contains account information that is safe to return to clients. Does not
/// include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
}
