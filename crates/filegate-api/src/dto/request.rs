//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3 to 100 characters"))]
    pub username: String,
    /// Raw password. Length policy is enforced by the server config.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body. Not validated up front; bad credentials of any
/// shape are answered by the login flow itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Permission change request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePermissionRequest {
    /// Target permission state: `public`, `private`, or `protected`.
    pub permission: String,
    /// Protection password, required when moving to `protected`.
    pub password: Option<String>,
}
