//! Account registration and login.

use std::sync::Arc;

use tracing::info;

use filegate_auth::jwt::JwtEncoder;
use filegate_auth::password::{PasswordHasher, PasswordValidator};
use filegate_core::error::AppError;
use filegate_core::result::AppResult;
use filegate_database::repositories::user::UserRepository;
use filegate_entity::user::{CreateUser, User};

/// Handles account creation and credential-based login.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account. Fails with a conflict if the username is
    /// already taken.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(username = %user.username, "Registered new user");
        Ok(user)
    }

    /// Verifies credentials and issues a bearer token. An unknown
    /// username and a wrong password produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid username or password"));
        }

        let token = self.encoder.issue(&user.username)?;
        info!(username = %user.username, "User logged in");
        Ok(token)
    }
}
