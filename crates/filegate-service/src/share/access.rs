//! Access control for link-based downloads and owner-only operations.

use std::sync::Arc;

use filegate_auth::password::PasswordHasher;
use filegate_core::error::AppError;
use filegate_core::result::AppResult;
use filegate_entity::file::{FileRecord, Permission};

/// Evaluates the exposure rules that govern who may download a shared
/// file, and the strict ownership rule that governs everything else.
///
/// Link-based downloads follow the record's permission state. Direct
/// id-based operations (metadata, delete, permission change) are always
/// owner-only, even for public files.
#[derive(Debug, Clone)]
pub struct AccessEngine {
    /// Password hasher for protection secret verification.
    hasher: Arc<PasswordHasher>,
}

impl AccessEngine {
    /// Creates a new access engine.
    pub fn new(hasher: Arc<PasswordHasher>) -> Self {
        Self { hasher }
    }

    /// Decides whether a link-based download may proceed.
    ///
    /// Public records are open to anyone. Private records are open only
    /// to their owner. Protected records are open to anyone presenting
    /// the correct protection password, owner included.
    pub fn authorize_download(
        &self,
        record: &FileRecord,
        identity: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<()> {
        match record.permission {
            Permission::Public => Ok(()),
            Permission::Private => {
                if identity.is_some_and(|name| record.is_owned_by(name)) {
                    Ok(())
                } else {
                    Err(AppError::authorization("This file is private"))
                }
            }
            Permission::Protected => {
                let secret = record
                    .protection_secret
                    .as_deref()
                    .ok_or_else(|| AppError::internal("Protected record has no secret"))?;
                let supplied =
                    password.ok_or_else(|| AppError::authorization("Password required"))?;
                if self.hasher.verify_password(supplied, secret)? {
                    Ok(())
                } else {
                    Err(AppError::authorization("Invalid password"))
                }
            }
        }
    }

    /// Strict ownership check for id-based operations.
    pub fn require_owner(&self, record: &FileRecord, username: &str) -> AppResult<()> {
        if record.is_owned_by(username) {
            Ok(())
        } else {
            Err(AppError::authorization("You do not have access to this file"))
        }
    }

    /// Validates a permission transition and returns the protection
    /// secret hash to store.
    ///
    /// Moving to `protected` requires a non-empty password. Any other
    /// target state clears the stored secret; a password supplied
    /// alongside it is discarded.
    pub fn prepare_transition(
        &self,
        target: Permission,
        password: Option<&str>,
    ) -> AppResult<Option<String>> {
        match target {
            Permission::Protected => {
                let secret = password.filter(|p| !p.is_empty()).ok_or_else(|| {
                    AppError::validation("A password is required for protected files")
                })?;
                Ok(Some(self.hasher.hash_password(secret)?))
            }
            Permission::Public | Permission::Private => Ok(None),
        }
    }
}
