//! JWT claims structure.

use serde::{Deserialize, Serialize};

/// Claims payload embedded in every token.
///
/// Deliberately minimal: the subject is the username, which is also the
/// ownership key on file records, so a verified token is all the identity
/// a request needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
