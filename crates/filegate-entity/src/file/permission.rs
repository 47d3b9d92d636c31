//! File exposure state enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exposure states governing who may download a file via its link id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Anyone with the link may download.
    Public,
    /// Only the owner may download.
    Private,
    /// Anyone with the link and the correct password may download.
    Protected,
}

impl Permission {
    /// Return the state as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = filegate_core::AppError;

    /// Parse a client-supplied permission string. Matching is exact; the
    /// accepted values are the lowercase state names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "protected" => Ok(Self::Protected),
            _ => Err(filegate_core::AppError::validation(format!(
                "Invalid permission: '{s}'. Expected one of: public, private, protected"
            ))),
        }
    }
}
