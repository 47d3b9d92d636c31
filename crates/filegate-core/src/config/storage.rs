//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Local blob store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory under which uploaded blobs are kept, created at
    /// startup if missing.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> String {
    "./data/uploads".to_string()
}
