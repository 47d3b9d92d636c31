//! Share link id generation.

use rand::RngExt;

/// Generates unguessable link ids for shareable download URLs.
#[derive(Debug, Clone)]
pub struct LinkGenerator;

impl LinkGenerator {
    /// Creates a new link generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a cryptographically secure random link id.
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes[..]);
        hex::encode(&bytes)
    }
}

impl Default for LinkGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hex encoding local to this module, since nothing else needs it.
mod hex {
    /// Encode bytes to a lowercase hex string.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
