//! Blob store trait for the byte-content side of file records.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for blob storage backends.
///
/// The store owns key generation: `put` assigns every blob a fresh opaque
/// key that is independent of the user-supplied filename, so registry rows
/// never carry user-controlled paths. The trait is defined here in
/// `filegate-core` and implemented in `filegate-storage`.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write a blob and return the generated storage key.
    ///
    /// The original filename is consulted only for its extension; keys are
    /// never derived from its name part and are never reused.
    async fn put(&self, original_filename: &str, data: Bytes) -> AppResult<String>;

    /// Open a blob for reading and return its byte stream.
    ///
    /// Fails with a not-found error if the key has no backing content,
    /// which signals drift between the registry and the store.
    async fn get(&self, key: &str) -> AppResult<ByteStream>;

    /// Return the stored size of a blob in bytes.
    async fn len(&self, key: &str) -> AppResult<u64>;

    /// Remove a blob. Removing a key that is already absent succeeds.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a blob exists for the given key.
    async fn exists(&self, key: &str) -> AppResult<bool>;
}
