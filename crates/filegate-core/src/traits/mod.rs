//! Core traits defined in `filegate-core` and implemented by other crates.

pub mod blob;

pub use blob::{BlobStore, ByteStream};
