//! # filegate-storage
//!
//! Local filesystem implementation of the [`BlobStore`] trait defined in
//! `filegate-core`, plus MIME type guessing for uploads that arrive
//! without a declared content type.
//!
//! [`BlobStore`]: filegate_core::traits::BlobStore

pub mod local;

pub use local::{LocalBlobStore, mime_from_name};
