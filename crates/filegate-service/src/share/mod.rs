//! Sharing primitives: link id generation and access evaluation.

pub mod access;
pub mod link;

pub use access::AccessEngine;
pub use link::LinkGenerator;
