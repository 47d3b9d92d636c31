//! # filegate-service
//!
//! Business logic service layer for Filegate. Each service orchestrates
//! the file registry, blob store, and authentication primitives to
//! implement application-level use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod file;
pub mod share;
pub mod user;

pub use context::RequestContext;
pub use file::{DownloadService, FileDownload, FileService};
pub use share::{AccessEngine, LinkGenerator};
pub use user::UserService;
