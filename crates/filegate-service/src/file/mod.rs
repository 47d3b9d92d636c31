//! File operations: owner-facing management and link-based downloads.

pub mod download;
pub mod service;

pub use download::{DownloadService, FileDownload};
pub use service::FileService;
