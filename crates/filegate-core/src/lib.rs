//! # filegate-core
//!
//! Core crate for Filegate. Contains the configuration schema, the blob
//! store trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Filegate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
