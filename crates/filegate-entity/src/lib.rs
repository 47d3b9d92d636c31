//! # filegate-entity
//!
//! Domain entity models for Filegate. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod file;
pub mod user;

pub use file::{CreateFileRecord, FileRecord, Permission};
pub use user::{CreateUser, User};
