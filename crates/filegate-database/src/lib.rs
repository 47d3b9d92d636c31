//! # filegate-database
//!
//! Embedded SQLite connection management and concrete repository
//! implementations for all Filegate entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
