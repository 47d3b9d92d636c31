//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod download;
pub mod file;
pub mod health;
