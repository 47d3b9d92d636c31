//! End-to-end integration tests, driven through the full Axum router
//! over a temporary SQLite database and blob directory.

mod helpers;

mod auth_test;
mod file_test;
