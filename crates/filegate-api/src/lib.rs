//! # filegate-api
//!
//! HTTP API layer for Filegate built on Axum.
//!
//! Provides the REST endpoints, identity extractors, DTOs, CORS layer,
//! and the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
