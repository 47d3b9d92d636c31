//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl and response body live in `filegate-core`
//! next to `AppError` (the orphan rule requires the impl there); this
//! module re-exports the body type under the API crate's path.

pub use filegate_core::error::ApiErrorResponse;
