//! # filegate-auth
//!
//! Authentication primitives for Filegate.
//!
//! ## Modules
//!
//! - `jwt` — stateless JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//!
//! Tokens carry only a subject and an expiry; there is no session store,
//! no refresh flow, and no revocation before natural expiry.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
