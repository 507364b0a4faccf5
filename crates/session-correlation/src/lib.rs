//! Session correlation ids for log lines.
//!
//! A correlation id is the first eight lowercase hex characters of
//! `SHA-256(session_cookie || salt)`. It links log lines belonging to one
//! session without exposing the session identifier. When there is no
//! session cookie, or the salt is too weak, no id is produced at all.

mod correlation_id;
mod request;
mod service;

pub use correlation_id::CorrelationId;
pub use request::{CookieJar, RequestCookies};
pub use service::SessionCorrelationIdService;

/// Salts shorter than this (in characters) are refused.
pub const MIN_SALT_LENGTH: usize = 16;

/// Number of hex characters kept from the digest.
pub const CORRELATION_ID_LENGTH: usize = 8;
