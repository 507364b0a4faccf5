//! Trusted device cookies for the Tiqr step-up bridge.
//!
//! A trusted device cookie lets a browser skip repeated step-up challenges
//! for a configured period. This crate provides:
//! - Strict configuration validation (cookie name, lifetime, grace period, key)
//! - The `CookieValue` payload
//! - AES-256-GCM encryption with uniform, fail-closed decryption errors
//! - Expiration checks with an inclusive grace boundary
//!
//! Reading and writing the HTTP cookie itself is left to the caller.

mod configuration;
mod cookie_value;
mod crypto;
mod error;
mod expiration;
mod types;

pub use configuration::{Configuration, SameSitePolicy};
pub use cookie_value::{parse_authentication_time, CookieValue};
pub use crypto::CryptoHelper;
pub use error::{AuthenticationTimeError, TrustedDeviceError};
pub use expiration::ExpirationHelper;
pub use types::{
    AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, CURRENT_VERSION,
    ENCRYPTION_KEY_HEX_LENGTH, MIN_COOKIE_LENGTH, SUPPORTED_VERSIONS,
};
