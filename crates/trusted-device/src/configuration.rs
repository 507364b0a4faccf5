//! Validated trusted device cookie settings.
//!
//! A `Configuration` is built once at startup from server-side settings and
//! never mutated. Every constructor fails fast: a misconfigured trusted device
//! feature must not be allowed to run.

use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, Zeroizing};

use crate::error::TrustedDeviceError;
use crate::types::AES_KEY_LENGTH;

/// RFC 7230 `tchar`, the alphabet of an RFC 6265 cookie name.
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

fn is_cookie_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_tchar)
}

/// SameSite attribute written on the outbound cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

impl SameSitePolicy {
    /// Attribute value as it appears in a `Set-Cookie` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSitePolicy::Strict => "Strict",
            SameSitePolicy::Lax => "Lax",
            SameSitePolicy::None => "None",
        }
    }
}

impl fmt::Display for SameSitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSitePolicy {
    type Err = TrustedDeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(SameSitePolicy::Strict),
            "lax" => Ok(SameSitePolicy::Lax),
            "none" => Ok(SameSitePolicy::None),
            _ => Err(TrustedDeviceError::InvalidSameSitePolicy(s.to_string())),
        }
    }
}

/// Trusted device cookie configuration.
#[derive(Clone)]
pub struct Configuration {
    cookie_name: String,
    lifetime_seconds: i64,
    grace_period_seconds: i64,
    encryption_key: [u8; AES_KEY_LENGTH],
    same_site: SameSitePolicy,
}

impl Configuration {
    /// Create a configuration with no grace period.
    ///
    /// # Arguments
    /// * `cookie_name` - HTTP cookie name, an RFC 6265 token
    /// * `lifetime_seconds` - How long a trusted device grant lasts, must be > 0
    /// * `encryption_key_hex` - 64 hexadecimal characters (32 bytes)
    /// * `same_site` - SameSite attribute for the outbound cookie
    pub fn new(
        cookie_name: impl Into<String>,
        lifetime_seconds: i64,
        encryption_key_hex: &str,
        same_site: SameSitePolicy,
    ) -> Result<Self, TrustedDeviceError> {
        let cookie_name = cookie_name.into();
        if !is_cookie_name(&cookie_name) {
            return Err(TrustedDeviceError::InvalidCookieName(cookie_name));
        }
        if lifetime_seconds <= 0 {
            return Err(TrustedDeviceError::InvalidCookieLifetime(lifetime_seconds));
        }
        let encryption_key = decode_encryption_key(encryption_key_hex)?;

        Ok(Self {
            cookie_name,
            lifetime_seconds,
            grace_period_seconds: 0,
            encryption_key,
            same_site,
        })
    }

    /// Extend the validity window by `grace_period_seconds` to absorb clock
    /// skew between the issuing and the verifying server.
    pub fn with_grace_period(mut self, grace_period_seconds: i64) -> Result<Self, TrustedDeviceError> {
        if grace_period_seconds < 0 {
            return Err(TrustedDeviceError::InvalidGracePeriod(grace_period_seconds));
        }
        self.grace_period_seconds = grace_period_seconds;
        Ok(self)
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_seconds
    }

    pub fn grace_period_seconds(&self) -> i64 {
        self.grace_period_seconds
    }

    pub fn same_site(&self) -> SameSitePolicy {
        self.same_site
    }

    pub(crate) fn encryption_key(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.encryption_key
    }
}

fn decode_encryption_key(hex_key: &str) -> Result<[u8; AES_KEY_LENGTH], TrustedDeviceError> {
    // Never echo key material back in the error.
    let bytes = Zeroizing::new(hex::decode(hex_key).map_err(|e| {
        let problem = match e {
            hex::FromHexError::OddLength => "odd number of hex digits",
            _ => "not valid hexadecimal",
        };
        TrustedDeviceError::InvalidEncryptionKey(problem.to_string())
    })?);

    if bytes.len() != AES_KEY_LENGTH {
        return Err(TrustedDeviceError::InvalidEncryptionKey(format!(
            "got {} hex characters ({} bytes)",
            hex_key.len(),
            bytes.len()
        )));
    }

    let mut key = [0u8; AES_KEY_LENGTH];
    key.copy_from_slice(&bytes);
    Ok(key)
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("cookie_name", &self.cookie_name)
            .field("lifetime_seconds", &self.lifetime_seconds)
            .field("grace_period_seconds", &self.grace_period_seconds)
            .field("encryption_key", &"<redacted>")
            .field("same_site", &self.same_site)
            .finish()
    }
}

impl Drop for Configuration {
    fn drop(&mut self) {
        self.encryption_key.zeroize();
    }
}
