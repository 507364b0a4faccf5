//! Plaintext payload of a trusted device cookie.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AuthenticationTimeError, TrustedDeviceError};

/// "This browser completed step-up for `user_id` on the device registered at
/// `notification_address`, at `authentication_time`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieValue {
    user_id: String,
    notification_address: String,
    /// Unix timestamp, seconds.
    authentication_time: i64,
}

/// Decoding shape. `authenticationTime` stays untyped until it has been
/// checked, so type confusion surfaces as `InvalidAuthenticationTime`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCookieValue {
    user_id: String,
    notification_address: String,
    authentication_time: Value,
}

impl CookieValue {
    pub fn new(
        user_id: impl Into<String>,
        notification_address: impl Into<String>,
        authentication_time: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            notification_address: notification_address.into(),
            authentication_time,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn notification_address(&self) -> &str {
        &self.notification_address
    }

    pub fn authentication_time(&self) -> i64 {
        self.authentication_time
    }

    /// True when this value was issued for the given user and device.
    pub fn belongs_to(&self, user_id: &str, notification_address: &str) -> bool {
        self.user_id == user_id && self.notification_address == notification_address
    }

    pub fn to_json(&self) -> Result<String, TrustedDeviceError> {
        serde_json::to_string(self).map_err(|e| TrustedDeviceError::EncryptionFailed(e.to_string()))
    }

    /// Parse the JSON payload. Structural problems are reported as
    /// `DecryptionFailed`; a non-integer timestamp as `InvalidAuthenticationTime`.
    pub fn from_json(json: &[u8]) -> Result<Self, TrustedDeviceError> {
        let raw: RawCookieValue =
            serde_json::from_slice(json).map_err(|_| TrustedDeviceError::DecryptionFailed)?;
        let authentication_time = match raw.authentication_time {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| AuthenticationTimeError::NotAnInteger(n.to_string()))?,
            Value::String(s) => parse_authentication_time(&s)?,
            other => return Err(AuthenticationTimeError::NotAnInteger(other.to_string()).into()),
        };

        Ok(Self {
            user_id: raw.user_id,
            notification_address: raw.notification_address,
            authentication_time,
        })
    }
}

/// Parse a decimal Unix timestamp. Anything but an optionally signed run of
/// ASCII digits is refused.
pub fn parse_authentication_time(raw: &str) -> Result<i64, AuthenticationTimeError> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AuthenticationTimeError::NotAnInteger(raw.to_string()));
    }
    i64::from_str(raw).map_err(|_| AuthenticationTimeError::NotAnInteger(raw.to_string()))
}
