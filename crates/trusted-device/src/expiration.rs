//! Lifetime and grace-period checks for decrypted cookie values.

use crate::configuration::Configuration;
use crate::cookie_value::CookieValue;
use crate::error::{AuthenticationTimeError, TrustedDeviceError};

/// Decides whether a trusted device grant is still valid.
///
/// `now` is always passed in; nothing here reads the clock.
#[derive(Debug, Clone, Copy)]
pub struct ExpirationHelper {
    lifetime_seconds: i64,
    grace_period_seconds: i64,
}

impl ExpirationHelper {
    pub fn new(config: &Configuration) -> Self {
        Self {
            lifetime_seconds: config.lifetime_seconds(),
            grace_period_seconds: config.grace_period_seconds(),
        }
    }

    /// Last second at which the grant is still honoured.
    pub fn expiration_time(&self, value: &CookieValue, now: i64) -> Result<i64, TrustedDeviceError> {
        let authentication_time = value.authentication_time();
        if authentication_time < 0 {
            return Err(AuthenticationTimeError::BeforeEpoch(authentication_time).into());
        }
        if authentication_time > now {
            return Err(AuthenticationTimeError::InTheFuture {
                time: authentication_time,
                now,
            }
            .into());
        }

        Ok(authentication_time
            .saturating_add(self.lifetime_seconds)
            .saturating_add(self.grace_period_seconds))
    }

    /// `now == expiration_time` is still valid; one second later is not.
    pub fn is_expired(&self, value: &CookieValue, now: i64) -> Result<bool, TrustedDeviceError> {
        let expiration_time = self.expiration_time(value, now)?;
        Ok(now > expiration_time)
    }
}
