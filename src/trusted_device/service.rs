//! Trusted device checks and registration.
//!
//! Every failure on the inbound side collapses to "not trusted": the caller
//! asks for step-up as if no cookie had been sent. The reason is only logged.

use tiqr_session_correlation::RequestCookies;
use tiqr_trusted_device::{
    AuthenticationTimeError, Configuration, CookieValue, CryptoHelper, ExpirationHelper,
    TrustedDeviceError,
};

use super::set_cookie::SetCookie;
use crate::error::Result;

/// Outcome of inspecting a request for a trusted device cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustDecision {
    Trusted,
    NoCookie,
    Undecryptable,
    InvalidAuthenticationTime(AuthenticationTimeError),
    Expired,
    IdentityMismatch,
}

impl TrustDecision {
    pub fn is_trusted(&self) -> bool {
        matches!(self, TrustDecision::Trusted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustDecision::Trusted => "trusted",
            TrustDecision::NoCookie => "no_cookie",
            TrustDecision::Undecryptable => "undecryptable",
            TrustDecision::InvalidAuthenticationTime(_) => "invalid_authentication_time",
            TrustDecision::Expired => "expired",
            TrustDecision::IdentityMismatch => "identity_mismatch",
        }
    }
}

impl From<TrustedDeviceError> for TrustDecision {
    fn from(e: TrustedDeviceError) -> Self {
        match e {
            TrustedDeviceError::InvalidAuthenticationTime(reason) => {
                TrustDecision::InvalidAuthenticationTime(reason)
            }
            _ => TrustDecision::Undecryptable,
        }
    }
}

pub struct TrustedDeviceService {
    config: Configuration,
    crypto: CryptoHelper,
    expiration: ExpirationHelper,
}

impl TrustedDeviceService {
    pub fn new(config: Configuration) -> Result<Self> {
        let crypto = CryptoHelper::new(&config)?;
        let expiration = ExpirationHelper::new(&config);
        Ok(Self {
            config,
            crypto,
            expiration,
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Issue a cookie recording a successful step-up at `now`.
    pub fn register_trusted_device(
        &self,
        user_id: &str,
        notification_address: &str,
        now: i64,
    ) -> Result<SetCookie> {
        let value = CookieValue::new(user_id, notification_address, now);
        let encrypted = self.crypto.encrypt(&value)?;
        tracing::info!(
            lifetime_seconds = self.config.lifetime_seconds(),
            "registered trusted device"
        );
        Ok(SetCookie::new(
            self.config.cookie_name(),
            encrypted,
            self.config.lifetime_seconds(),
            self.config.same_site(),
            now,
        ))
    }

    /// Inspect the request's trusted device cookie for this user and device.
    pub fn evaluate(
        &self,
        cookies: &impl RequestCookies,
        user_id: &str,
        notification_address: &str,
        now: i64,
    ) -> TrustDecision {
        let decision = match cookies.cookie(self.config.cookie_name()) {
            None => TrustDecision::NoCookie,
            Some(raw) => self.check(raw, user_id, notification_address, now),
        };

        match &decision {
            TrustDecision::Trusted => tracing::info!("trusted device cookie accepted"),
            TrustDecision::InvalidAuthenticationTime(reason) => tracing::warn!(
                decision = decision.as_str(),
                %reason,
                "trusted device cookie rejected"
            ),
            _ => tracing::debug!(decision = decision.as_str(), "trusted device cookie rejected"),
        }
        decision
    }

    pub fn is_trusted_device(
        &self,
        cookies: &impl RequestCookies,
        user_id: &str,
        notification_address: &str,
        now: i64,
    ) -> bool {
        self.evaluate(cookies, user_id, notification_address, now)
            .is_trusted()
    }

    fn check(&self, raw: &str, user_id: &str, notification_address: &str, now: i64) -> TrustDecision {
        let value = match self.crypto.decrypt(raw) {
            Ok(value) => value,
            Err(e) => return e.into(),
        };
        match self.expiration.is_expired(&value, now) {
            Ok(false) => {}
            Ok(true) => return TrustDecision::Expired,
            Err(e) => return e.into(),
        }
        if !value.belongs_to(user_id, notification_address) {
            return TrustDecision::IdentityMismatch;
        }
        TrustDecision::Trusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiqr_session_correlation::CookieJar;
    use tiqr_trusted_device::SameSitePolicy;

    const KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    const NOW: i64 = 1_700_000_000;

    fn service() -> TrustedDeviceService {
        let config = Configuration::new("tiqr-trusted-device", 3600, KEY, SameSitePolicy::Lax)
            .unwrap()
            .with_grace_period(60)
            .unwrap();
        TrustedDeviceService::new(config).unwrap()
    }

    fn jar_with(set_cookie: &SetCookie) -> CookieJar {
        let mut jar = CookieJar::new();
        jar.insert(set_cookie.name.clone(), set_cookie.value.clone());
        jar
    }

    #[test]
    fn registered_device_is_trusted() {
        let svc = service();
        let cookie = svc.register_trusted_device("alice", "push:1", NOW).unwrap();
        assert_eq!(cookie.name, "tiqr-trusted-device");
        assert_eq!(cookie.max_age, 3600);
        assert!(cookie.secure && cookie.http_only);

        let jar = jar_with(&cookie);
        assert_eq!(svc.evaluate(&jar, "alice", "push:1", NOW + 100), TrustDecision::Trusted);
        assert!(svc.is_trusted_device(&jar, "alice", "push:1", NOW + 3660));
    }

    #[test]
    fn expires_after_lifetime_and_grace() {
        let svc = service();
        let jar = jar_with(&svc.register_trusted_device("alice", "push:1", NOW).unwrap());
        assert_eq!(svc.evaluate(&jar, "alice", "push:1", NOW + 3661), TrustDecision::Expired);
    }

    #[test]
    fn no_cookie() {
        assert_eq!(
            service().evaluate(&CookieJar::new(), "alice", "push:1", NOW),
            TrustDecision::NoCookie
        );
    }

    #[test]
    fn other_user_or_device_is_not_trusted() {
        let svc = service();
        let jar = jar_with(&svc.register_trusted_device("alice", "push:1", NOW).unwrap());
        assert_eq!(svc.evaluate(&jar, "bob", "push:1", NOW), TrustDecision::IdentityMismatch);
        assert_eq!(svc.evaluate(&jar, "alice", "push:2", NOW), TrustDecision::IdentityMismatch);
    }

    #[test]
    fn tampered_cookie_is_undecryptable() {
        let svc = service();
        let cookie = svc.register_trusted_device("alice", "push:1", NOW).unwrap();
        let mut jar = CookieJar::new();
        jar.insert(cookie.name.clone(), cookie.value[1..].to_string());
        assert_eq!(svc.evaluate(&jar, "alice", "push:1", NOW), TrustDecision::Undecryptable);
    }

    #[test]
    fn cookie_from_the_future_is_rejected() {
        let svc = service();
        let jar = jar_with(&svc.register_trusted_device("alice", "push:1", NOW).unwrap());
        let decision = svc.evaluate(&jar, "alice", "push:1", NOW - 1);
        assert!(matches!(
            decision,
            TrustDecision::InvalidAuthenticationTime(AuthenticationTimeError::InTheFuture { .. })
        ));
        assert!(!decision.is_trusted());
    }
}
