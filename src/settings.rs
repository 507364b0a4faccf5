//! Server-side settings, loaded once at startup.
//!
//! ```json
//! {
//!   "trusted_device": {
//!     "cookie_name": "tiqr-trusted-device",
//!     "lifetime_seconds": 2592000,
//!     "grace_period_seconds": 60,
//!     "encryption_key": "<64 hex characters>",
//!     "same_site": "lax"
//!   },
//!   "correlation": {
//!     "session_cookie_name": "session",
//!     "salt": "<at least 16 characters>"
//!   }
//! }
//! ```
//!
//! Leaving out `trusted_device` disables the feature.

use std::path::Path;

use serde::Deserialize;
use tiqr_session_correlation::SessionCorrelationIdService;
use tiqr_trusted_device::{Configuration, SameSitePolicy};

use crate::error::Result;

pub const DEFAULT_TRUSTED_DEVICE_COOKIE_NAME: &str = "tiqr-trusted-device";
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "session";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub trusted_device: Option<TrustedDeviceSettings>,
    #[serde(default)]
    pub correlation: CorrelationSettings,
}

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustedDeviceSettings {
    #[serde(default = "default_trusted_device_cookie_name")]
    pub cookie_name: String,
    pub lifetime_seconds: i64,
    #[serde(default)]
    pub grace_period_seconds: i64,
    pub encryption_key: String,
    #[serde(default = "default_same_site")]
    pub same_site: String,
}

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrelationSettings {
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
    #[serde(default)]
    pub salt: Option<String>,
}

fn default_trusted_device_cookie_name() -> String {
    DEFAULT_TRUSTED_DEVICE_COOKIE_NAME.to_string()
}

fn default_session_cookie_name() -> String {
    DEFAULT_SESSION_COOKIE_NAME.to_string()
}

fn default_same_site() -> String {
    "lax".to_string()
}

impl Default for CorrelationSettings {
    fn default() -> Self {
        Self {
            session_cookie_name: default_session_cookie_name(),
            salt: None,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validated trusted device configuration, `None` when the feature is off.
    pub fn trusted_device_configuration(&self) -> Result<Option<Configuration>> {
        self.trusted_device
            .as_ref()
            .map(TrustedDeviceSettings::to_configuration)
            .transpose()
    }

    pub fn correlation_service(&self) -> SessionCorrelationIdService {
        self.correlation.to_service()
    }
}

impl TrustedDeviceSettings {
    pub fn to_configuration(&self) -> Result<Configuration> {
        let same_site: SameSitePolicy = self.same_site.parse()?;
        let config = Configuration::new(
            self.cookie_name.clone(),
            self.lifetime_seconds,
            &self.encryption_key,
            same_site,
        )?
        .with_grace_period(self.grace_period_seconds)?;
        Ok(config)
    }
}

impl CorrelationSettings {
    pub fn to_service(&self) -> SessionCorrelationIdService {
        SessionCorrelationIdService::new(self.session_cookie_name.clone(), self.salt.clone())
    }
}

impl std::fmt::Debug for TrustedDeviceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustedDeviceSettings")
            .field("cookie_name", &self.cookie_name)
            .field("lifetime_seconds", &self.lifetime_seconds)
            .field("grace_period_seconds", &self.grace_period_seconds)
            .field("encryption_key", &"<redacted>")
            .field("same_site", &self.same_site)
            .finish()
    }
}

impl std::fmt::Debug for CorrelationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorrelationSettings")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("salt", &self.salt.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
