//! Wires settings, clock, and services together for the request handlers.

use std::sync::Arc;

use tiqr_session_correlation::{RequestCookies, SessionCorrelationIdService};
use tracing::Span;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::logging::log_context;
use crate::settings::Settings;
use crate::trusted_device::{SetCookie, TrustedDeviceService};

pub struct StepUpBridge {
    trusted_device: Option<TrustedDeviceService>,
    correlation: SessionCorrelationIdService,
    clock: Arc<dyn Clock>,
}

impl StepUpBridge {
    /// Build from settings with the real clock. Invalid trusted device
    /// settings fail here, at startup.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    pub fn with_clock(settings: &Settings, clock: Arc<dyn Clock>) -> Result<Self> {
        let trusted_device = settings
            .trusted_device_configuration()?
            .map(TrustedDeviceService::new)
            .transpose()?;
        if trusted_device.is_none() {
            tracing::info!("trusted device cookies disabled");
        }
        Ok(Self {
            trusted_device,
            correlation: settings.correlation_service(),
            clock,
        })
    }

    pub fn trusted_device_enabled(&self) -> bool {
        self.trusted_device.is_some()
    }

    pub fn log_context(&self, cookies: &impl RequestCookies) -> Span {
        log_context(&self.correlation, cookies)
    }

    /// Whether this user must complete a Tiqr step-up on this request.
    pub fn requires_step_up(
        &self,
        cookies: &impl RequestCookies,
        user_id: &str,
        notification_address: &str,
    ) -> bool {
        match &self.trusted_device {
            Some(service) => !service.is_trusted_device(
                cookies,
                user_id,
                notification_address,
                self.clock.now(),
            ),
            None => true,
        }
    }

    /// Cookie to set after a successful step-up, `None` when the feature is off.
    pub fn remember_device(
        &self,
        user_id: &str,
        notification_address: &str,
    ) -> Result<Option<SetCookie>> {
        self.trusted_device
            .as_ref()
            .map(|service| {
                service.register_trusted_device(user_id, notification_address, self.clock.now())
            })
            .transpose()
    }
}
