//! Tiqr step-up authentication bridge.
//!
//! Composes the trusted device cookie and session correlation crates with
//! the pieces a request handler needs around them: settings, a clock,
//! outbound cookies, authentication responses, state storage, and sessions.

pub mod authentication;
pub mod bridge;
pub mod clock;
pub mod error;
pub mod logging;
pub mod session;
pub mod settings;
pub mod storage;
pub mod trusted_device;

pub use authentication::AuthenticationResponse;
pub use bridge::StepUpBridge;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{GsspError, Result};
pub use logging::log_context;
pub use settings::{CorrelationSettings, Settings, TrustedDeviceSettings};
pub use trusted_device::{SetCookie, TrustDecision, TrustedDeviceService};

pub use tiqr_session_correlation as correlation;
pub use tiqr_trusted_device as cookie;
