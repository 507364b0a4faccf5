pub mod service;
pub mod set_cookie;

pub use service::{TrustDecision, TrustedDeviceService};
pub use set_cookie::SetCookie;
