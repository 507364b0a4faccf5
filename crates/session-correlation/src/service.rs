//! Correlation id derivation.

use sha2::{Digest, Sha256};

use crate::correlation_id::CorrelationId;
use crate::request::RequestCookies;
use crate::{CORRELATION_ID_LENGTH, MIN_SALT_LENGTH};

/// Derives correlation ids from the session cookie of a request.
///
/// A missing or short salt disables the service: it then returns `None`
/// for every request instead of producing an id from weak secret material.
#[derive(Clone)]
pub struct SessionCorrelationIdService {
    session_cookie_name: String,
    salt: Option<String>,
}

impl SessionCorrelationIdService {
    pub fn new(session_cookie_name: impl Into<String>, salt: Option<String>) -> Self {
        let salt = salt.filter(|s| s.chars().count() >= MIN_SALT_LENGTH);
        if salt.is_none() {
            tracing::warn!(
                min_length = MIN_SALT_LENGTH,
                "correlation id salt missing or too short, correlation ids disabled"
            );
        }
        Self {
            session_cookie_name: session_cookie_name.into(),
            salt,
        }
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }

    pub fn is_enabled(&self) -> bool {
        self.salt.is_some()
    }

    /// Correlation id for the request's session, if it has one.
    pub fn generate_correlation_id(&self, request: &impl RequestCookies) -> Option<CorrelationId> {
        let session = request.cookie(&self.session_cookie_name)?;
        self.correlation_id_for(session)
    }

    /// Correlation id for a raw session identifier.
    pub fn correlation_id_for(&self, session: &str) -> Option<CorrelationId> {
        let salt = self.salt.as_deref()?;
        let mut hasher = Sha256::new();
        hasher.update(session.as_bytes());
        hasher.update(salt.as_bytes());
        let digest = hex::encode(hasher.finalize());
        Some(CorrelationId::new(digest[..CORRELATION_ID_LENGTH].to_string()))
    }
}

impl std::fmt::Debug for SessionCorrelationIdService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCorrelationIdService")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
