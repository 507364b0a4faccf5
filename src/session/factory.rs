//! Session creation, optionally decorated with logging.

use chrono::{DateTime, Utc};
use tiqr_session_correlation::SessionCorrelationIdService;
use uuid::Uuid;

/// A freshly started session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

pub trait SessionFactory: Send + Sync {
    fn create_session(&self) -> Session;
}

/// Random v4 UUID session ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSessionFactory;

impl SessionFactory for DefaultSessionFactory {
    fn create_session(&self) -> Session {
        Session {
            id: Uuid::new_v4().simple().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Logs every session another factory creates, identified by its
/// correlation id. The raw session id never reaches the log.
#[derive(Debug)]
pub struct LoggingSessionFactory<F> {
    inner: F,
    correlation: SessionCorrelationIdService,
}

impl<F: SessionFactory> LoggingSessionFactory<F> {
    pub fn new(inner: F, correlation: SessionCorrelationIdService) -> Self {
        Self { inner, correlation }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: SessionFactory> SessionFactory for LoggingSessionFactory<F> {
    fn create_session(&self) -> Session {
        let session = self.inner.create_session();
        match self.correlation.correlation_id_for(&session.id) {
            Some(id) => tracing::info!(correlation_id = %id, "session started"),
            None => tracing::info!("session started"),
        }
        session
    }
}

pub fn with_logging<F: SessionFactory>(
    factory: F,
    correlation: SessionCorrelationIdService,
) -> LoggingSessionFactory<F> {
    LoggingSessionFactory::new(factory, correlation)
}
