//! Request-scoped log context.

use tiqr_session_correlation::{RequestCookies, SessionCorrelationIdService};
use tracing::Span;

/// Span for one request. Log lines emitted inside it carry the session's
/// correlation id when there is one.
pub fn log_context(service: &SessionCorrelationIdService, cookies: &impl RequestCookies) -> Span {
    let span = tracing::info_span!("request", correlation_id = tracing::field::Empty);
    if let Some(id) = service.generate_correlation_id(cookies) {
        span.record("correlation_id", id.as_str());
    }
    span
}
