//! Outbound trusted device cookie.

use chrono::{DateTime, Utc};
use tiqr_trusted_device::SameSitePolicy;

/// Attributes for the `Set-Cookie` response header. The HTTP layer writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age: i64,
    pub expires: Option<DateTime<Utc>>,
    pub same_site: SameSitePolicy,
    pub secure: bool,
    pub http_only: bool,
}

impl SetCookie {
    /// A `Secure`, `HttpOnly` cookie valid for `max_age` seconds from `now`.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        max_age: i64,
        same_site: SameSitePolicy,
        now: i64,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            max_age,
            expires: now
                .checked_add(max_age)
                .and_then(|t| DateTime::<Utc>::from_timestamp(t, 0)),
            same_site,
            secure: true,
            http_only: true,
        }
    }

    /// Render as a `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        let mut header = format!(
            "{}={}; Path={}; Max-Age={}",
            self.name, self.value, self.path, self.max_age
        );
        if let Some(expires) = self.expires {
            header.push_str("; Expires=");
            header.push_str(&expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string());
        }
        if self.secure {
            header.push_str("; Secure");
        }
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        header.push_str("; SameSite=");
        header.push_str(self.same_site.as_str());
        header
    }
}
