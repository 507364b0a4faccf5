//! Result of checking a Tiqr authentication attempt.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationResponse {
    Valid,
    Rejected {
        reason: String,
    },
    /// A rejection that counts against the user's remaining attempts.
    RateLimited {
        inner: Box<AuthenticationResponse>,
        attempts_left: u32,
    },
}

impl AuthenticationResponse {
    pub fn rejected(reason: impl Into<String>) -> Self {
        AuthenticationResponse::Rejected {
            reason: reason.into(),
        }
    }

    /// Wrap this response with the number of attempts the user has left.
    pub fn rate_limited(self, attempts_left: u32) -> Self {
        AuthenticationResponse::RateLimited {
            inner: Box::new(self),
            attempts_left,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            AuthenticationResponse::Valid => true,
            AuthenticationResponse::Rejected { .. } => false,
            AuthenticationResponse::RateLimited { inner, .. } => inner.is_valid(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            AuthenticationResponse::Valid => String::new(),
            AuthenticationResponse::Rejected { reason } => reason.clone(),
            AuthenticationResponse::RateLimited {
                inner,
                attempts_left,
            } => {
                let suffix = match attempts_left {
                    0 => "no attempts left".to_string(),
                    1 => "1 attempt left".to_string(),
                    n => format!("{n} attempts left"),
                };
                match inner.message() {
                    m if m.is_empty() => suffix,
                    m => format!("{m} ({suffix})"),
                }
            }
        }
    }
}

impl fmt::Display for AuthenticationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str("valid")
        } else {
            f.write_str(&self.message())
        }
    }
}
