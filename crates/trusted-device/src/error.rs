use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrustedDeviceError {
    #[error("Invalid cookie name \"{0}\": must be a non-empty RFC 6265 token")]
    InvalidCookieName(String),

    #[error("Invalid cookie lifetime: must be a positive number of seconds, got {0}")]
    InvalidCookieLifetime(i64),

    #[error("Invalid grace period: must be zero or a positive number of seconds, got {0}")]
    InvalidGracePeriod(i64),

    #[error(
        "Invalid encryption key: {0}. Expected 64 hexadecimal characters (32 bytes), \
         e.g. the output of `openssl rand -hex 32`"
    )]
    InvalidEncryptionKey(String),

    #[error("Invalid SameSite policy \"{0}\": expected one of strict, lax, none")]
    InvalidSameSitePolicy(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Invalid authentication time: {0}")]
    InvalidAuthenticationTime(AuthenticationTimeError),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}

impl TrustedDeviceError {
    /// Errors raised while validating configuration. These must abort startup;
    /// everything else means "cookie not trusted" for the request at hand.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TrustedDeviceError::InvalidCookieName(_)
                | TrustedDeviceError::InvalidCookieLifetime(_)
                | TrustedDeviceError::InvalidGracePeriod(_)
                | TrustedDeviceError::InvalidEncryptionKey(_)
                | TrustedDeviceError::InvalidSameSitePolicy(_)
        )
    }
}

/// Why an authentication time was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticationTimeError {
    #[error("not an integer: {0}")]
    NotAnInteger(String),

    #[error("{0} predates the Unix epoch")]
    BeforeEpoch(i64),

    #[error("{time} lies in the future (now: {now})")]
    InTheFuture { time: i64, now: i64 },
}

impl From<AuthenticationTimeError> for TrustedDeviceError {
    fn from(e: AuthenticationTimeError) -> Self {
        TrustedDeviceError::InvalidAuthenticationTime(e)
    }
}
