use thiserror::Error;

pub type Result<T> = std::result::Result<T, GsspError>;

#[derive(Debug, Error)]
pub enum GsspError {
    #[error("Trusted device error: {0}")]
    TrustedDevice(#[from] tiqr_trusted_device::TrustedDeviceError),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
