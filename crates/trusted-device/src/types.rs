/// Wire format version for trusted device cookies.
///
/// Version 1: AES-256-GCM, cookie name bound as AAD
/// Format: base64url([version=1:1B][IV:12B][ciphertext+tag])
pub const CURRENT_VERSION: u8 = 1;

/// Supported wire format versions (for decryption).
pub const SUPPORTED_VERSIONS: &[u8] = &[1];

/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// Encryption keys are configured as hex, two characters per byte.
pub const ENCRYPTION_KEY_HEX_LENGTH: usize = AES_KEY_LENGTH * 2;

/// Shortest possible encoded cookie, before base64url.
pub const MIN_COOKIE_LENGTH: usize = 1 + AES_GCM_IV_LENGTH + AES_GCM_TAG_LENGTH;
