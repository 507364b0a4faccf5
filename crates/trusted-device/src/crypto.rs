//! AES-256-GCM encryption of trusted device cookies.
//!
//! Wire format v1:
//! base64url([1 byte: version=1][12 bytes: IV][N bytes: ciphertext + tag])
//! The cookie name is bound as AAD, so a value cannot be replayed under
//! another cookie.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64ct::{Base64UrlUnpadded, Encoding};
use zeroize::Zeroizing;

use crate::configuration::Configuration;
use crate::cookie_value::CookieValue;
use crate::error::TrustedDeviceError;
use crate::types::{AES_GCM_IV_LENGTH, CURRENT_VERSION, MIN_COOKIE_LENGTH, SUPPORTED_VERSIONS};

/// Generate a random 12-byte IV for AES-GCM.
fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH], TrustedDeviceError> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| TrustedDeviceError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Encrypts `CookieValue`s into opaque cookie strings and back.
///
/// Every failure on the decrypt side is reported as the same
/// `DecryptionFailed`, whatever part of the input was wrong.
pub struct CryptoHelper {
    cipher: Aes256Gcm,
    aad: Vec<u8>,
}

impl CryptoHelper {
    pub fn new(config: &Configuration) -> Result<Self, TrustedDeviceError> {
        let cipher = Aes256Gcm::new_from_slice(config.encryption_key())
            .map_err(|e| TrustedDeviceError::EncryptionFailed(e.to_string()))?;
        Ok(Self {
            cipher,
            aad: config.cookie_name().as_bytes().to_vec(),
        })
    }

    /// Encrypt a cookie value. A fresh IV is drawn on every call, so the same
    /// value never encrypts to the same string twice.
    pub fn encrypt(&self, value: &CookieValue) -> Result<String, TrustedDeviceError> {
        let plaintext = Zeroizing::new(value.to_json()?);
        let iv = generate_iv()?;
        let nonce = Nonce::from_slice(&iv);

        let ciphertext = self
            .cipher
            .encrypt(
                nonce,
                Payload {
                    msg: plaintext.as_bytes(),
                    aad: &self.aad,
                },
            )
            .map_err(|e| TrustedDeviceError::EncryptionFailed(e.to_string()))?;

        let mut blob = Vec::with_capacity(1 + iv.len() + ciphertext.len());
        blob.push(CURRENT_VERSION);
        blob.extend_from_slice(&iv);
        blob.extend_from_slice(&ciphertext);
        Ok(Base64UrlUnpadded::encode_string(&blob))
    }

    /// Verify and decrypt a cookie string.
    pub fn decrypt(&self, encoded: &str) -> Result<CookieValue, TrustedDeviceError> {
        let blob = Base64UrlUnpadded::decode_vec(encoded).map_err(|_| reject("base64"))?;
        if blob.len() < MIN_COOKIE_LENGTH {
            return Err(reject("too short"));
        }

        let version = blob[0];
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(reject("unsupported version"));
        }

        let iv = &blob[1..1 + AES_GCM_IV_LENGTH];
        let ciphertext = &blob[1 + AES_GCM_IV_LENGTH..];
        let nonce = Nonce::from_slice(iv);

        let plaintext = Zeroizing::new(
            self.cipher
                .decrypt(
                    nonce,
                    Payload {
                        msg: ciphertext,
                        aad: &self.aad,
                    },
                )
                .map_err(|_| reject("authentication tag"))?,
        );

        CookieValue::from_json(&plaintext)
    }
}

fn reject(reason: &'static str) -> TrustedDeviceError {
    tracing::debug!(reason, "trusted device cookie failed to decrypt");
    TrustedDeviceError::DecryptionFailed
}
