//! Symmetric encryption seam and its AES-256-GCM implementation.
//!
//! Ciphertext format: [12 bytes: IV][N bytes: ciphertext + tag]

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use crate::error::{DatagramError, Result};

/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// Authenticated symmetric encryption, as seen by the container layer.
pub trait SymmetricCipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;

    fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;
}

/// Generate a random 256-bit key, wiped on drop.
pub fn generate_key() -> Result<Zeroizing<[u8; AES_KEY_LENGTH]>> {
    let mut key = Zeroizing::new([0u8; AES_KEY_LENGTH]);
    getrandom::getrandom(&mut key[..]).map_err(|e| DatagramError::RngFailed(e.to_string()))?;
    Ok(key)
}

fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH]> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| DatagramError::RngFailed(e.to_string()))?;
    Ok(iv)
}

pub struct Aes256GcmCipher {
    cipher: Aes256Gcm,
}

impl Aes256GcmCipher {
    /// Create a cipher from 32 bytes of raw key material.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != AES_KEY_LENGTH {
            return Err(DatagramError::InvalidKeyLength {
                expected: AES_KEY_LENGTH,
                got: key.len(),
            });
        }
        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| DatagramError::EncryptionFailed(e.to_string()))?;
        Ok(Self { cipher })
    }
}

impl SymmetricCipher for Aes256GcmCipher {
    fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let iv = generate_iv()?;
        let nonce = Nonce::from_slice(&iv);

        let ciphertext = self
            .cipher
            .encrypt(
                nonce,
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|e| DatagramError::EncryptionFailed(e.to_string()))?;

        let mut result = Vec::with_capacity(iv.len() + ciphertext.len());
        result.extend_from_slice(&iv);
        result.extend_from_slice(&ciphertext);
        Ok(result)
    }

    fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < AES_GCM_IV_LENGTH + AES_GCM_TAG_LENGTH {
            return Err(DatagramError::ContainerTooShort);
        }

        let (iv, sealed) = ciphertext.split_at(AES_GCM_IV_LENGTH);
        let nonce = Nonce::from_slice(iv);

        self.cipher
            .decrypt(nonce, Payload { msg: sealed, aad })
            .map_err(|e| DatagramError::DecryptionFailed(e.to_string()))
    }
}
