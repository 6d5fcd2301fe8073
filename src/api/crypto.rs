//! Symmetric payload encryption for the colour-operation boundary.
//!
//! Payloads are sealed with AES-256-GCM under a key derived from the
//! injected secret (SHA-256 of the passphrase) and transported as base64
//! `nonce || ciphertext`. Error values deliberately carry no payload
//! detail.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of the AES-GCM nonce prefix in the transported token.
const NONCE_LEN: usize = 12;

/// Errors from sealing or opening payloads.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Payload could not be encrypted
    #[error("failed to encrypt payload")]
    Encrypt,
    /// Token could not be decoded, authenticated, or parsed
    #[error("failed to decrypt payload")]
    Decrypt,
}

/// AES-256-GCM cipher over JSON payloads.
pub struct PayloadCipher {
    cipher: Aes256Gcm,
}

impl PayloadCipher {
    /// Derive a cipher from the configured secret.
    pub fn new(secret: &str) -> Self {
        let digest = Sha256::digest(secret.as_bytes());
        let key = Key::<Aes256Gcm>::from_slice(&digest);
        Self {
            cipher: Aes256Gcm::new(key),
        }
    }

    /// Serialize and encrypt a value into a base64 token.
    pub fn seal<T: Serialize>(&self, value: &T) -> Result<String, CryptoError> {
        let plain = serde_json::to_vec(value).map_err(|_| CryptoError::Encrypt)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plain.as_slice())
            .map_err(|_| CryptoError::Encrypt)?;

        let mut token = nonce.to_vec();
        token.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(token))
    }

    /// Decrypt and deserialize a base64 token.
    pub fn open<T: DeserializeOwned>(&self, token: &str) -> Result<T, CryptoError> {
        let bytes = BASE64
            .decode(token.trim())
            .map_err(|_| CryptoError::Decrypt)?;
        if bytes.len() <= NONCE_LEN {
            return Err(CryptoError::Decrypt);
        }
        let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Decrypt)?;
        serde_json::from_slice(&plain).map_err(|_| CryptoError::Decrypt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let cipher = PayloadCipher::new("test-secret");
        let token = cipher.seal(&vec!["#dc143c", "#00ffff"]).unwrap();
        let colors: Vec<String> = cipher.open(&token).unwrap();
        assert_eq!(colors, vec!["#dc143c", "#00ffff"]);
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = PayloadCipher::new("alpha").seal(&"payload").unwrap();
        let result: Result<String, _> = PayloadCipher::new("beta").open(&token);
        assert!(matches!(result, Err(CryptoError::Decrypt)));
    }

    #[test]
    fn test_garbage_tokens_fail_closed() {
        let cipher = PayloadCipher::new("test-secret");
        assert!(cipher.open::<String>("not base64 !!!").is_err());
        assert!(cipher.open::<String>("").is_err());
        assert!(cipher.open::<String>(&BASE64.encode([0u8; 8])).is_err());
    }

    #[test]
    fn test_tokens_are_nonce_randomised() {
        let cipher = PayloadCipher::new("test-secret");
        let a = cipher.seal(&"same").unwrap();
        let b = cipher.seal(&"same").unwrap();
        assert_ne!(a, b);
    }
}
