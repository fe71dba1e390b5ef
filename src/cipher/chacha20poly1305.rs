//! XChaCha20-Poly1305 outer layer.
//!
//! - **Key Size**: 256 bits (32 bytes)
//! - **Nonce Size**: 192 bits (24 bytes), randomly generated
//! - **Tag Size**: 128 bits (16 bytes), appended automatically
//! - **Format**: `[Nonce (24 bytes)] || [Ciphertext] || [Auth Tag (16 bytes)]`
//!
//! The extended nonce makes random nonce generation safe without a counter.

use anyhow::{Result, anyhow, ensure};
use chacha20poly1305::aead::{Aead, KeyInit, OsRng};
use chacha20poly1305::{AeadCore, XChaCha20Poly1305, XNonce};

use crate::config::{CHACHA_NONCE_SIZE, KEY_SIZE, TAG_SIZE};

pub struct ChaCha20Poly1305 {
    inner: XChaCha20Poly1305,
}

impl ChaCha20Poly1305 {
    /// Initializes a new XChaCha20-Poly1305 context with the provided key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key length is invalid.
    #[inline]
    pub fn new(key: &[u8; KEY_SIZE]) -> Result<Self> {
        let inner = XChaCha20Poly1305::new_from_slice(key).map_err(|e| anyhow!("invalid chacha20poly1305 key length: {e}"))?;
        Ok(Self { inner })
    }

    /// Encrypts the plaintext and prepends the random extended nonce.
    #[inline]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce_bytes = XChaCha20Poly1305::generate_nonce(&mut OsRng);

        let mut result = self
            .inner
            .encrypt(XNonce::from_slice(&nonce_bytes), plaintext)
            .map_err(|e| anyhow!("chacha20poly1305 encryption failed: {e}"))?;

        result.splice(0..0, nonce_bytes.iter().copied());

        Ok(result)
    }

    /// Decrypts the ciphertext using the prepended extended nonce.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ciphertext is shorter than the nonce and tag.
    /// - The authentication tag verification fails.
    #[inline]
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ensure!(
            ciphertext.len() >= CHACHA_NONCE_SIZE + TAG_SIZE,
            "ciphertext too short: need at least {} bytes, got {}",
            CHACHA_NONCE_SIZE + TAG_SIZE,
            ciphertext.len()
        );

        let (nonce_bytes, data) = ciphertext.split_at(CHACHA_NONCE_SIZE);

        self.inner.decrypt(XNonce::from_slice(nonce_bytes), data).map_err(|_| anyhow!("chacha20poly1305 authentication failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = [0u8; KEY_SIZE];
        let cipher = ChaCha20Poly1305::new(&key).unwrap();
        let plaintext = b"Hello, XChaCha20!";

        let ciphertext = cipher.encrypt(plaintext).unwrap();
        assert_ne!(plaintext, &ciphertext[..]);

        // 24 (nonce) + 17 (plaintext) + 16 (tag) = 57 bytes.
        assert_eq!(ciphertext.len(), CHACHA_NONCE_SIZE + plaintext.len() + TAG_SIZE);

        let decrypted = cipher.decrypt(&ciphertext).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_nonce_is_random() {
        let cipher = ChaCha20Poly1305::new(&[0u8; KEY_SIZE]).unwrap();
        assert_ne!(cipher.encrypt(b"same").unwrap(), cipher.encrypt(b"same").unwrap());
    }

    #[test]
    fn test_decrypt_too_short() {
        let key = [0u8; KEY_SIZE];
        let cipher = ChaCha20Poly1305::new(&key).unwrap();
        let ciphertext = vec![0u8; CHACHA_NONCE_SIZE - 1];
        assert!(cipher.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn test_decrypt_tampered_ciphertext() {
        let key = [0u8; KEY_SIZE];
        let cipher = ChaCha20Poly1305::new(&key).unwrap();
        let mut ciphertext = cipher.encrypt(b"Secret Message").unwrap();

        ciphertext[CHACHA_NONCE_SIZE] ^= 0x01;

        let result = cipher.decrypt(&ciphertext);
        assert_eq!(result.unwrap_err().to_string(), "chacha20poly1305 authentication failed");
    }
}
