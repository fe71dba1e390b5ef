//! # Text Cipher
//!
//! The transform that sits behind [`Transform`]. Text is sealed in two
//! authenticated layers and armoured as base64:
//!
//! 1. Argon2id derives 64 bytes from the passphrase and a random salt.
//! 2. The first 32 bytes key AES-256-GCM, which seals the UTF-8 plaintext.
//! 3. The last 32 bytes key XChaCha20-Poly1305, which seals the AES output.
//! 4. The salt and cost parameters are prefixed (see [`envelope`]) and the
//!    whole envelope is base64 encoded.
//!
//! Every encryption draws a fresh salt and fresh nonces, so encrypting the
//! same text twice yields different ciphertext.

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

mod aes_gcm;
mod chacha20poly1305;
mod derive;
mod envelope;

pub use self::aes_gcm::AesGcm;
pub use self::chacha20poly1305::ChaCha20Poly1305;
pub use self::derive::{Derive, KdfParams};
pub use self::envelope::Envelope;

use crate::config::{ARGON_KEY_LEN, ARGON_SALT_LEN, KEY_SIZE};
use crate::secret::Secret;

/// The encrypt/decrypt contract consumed by the processor.
///
/// Implementations may fail for any reason (wrong passphrase, malformed
/// input); the caller reports the error chain without inspecting it.
pub trait Transform {
    fn encrypt(&self, plaintext: &str, passphrase: &Secret) -> Result<String>;

    fn decrypt(&self, ciphertext: &str, passphrase: &Secret) -> Result<String>;
}

impl<T: Transform + ?Sized> Transform for &T {
    #[inline]
    fn encrypt(&self, plaintext: &str, passphrase: &Secret) -> Result<String> {
        (**self).encrypt(plaintext, passphrase)
    }

    #[inline]
    fn decrypt(&self, ciphertext: &str, passphrase: &Secret) -> Result<String> {
        (**self).decrypt(ciphertext, passphrase)
    }
}

/// Both cipher layers keyed from one derived master key.
pub struct Cipher {
    aes: AesGcm,
    chacha: ChaCha20Poly1305,
}

impl Cipher {
    /// Splits the 64-byte master key between the two layers.
    pub fn new(key: &[u8]) -> Result<Self> {
        anyhow::ensure!(key.len() == ARGON_KEY_LEN, "invalid master key length: {}", key.len());

        let (aes_key, chacha_key) = key.split_at(KEY_SIZE);
        let aes_key: &[u8; KEY_SIZE] = aes_key.try_into().context("invalid AES key length")?;
        let chacha_key: &[u8; KEY_SIZE] = chacha_key.try_into().context("invalid ChaCha key length")?;

        Ok(Self { aes: AesGcm::new(aes_key)?, chacha: ChaCha20Poly1305::new(chacha_key)? })
    }

    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let inner = self.aes.encrypt(plaintext)?;
        self.chacha.encrypt(&inner)
    }

    pub fn open(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        let inner = self.chacha.decrypt(sealed)?;
        self.aes.decrypt(&inner)
    }
}

/// Passphrase-based text encryption with base64 output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCipher {
    params: KdfParams,
}

impl TextCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses custom Argon2id costs for new ciphertext.
    ///
    /// Decryption always uses the costs recorded in the envelope.
    pub fn with_params(params: KdfParams) -> Self {
        Self { params }
    }
}

impl Transform for TextCipher {
    fn encrypt(&self, plaintext: &str, passphrase: &Secret) -> Result<String> {
        let salt = Derive::generate_salt::<ARGON_SALT_LEN>()?;
        let key = Derive::new(passphrase.expose_secret().as_bytes())?.derive_key(&salt, self.params)?;

        let payload = Cipher::new(key.expose_secret())?.seal(plaintext.as_bytes())?;
        let envelope = Envelope { params: self.params, salt, payload };

        Ok(STANDARD.encode(envelope.serialize()?))
    }

    fn decrypt(&self, ciphertext: &str, passphrase: &Secret) -> Result<String> {
        let raw = STANDARD.decode(ciphertext.trim()).context("invalid base64 ciphertext")?;
        let envelope = Envelope::deserialize(&raw)?;

        let key = Derive::new(passphrase.expose_secret().as_bytes())?.derive_key(&envelope.salt, envelope.params)?;
        let plaintext = Cipher::new(key.expose_secret())?.open(&envelope.payload).context("authentication failed: wrong passphrase or corrupted ciphertext")?;

        String::from_utf8(plaintext).context("decrypted text is not valid UTF-8")
    }
}
