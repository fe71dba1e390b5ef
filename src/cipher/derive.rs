//! # Key Derivation with Argon2id
//!
//! Turns a passphrase and a random salt into the 64 bytes of key material
//! that feed both cipher layers. Argon2id is memory-hard, which keeps offline
//! guessing against captured ciphertext expensive.
//!
//! The cost parameters are recorded in every envelope so ciphertext produced
//! with one set of parameters can still be opened after the defaults change.

use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;
use anyhow::{Result, anyhow, ensure};
use argon2::Algorithm::Argon2id;
use argon2::Version::V0x13;
use argon2::{Argon2, Params};

use crate::config::{ARGON_KEY_LEN, ARGON_MEMORY, ARGON_MEMORY_MAX, ARGON_THREADS, ARGON_THREADS_MAX, ARGON_TIME, ARGON_TIME_MAX};
use crate::secret::SecretBytes;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB.
    pub memory: u32,
    /// Number of passes.
    pub time: u32,
    /// Number of lanes.
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self { memory: ARGON_MEMORY, time: ARGON_TIME, parallelism: ARGON_THREADS }
    }
}

impl KdfParams {
    /// Checks the parameters against the accepted bounds.
    ///
    /// Decryption reads these values from untrusted input, so they are
    /// validated before any memory is committed.
    pub fn validate(&self) -> Result<()> {
        ensure!((1..=ARGON_THREADS_MAX).contains(&self.parallelism), "invalid key derivation parameters: parallelism {}", self.parallelism);
        ensure!((1..=ARGON_TIME_MAX).contains(&self.time), "invalid key derivation parameters: time {}", self.time);
        ensure!(
            (8 * self.parallelism..=ARGON_MEMORY_MAX).contains(&self.memory),
            "invalid key derivation parameters: memory {} KiB",
            self.memory
        );

        Ok(())
    }
}

/// Wrapper for Argon2id key derivation with secure salt generation.
pub struct Derive {
    key: SecretBytes,
}

impl Derive {
    /// Creates a new key derivation instance.
    ///
    /// # Errors
    /// Returns error if the passphrase is empty.
    pub fn new(key: &[u8]) -> Result<Self> {
        ensure!(!key.is_empty(), "key cannot be empty");
        Ok(Self { key: SecretBytes::from_vec(key.to_vec()) })
    }

    /// Derives the 64-byte master key for `salt`.
    ///
    /// # Errors
    /// Returns error if the parameters are out of range or derivation fails.
    pub fn derive_key(&self, salt: &[u8], params: KdfParams) -> Result<SecretBytes> {
        params.validate()?;

        let params = Params::new(params.memory, params.time, params.parallelism, Some(ARGON_KEY_LEN)).map_err(|e| anyhow!("invalid argon2 parameter: {e}"))?;
        let argon2 = Argon2::new(Argon2id, V0x13, params);

        let mut key = vec![0u8; ARGON_KEY_LEN];
        argon2.hash_password_into(self.key.expose_secret(), salt, &mut key).map_err(|e| anyhow!("key derivation failed: {e}"))?;

        Ok(SecretBytes::from_vec(key))
    }

    /// Generates a random salt from the operating system RNG.
    ///
    /// # Errors
    /// Returns error if the operating system's random number generator fails.
    pub fn generate_salt<const N: usize>() -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| anyhow!("rng failed: {e}"))?;

        Ok(bytes)
    }
}
