//! Global Configuration Constants
//!
//! This module contains every fixed parameter used by sweettext: the command
//! line grammar, the key derivation defaults and bounds, the envelope layout
//! and the process exit status.
//!
//! There is deliberately no runtime configuration. Each invocation is fully
//! described by its command line.

/// Application name used in the usage text.
pub const APP_NAME: &str = "sweettext";

// === Command Line Grammar ===

/// Characters that may introduce an option token (`-e`, `/e`, `--e`).
pub const OPTION_MARKERS: &[char] = &['-', '/'];

/// Separator between an option name and its data (`-p:secret`).
///
/// Only the first occurrence separates; the data may contain more colons.
pub const DATA_DELIMITER: char = ':';

// === Argon2 Key Derivation Parameters ===

/// Argon2 time cost parameter (number of iterations).
pub const ARGON_TIME: u32 = 3;

/// Argon2 memory cost parameter in kilobytes.
///
/// 64MB makes offline guessing against captured ciphertext expensive on GPUs.
pub const ARGON_MEMORY: u32 = 64 * 1024;

/// Argon2 parallelism parameter (number of lanes).
pub const ARGON_THREADS: u32 = 4;

/// Largest memory cost accepted from an envelope when decrypting (1GB).
///
/// The parameters travel with the ciphertext, so a hostile envelope must not
/// be able to make the tool allocate unbounded memory.
pub const ARGON_MEMORY_MAX: u32 = 1024 * 1024;

/// Largest time cost accepted from an envelope when decrypting.
pub const ARGON_TIME_MAX: u32 = 10;

/// Largest lane count accepted from an envelope when decrypting.
pub const ARGON_THREADS_MAX: u32 = 16;

/// Length of derived keys in bytes.
///
/// 64 bytes are split into one 32-byte key per cipher layer.
pub const ARGON_KEY_LEN: usize = 64;

/// Length of Argon2 salt in bytes.
pub const ARGON_SALT_LEN: usize = 32;

// === Cipher Parameters ===

/// Size of each layer's encryption key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of AES-GCM nonce in bytes.
pub const AES_NONCE_SIZE: usize = 12;

/// Size of XChaCha20 nonce in bytes.
pub const CHACHA_NONCE_SIZE: usize = 24;

/// Size of the authentication tag appended by both AEAD layers.
pub const TAG_SIZE: usize = 16;

// === Envelope Format ===

/// Current envelope version, written as the first byte of every ciphertext.
pub const CURRENT_VERSION: u8 = 0x01;

/// Size of the fixed envelope prefix: version, memory (u32), time (u8), lanes (u8).
pub const ENVELOPE_PARAMS_LEN: usize = 1 + 4 + 1 + 1;

// === Process ===

/// Exit status reported for every usage, I/O or transform failure.
///
/// This is `-1` as the shell sees it.
pub const EXIT_FAILURE: u8 = 255;
