//! Common type definitions for sweettext.
//!
//! Provides the enums that describe one invocation: which direction the
//! transform runs in, where the text comes from and where the result goes.
//!
//! # Overview
//!
//! - [`Mode`]: Distinguishes between encryption and decryption
//! - [`InputSource`]: Standard input, a file or inline text
//! - [`OutputSink`]: Standard output or a file

use std::path::PathBuf;

use strum::Display;

/// Direction of the transform.
///
/// Displays as the noun used in diagnostics ("error during encryption").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Mode {
    /// Turn plaintext into armoured ciphertext.
    #[default]
    #[strum(to_string = "encryption")]
    Encrypt,

    /// Turn armoured ciphertext back into plaintext.
    #[strum(to_string = "decryption")]
    Decrypt,
}

impl Mode {
    /// Returns a human-readable label for the mode.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }
}

/// Where the text to transform is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Read standard input to end of stream, trailing whitespace trimmed.
    #[default]
    Stdin,

    /// Read the whole file.
    File(PathBuf),

    /// Use the text given on the command line verbatim.
    Inline(String),
}

/// Where the transform result is written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    /// Write to standard output without extra framing.
    #[default]
    Stdout,

    /// Create or truncate the file and write the result.
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_encrypt() {
        assert_eq!(Mode::default(), Mode::Encrypt);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Encrypt.to_string(), "encryption");
        assert_eq!(Mode::Decrypt.to_string(), "decryption");
        assert_eq!(Mode::Decrypt.label(), "Decrypt");
    }

    #[test]
    fn test_unset_sources_are_standard_streams() {
        assert_eq!(InputSource::default(), InputSource::Stdin);
        assert_eq!(OutputSink::default(), OutputSink::Stdout);
    }
}
