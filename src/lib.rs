//! sweettext - passphrase-based text encryption from the command line.
//!
//! One invocation is one linear pipeline:
//! - [`args`] resolves the option tokens into an [`OperationRequest`]
//! - [`processor`] reads the input, applies the [`Transform`] and writes the result
//! - [`cipher`] provides [`TextCipher`]: Argon2id, AES-256-GCM and
//!   XChaCha20-Poly1305 with base64 output
//!
//! Failures propagate as [`Error`] values; only the binary turns them into
//! diagnostics and an exit status.

pub mod app;
pub mod args;
pub mod cipher;
pub mod config;
pub mod error;
pub mod file;
pub mod processor;
pub mod secret;
pub mod types;
pub mod ui;

use std::io::{Read, Write};

pub use crate::args::{OperationRequest, Resolution, resolve};
pub use crate::cipher::{TextCipher, Transform};
pub use crate::error::{Error, Result, UsageError};
use crate::processor::Processor;

/// How a successful invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was requested; the caller prints it.
    Help,

    /// The result was delivered to its sink.
    Done,
}

/// Resolves `tokens` and, unless help was asked for, runs the request.
pub fn run<T, S, R, W>(tokens: &[S], transform: &T, stdin: R, stdout: W) -> Result<Outcome>
where
    T: Transform,
    S: AsRef<str>,
    R: Read,
    W: Write,
{
    match resolve(tokens)? {
        Resolution::Help => Ok(Outcome::Help),
        Resolution::Run(request) => {
            Processor::new(transform).run(request, stdin, stdout)?;
            Ok(Outcome::Done)
        }
    }
}
