//! Error types surfaced to the user.
//!
//! Every variant is terminal: the application shell prints it and exits with
//! [`EXIT_FAILURE`](crate::config::EXIT_FAILURE).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Mode;

/// Problems found while resolving the command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("only one operation can be specified")]
    DuplicateMode,

    #[error("only one passphrase can be specified")]
    DuplicatePassphrase,

    #[error("only one input file can be specified")]
    DuplicateInputFile,

    #[error("only one input string can be specified")]
    DuplicateInputString,

    #[error("only one input method can be specified, -i cannot be used with -s")]
    ConflictingInput,

    #[error("only one output file can be specified")]
    DuplicateOutputFile,

    #[error("option -{0} requires a value")]
    MissingValue(char),

    #[error("unrecognized option: {0}")]
    Unrecognized(String),

    #[error("passphrase is always required")]
    MissingPassphrase,

    #[error("invalid command line: {0}")]
    CommandLine(String),
}

/// Top-level error for one invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("invalid input file: {}", .path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("could not read from STDIN")]
    Stdin(#[source] io::Error),

    #[error("error writing output file: {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing to STDOUT")]
    WriteStdout(#[source] io::Error),

    #[error("error during {mode}")]
    Transform {
        mode: Mode,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl Error {
    /// Wraps a transform failure, keeping its cause chain.
    pub fn transform(mode: Mode, err: anyhow::Error) -> Self {
        Self::Transform { mode, source: err.into() }
    }
}

/// Result type for the resolver and orchestrator.
pub type Result<T> = std::result::Result<T, Error>;
