//! File Operations
//!
//! This module wraps the filesystem side of one invocation: checking that an
//! input file exists, reading it as UTF-8 text, checking that an output
//! file's directory exists and writing the result.
//!
//! ## Resource Handling
//!
//! Handles are owned by the function that opens them and dropped on every
//! return path, including early returns through `?`. Nothing is held open
//! across the transform.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Byte-order mark some editors put at the start of UTF-8 text files.
const UTF8_BOM: char = '\u{feff}';

/// A file named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    /// Create a new File instance with the specified path.
    ///
    /// No filesystem access happens here; use the `validate_*` methods before
    /// reading or writing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks that the file can be used as input.
    ///
    /// # Errors
    ///
    /// - [`Error::InputNotFound`] when nothing exists at the path
    /// - [`Error::InvalidInput`] when the path is not a regular file
    pub fn validate_input(&self) -> Result<()> {
        let meta = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(Error::InputNotFound(self.path.clone())),
            Err(source) => return Err(Error::InvalidInput { path: self.path.clone(), source }),
        };

        if !meta.is_file() {
            return Err(Error::InvalidInput { path: self.path.clone(), source: io::Error::other("not a regular file") });
        }

        Ok(())
    }

    /// Returns the directory the file will be created in.
    ///
    /// A bare file name lives in the current directory.
    pub fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Checks that the file's directory exists.
    ///
    /// # Errors
    ///
    /// [`Error::OutputDirMissing`] when the parent is missing or not a
    /// directory.
    pub fn validate_output(&self) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.is_dir() {
            return Err(Error::OutputDirMissing(dir.to_path_buf()));
        }

        Ok(())
    }

    /// Reads the whole file as UTF-8, dropping a leading byte-order mark.
    ///
    /// The content is otherwise returned untouched; no whitespace is trimmed.
    pub fn read_text(&self) -> Result<String> {
        let text = fs::read_to_string(&self.path).map_err(|source| Error::InvalidInput { path: self.path.clone(), source })?;

        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_owned(),
            None => text,
        })
    }

    /// Creates or truncates the file and writes `text` to it.
    pub fn write_text(&self, text: &str) -> Result<()> {
        let write = || -> io::Result<()> {
            let mut writer = BufWriter::new(fs::File::create(&self.path)?);
            writer.write_all(text.as_bytes())?;
            writer.flush()
        };

        write().map_err(|source| Error::WriteOutput { path: self.path.clone(), source })
    }
}
