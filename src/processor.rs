//! Runs one resolved request: acquire the input text, apply the transform,
//! deliver the result.

use std::io::{Read, Write};

use tracing::{debug, instrument};

use crate::args::OperationRequest;
use crate::cipher::Transform;
use crate::error::{Error, Result};
use crate::file::File;
use crate::types::{InputSource, Mode, OutputSink};

pub struct Processor<T> {
    transform: T,
}

impl<T: Transform> Processor<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    /// Executes `request` against the given standard streams.
    ///
    /// Files named in the request are checked before anything is read, so a
    /// bad output directory is reported without running the key derivation.
    #[instrument(skip_all, fields(mode = request.mode().label()))]
    pub fn run<R: Read, W: Write>(&self, request: OperationRequest, stdin: R, stdout: W) -> Result<()> {
        let input = match request.input() {
            InputSource::File(path) => {
                let file = File::new(path);
                file.validate_input()?;
                Some(file)
            }
            _ => None,
        };

        let output = match request.output() {
            OutputSink::File(path) => {
                let file = File::new(path);
                file.validate_output()?;
                Some(file)
            }
            OutputSink::Stdout => None,
        };

        let buffer = match (&input, request.input()) {
            (Some(file), _) => file.read_text()?,
            (None, InputSource::Inline(text)) => text.clone(),
            (None, _) => read_stdin(stdin)?,
        };
        debug!(bytes = buffer.len(), "input acquired");

        let result = self.apply(&request, &buffer)?;
        debug!(bytes = result.len(), "transform complete");

        match output {
            Some(file) => file.write_text(&result),
            None => write_stdout(stdout, &result),
        }
    }

    fn apply(&self, request: &OperationRequest, buffer: &str) -> Result<String> {
        let (mode, passphrase) = (request.mode(), request.passphrase());
        let result = match mode {
            Mode::Encrypt => self.transform.encrypt(buffer, passphrase),
            Mode::Decrypt => self.transform.decrypt(buffer, passphrase),
        };

        result.map_err(|e| Error::transform(mode, e))
    }
}

/// Reads standard input to end of stream and strips trailing whitespace.
fn read_stdin<R: Read>(mut stdin: R) -> Result<String> {
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer).map_err(Error::Stdin)?;

    buffer.truncate(buffer.trim_end().len());
    Ok(buffer)
}

fn write_stdout<W: Write>(mut stdout: W, result: &str) -> Result<()> {
    stdout.write_all(result.as_bytes()).and_then(|()| stdout.flush()).map_err(Error::WriteStdout)
}
