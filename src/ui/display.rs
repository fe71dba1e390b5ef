//! Usage text and diagnostics. Everything here goes to the error stream so
//! standard output only ever carries the transform result.

use std::error::Error as StdError;

use console::style;

use crate::config::APP_NAME;

/// Builds the usage text.
pub fn usage() -> String {
    format!(
        r#" {APP_NAME} v{version} - passphrase text encryption

 Encrypts or decrypts text passed in via STDIN, read from a text file or
 given on the command line, using the passphrase passed on the command line.
 Ciphertext is base64 encoded.

  Use: {APP_NAME} -p:passphrase [-e|-d] [-i:in.txt|-s:"Some plain text"] [-o:out.txt]

  -e Encrypt (default)
  -d Decrypt
  -p Passphrase
  -i Input text file name
  -s Input string - careful, the shell may alter quoting and special characters
  -o Output text file name
     If -i and -s are omitted, STDIN is used
     If -o is omitted, STDOUT is used
  Options may start with - or /. The input text is treated as UTF-8."#,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Prints the usage text to the error stream.
pub fn show_usage() {
    eprintln!("{}", style(usage()).for_stderr().bold());
}

/// Lines reported for a failure: nested causes first, then the error itself.
///
/// A transform failure thus reads "<what went wrong>", "<why>", "error during
/// decryption", matching the order users scan from top to bottom.
pub fn diagnostics(err: &(dyn StdError + 'static)) -> Vec<String> {
    let mut lines: Vec<String> = std::iter::successors(err.source(), |&e| e.source()).map(ToString::to_string).collect();
    lines.push(err.to_string());
    lines
}

/// Prints the diagnostics for `err` to the error stream.
pub fn show_error(err: &(dyn StdError + 'static)) {
    for line in diagnostics(err) {
        eprintln!("{}", style(line).for_stderr().red());
    }
}
