//! Command line resolution.
//!
//! Tokens have the shape `<markers><letter>[...][:<data>]`, for example
//! `-p:secret`, `/d` or `--help`. Leading `-` and `/` are stripped, the first
//! remaining character selects the option and everything after the first `:`
//! is its data.
//!
//! Conflicts are detected the moment a field is assigned, so the diagnostic
//! always names the first offending token.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{APP_NAME, DATA_DELIMITER, OPTION_MARKERS};
use crate::error::UsageError;
use crate::secret::Secret;
use crate::types::{InputSource, Mode, OutputSink};

/// Raw process arguments.
///
/// The option grammar is not clap's, so every token is captured verbatim and
/// handed to [`resolve`].
#[derive(Parser, Debug)]
#[command(name = "sweettext", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<String>,
}

impl Cli {
    pub fn init() -> Result<Self, UsageError> {
        Self::capture(std::env::args_os())
    }

    /// Captures `args`, program name first.
    ///
    /// An escape is placed ahead of the user's tokens, so clap treats all of
    /// them as values and a literal `--` reaches [`resolve`] unchanged.
    pub fn capture<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from(APP_NAME));
        let escaped = [program, OsString::from("--")].into_iter().chain(args);

        Self::try_parse_from(escaped).map_err(|e| UsageError::CommandLine(e.to_string().trim_end().to_owned()))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A single option token split into its key and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionToken<'a> {
    pub key: Option<char>,
    pub data: Option<&'a str>,
}

impl<'a> OptionToken<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let body = raw.trim_start_matches(OPTION_MARKERS);
        let (name, data) = match body.split_once(DATA_DELIMITER) {
            Some((name, data)) => (name, Some(data)),
            None => (body, None),
        };

        Self { key: name.chars().next(), data }
    }
}

/// The validated intent for one invocation.
#[derive(Debug)]
pub struct OperationRequest {
    mode: Mode,
    passphrase: Secret,
    input: InputSource,
    output: OutputSink,
}

impl OperationRequest {
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn passphrase(&self) -> &Secret {
        &self.passphrase
    }

    #[inline]
    pub fn input(&self) -> &InputSource {
        &self.input
    }

    #[inline]
    pub fn output(&self) -> &OutputSink {
        &self.output
    }
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Resolution {
    /// Print the usage text and exit successfully.
    Help,

    /// Run the transform.
    Run(OperationRequest),
}

/// Accumulates fields while tokens are scanned.
///
/// Each setter fails if its field (or a field it excludes) is already taken.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    mode: Option<Mode>,
    passphrase: Option<Secret>,
    input: Option<InputSource>,
    output: Option<OutputSink>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&mut self, mode: Mode) -> Result<(), UsageError> {
        if self.mode.is_some() {
            return Err(UsageError::DuplicateMode);
        }
        self.mode = Some(mode);
        Ok(())
    }

    /// Sets the passphrase. Empty data counts as not supplied and leaves the
    /// field free for a later `-p`.
    pub fn passphrase(&mut self, passphrase: &str) -> Result<(), UsageError> {
        if self.passphrase.is_some() {
            return Err(UsageError::DuplicatePassphrase);
        }
        if !passphrase.is_empty() {
            self.passphrase = Some(Secret::new(passphrase));
        }
        Ok(())
    }

    pub fn input_file(&mut self, path: PathBuf) -> Result<(), UsageError> {
        match self.input {
            Some(InputSource::File(_)) => Err(UsageError::DuplicateInputFile),
            Some(_) => Err(UsageError::ConflictingInput),
            None => {
                self.input = Some(InputSource::File(path));
                Ok(())
            }
        }
    }

    pub fn input_text(&mut self, text: String) -> Result<(), UsageError> {
        match self.input {
            Some(InputSource::Inline(_)) => Err(UsageError::DuplicateInputString),
            Some(_) => Err(UsageError::ConflictingInput),
            None => {
                self.input = Some(InputSource::Inline(text));
                Ok(())
            }
        }
    }

    pub fn output_file(&mut self, path: PathBuf) -> Result<(), UsageError> {
        if self.output.is_some() {
            return Err(UsageError::DuplicateOutputFile);
        }
        self.output = Some(OutputSink::File(path));
        Ok(())
    }

    pub fn finish(self) -> Result<OperationRequest, UsageError> {
        let passphrase = self.passphrase.ok_or(UsageError::MissingPassphrase)?;

        Ok(OperationRequest { mode: self.mode.unwrap_or_default(), passphrase, input: self.input.unwrap_or_default(), output: self.output.unwrap_or_default() })
    }
}

/// Resolves raw tokens into a [`Resolution`].
///
/// An empty token list asks for help. A help token stops scanning at once;
/// any earlier conflict has already been reported by then.
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Resolution, UsageError> {
    if tokens.is_empty() {
        return Ok(Resolution::Help);
    }

    let mut builder = RequestBuilder::new();

    for raw in tokens {
        let raw = raw.as_ref();
        let token = OptionToken::parse(raw);

        match token.key {
            Some('h' | '?') => return Ok(Resolution::Help),
            Some('e') => builder.mode(Mode::Encrypt)?,
            Some('d') => builder.mode(Mode::Decrypt)?,
            Some('p') => builder.passphrase(token.data.unwrap_or_default())?,
            Some(key @ 'i') => builder.input_file(required_path(key, token.data)?)?,
            Some(key @ 's') => builder.input_text(required_text(key, token.data)?)?,
            Some(key @ 'o') => builder.output_file(required_path(key, token.data)?)?,
            _ => return Err(UsageError::Unrecognized(raw.to_owned())),
        }
    }

    builder.finish().map(Resolution::Run)
}

fn required_path(key: char, data: Option<&str>) -> Result<PathBuf, UsageError> {
    match data {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(UsageError::MissingValue(key)),
    }
}

/// Inline text may be empty; only a missing `:` is an error.
fn required_text(key: char, data: Option<&str>) -> Result<String, UsageError> {
    data.map(str::to_owned).ok_or(UsageError::MissingValue(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tokens: &[&str]) -> OperationRequest {
        match resolve(tokens).unwrap() {
            Resolution::Run(request) => request,
            Resolution::Help => panic!("expected a request, got help"),
        }
    }

    fn failure(tokens: &[&str]) -> UsageError {
        resolve(tokens).unwrap_err()
    }

    #[test]
    fn test_option_token_parse() {
        assert_eq!(OptionToken::parse("-p:secret"), OptionToken { key: Some('p'), data: Some("secret") });
        assert_eq!(OptionToken::parse("/d"), OptionToken { key: Some('d'), data: None });
        assert_eq!(OptionToken::parse("--help"), OptionToken { key: Some('h'), data: None });
        assert_eq!(OptionToken::parse("-s:a:b:c"), OptionToken { key: Some('s'), data: Some("a:b:c") });
        assert_eq!(OptionToken::parse("-pass:x"), OptionToken { key: Some('p'), data: Some("x") });
        assert_eq!(OptionToken::parse("-p:"), OptionToken { key: Some('p'), data: Some("") });
        assert_eq!(OptionToken::parse("-"), OptionToken { key: None, data: None });
        assert_eq!(OptionToken::parse("-:x"), OptionToken { key: None, data: Some("x") });
    }

    #[test]
    fn test_empty_arguments_show_help() {
        let empty: [&str; 0] = [];
        assert!(matches!(resolve(&empty).unwrap(), Resolution::Help));
    }

    #[test]
    fn test_help_tokens() {
        for token in ["-h", "/?", "-?", "--help", "h"] {
            assert!(matches!(resolve(&["-p:secret", token]).unwrap(), Resolution::Help), "{token}");
        }
    }

    #[test]
    fn test_help_stops_scanning() {
        assert!(matches!(resolve(&["-h", "-z"]).unwrap(), Resolution::Help));
    }

    #[test]
    fn test_earlier_conflict_beats_help() {
        assert_eq!(failure(&["-e", "-d", "-h"]), UsageError::DuplicateMode);
    }

    #[test]
    fn test_defaults() {
        let req = request(&["-p:secret"]);
        assert_eq!(req.mode(), Mode::Encrypt);
        assert_eq!(req.passphrase().expose_secret(), "secret");
        assert_eq!(req.input(), &InputSource::Stdin);
        assert_eq!(req.output(), &OutputSink::Stdout);
    }

    #[test]
    fn test_full_request() {
        let req = request(&["/d", "/p:pw", "-i:in.txt", "-o:out/result.txt"]);
        assert_eq!(req.mode(), Mode::Decrypt);
        assert_eq!(req.input(), &InputSource::File(PathBuf::from("in.txt")));
        assert_eq!(req.output(), &OutputSink::File(PathBuf::from("out/result.txt")));
    }

    #[test]
    fn test_inline_text_keeps_colons() {
        let req = request(&["-p:k", "-s:hello: world:"]);
        assert_eq!(req.input(), &InputSource::Inline("hello: world:".to_owned()));
    }

    #[test]
    fn test_passphrase_keeps_colons() {
        let req = request(&["-p:a:b", "-s:x"]);
        assert_eq!(req.passphrase().expose_secret(), "a:b");
    }

    #[test]
    fn test_empty_inline_text_is_explicit_input() {
        let req = request(&["-p:k", "-s:"]);
        assert_eq!(req.input(), &InputSource::Inline(String::new()));
    }

    #[test]
    fn test_both_modes_rejected() {
        assert_eq!(failure(&["-e", "-d", "-p:x"]), UsageError::DuplicateMode);
        assert_eq!(failure(&["-d", "-p:x", "-e"]), UsageError::DuplicateMode);
        assert_eq!(failure(&["-e", "-e", "-p:x"]), UsageError::DuplicateMode);
    }

    #[test]
    fn test_both_input_methods_rejected() {
        assert_eq!(failure(&["-p:x", "-i:a.txt", "-s:text"]), UsageError::ConflictingInput);
        assert_eq!(failure(&["-p:x", "-s:text", "-i:a.txt"]), UsageError::ConflictingInput);
        assert_eq!(failure(&["-s:", "-i:a.txt", "-p:x"]), UsageError::ConflictingInput);
    }

    #[test]
    fn test_duplicate_inputs_rejected() {
        assert_eq!(failure(&["-p:x", "-i:a", "-i:b"]), UsageError::DuplicateInputFile);
        assert_eq!(failure(&["-p:x", "-s:a", "-s:b"]), UsageError::DuplicateInputString);
    }

    #[test]
    fn test_duplicate_output_rejected() {
        assert_eq!(failure(&["-p:x", "-o:a", "-o:b"]), UsageError::DuplicateOutputFile);
    }

    #[test]
    fn test_duplicate_passphrase_rejected() {
        assert_eq!(failure(&["-p:x", "-p:y"]), UsageError::DuplicatePassphrase);
    }

    #[test]
    fn test_empty_passphrase_is_not_supplied() {
        let req = request(&["-p:", "-p:second"]);
        assert_eq!(req.passphrase().expose_secret(), "second");
        assert_eq!(failure(&["-p:", "-e"]), UsageError::MissingPassphrase);
        assert_eq!(failure(&["-p", "-e"]), UsageError::MissingPassphrase);
    }

    #[test]
    fn test_missing_passphrase() {
        assert_eq!(failure(&["-e"]), UsageError::MissingPassphrase);
        assert_eq!(failure(&["-d", "-s:abc", "-o:out.txt"]), UsageError::MissingPassphrase);
        assert_eq!(failure(&["-e"]).to_string(), "passphrase is always required");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(failure(&["-p:x", "-i"]), UsageError::MissingValue('i'));
        assert_eq!(failure(&["-p:x", "-i:"]), UsageError::MissingValue('i'));
        assert_eq!(failure(&["-p:x", "-o:"]), UsageError::MissingValue('o'));
        assert_eq!(failure(&["-p:x", "-s"]), UsageError::MissingValue('s'));
        assert_eq!(failure(&["-p:x", "-s"]).to_string(), "option -s requires a value");
    }

    #[test]
    fn test_unrecognized_option_names_token() {
        let err = failure(&["-p:x", "-z"]);
        assert_eq!(err, UsageError::Unrecognized("-z".to_owned()));
        assert_eq!(err.to_string(), "unrecognized option: -z");
        assert_eq!(failure(&["-E"]), UsageError::Unrecognized("-E".to_owned()));
        assert_eq!(failure(&[""]), UsageError::Unrecognized(String::new()));
    }

    #[test]
    fn test_first_conflict_wins() {
        assert_eq!(failure(&["-z", "-e", "-e"]), UsageError::Unrecognized("-z".to_owned()));
        assert_eq!(failure(&["-o:a", "-o:b", "-e", "-d"]), UsageError::DuplicateOutputFile);
        assert_eq!(failure(&["-e", "-d", "-o:a", "-o:b"]), UsageError::DuplicateMode);
    }

    #[test]
    fn test_cli_captures_hyphen_tokens() {
        let cli = Cli::capture(["sweettext", "-d", "-p:secret", "/s:text"]).unwrap();
        assert_eq!(cli.tokens(), ["-d", "-p:secret", "/s:text"]);
    }

    #[test]
    fn test_cli_without_tokens() {
        let cli = Cli::capture(["sweettext"]).unwrap();
        assert!(cli.tokens().is_empty());
    }

    #[test]
    fn test_cli_keeps_double_dash() {
        let cli = Cli::capture(["sweettext", "--"]).unwrap();
        assert_eq!(cli.tokens(), ["--"]);
        assert_eq!(resolve(cli.tokens()).unwrap_err(), UsageError::Unrecognized("--".to_owned()));

        let cli = Cli::capture(["sweettext", "--", "-p:a", "--"]).unwrap();
        assert_eq!(cli.tokens(), ["--", "-p:a", "--"]);
    }

    #[test]
    fn test_cli_keeps_help_like_tokens() {
        let cli = Cli::capture(["sweettext", "--help", "-V", "--version"]).unwrap();
        assert_eq!(cli.tokens(), ["--help", "-V", "--version"]);
    }
}
