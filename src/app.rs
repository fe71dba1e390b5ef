use std::io;
use std::process::ExitCode;

use tracing::Level;

use crate::args::Cli;
use crate::cipher::TextCipher;
use crate::config::EXIT_FAILURE;
use crate::error::Error;
use crate::{Outcome, run, ui};

pub struct App {
    cli: Cli,
}

impl App {
    /// Installs the log subscriber and captures the process arguments.
    pub fn init() -> Result<Self, Error> {
        let subscriber = tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(Level::WARN).with_file(true).with_line_number(true).finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            tracing::warn!("log subscriber already installed: {e}");
        }

        Ok(Self { cli: Cli::init()? })
    }

    pub fn execute(self) -> ExitCode {
        match run(self.cli.tokens(), &TextCipher::new(), io::stdin().lock(), io::stdout().lock()) {
            Ok(Outcome::Help) => {
                ui::show_usage();
                ExitCode::SUCCESS
            }
            Ok(Outcome::Done) => ExitCode::SUCCESS,
            Err(err) => Self::fail(&err),
        }
    }

    /// Reports `err` and returns the failure status.
    pub fn fail(err: &Error) -> ExitCode {
        ui::show_error(err);
        ExitCode::from(EXIT_FAILURE)
    }
}
