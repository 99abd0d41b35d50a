//! Run configuration and command-line parsing.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::scheduler::FcfsWaitMode;

/// Usage text printed by `--help`.
pub const USAGE: &str = "
Usage: cpu-schedule <path> [options]

Options must follow the input path.

Options:
    --legacy-fcfs            Reproduce the historical FCFS wait computation.
    --format <format>        Output format, text or json [default: text].

    --verbose                Display progress information.
    --debug                  Display per-policy details.
    --help                   Display this message.
";

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banner, Gantt chart, and table per policy.
    #[default]
    Text,
    /// One pretty-printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::new(
                ErrorKind::InvalidArguments,
                format!("unknown output format {value:?}"),
            )),
        }
    }
}

/// Options that change what a run computes or prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// FCFS wait-time mode.
    pub fcfs_wait: FcfsWaitMode,
    /// Output format.
    pub format: OutputFormat,
}

impl RunConfig {
    /// Sets the FCFS wait-time mode.
    pub fn with_fcfs_wait(mut self, fcfs_wait: FcfsWaitMode) -> Self {
        self.fcfs_wait = fcfs_wait;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Log verbosity requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    /// Progress information.
    Verbose,
    /// Everything, including per-policy details.
    Debug,
}

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print usage and exit.
    Help,
    /// Schedule the processes in `path`.
    Run {
        /// Input source.
        path: PathBuf,
        /// Run options.
        config: RunConfig,
        /// Log verbosity.
        verbosity: Verbosity,
    },
}

impl Command {
    /// Parses the process arguments, program name first.
    ///
    /// Options must follow the input path.
    pub fn parse<I: Iterator<Item = String>>(args: I) -> Result<Command> {
        let arguments = arguments::parse(args)
            .map_err(|error| Error::new(ErrorKind::InvalidArguments, error.to_string()))?;

        if arguments.get::<bool>("help").unwrap_or(false) {
            return Ok(Command::Help);
        }

        let path = match arguments.orphans.as_slice() {
            [path] => PathBuf::from(path),
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidArguments,
                    "must give exactly one scheduling file to process (options go after the path)",
                ))
            }
        };

        let mut config = RunConfig::default();
        if arguments.get::<bool>("legacy-fcfs").unwrap_or(false) {
            config = config.with_fcfs_wait(FcfsWaitMode::Legacy);
        }
        if let Some(format) = arguments.get::<String>("format") {
            config = config.with_format(format.parse()?);
        }

        let verbosity = if arguments.get::<bool>("debug").unwrap_or(false) {
            Verbosity::Debug
        } else if arguments.get::<bool>("verbose").unwrap_or(false) {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        };

        Ok(Command::Run {
            path,
            config,
            verbosity,
        })
    }
}
