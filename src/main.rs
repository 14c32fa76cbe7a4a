// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_controller::{Controller, InputSource, OutputTarget};

mod app_controller;
mod errors;
mod file_utils;
mod rewriter;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite cue end times to the following cue's start time (default command)
    #[command(alias = "rewrite")]
    Fix(FixArgs),

    /// Generate shell completions for vttfix
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FixArgs {
    /// Input transcript file ("-" or omitted reads from stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Write the rewritten transcript to this file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the input file with the rewritten transcript
    #[arg(short, long)]
    in_place: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// vttfix - WEBVTT transcript timestamp fixer
///
/// Rewrites each cue's end time to the following cue's start time so that
/// cues run back to back. The final cue's end becomes the 00:00:00.000
/// placeholder and must be edited manually.
#[derive(Parser, Debug)]
#[command(name = "vttfix")]
#[command(version = "0.1.0")]
#[command(about = "Rewrite WEBVTT cue end times to the following cue's start time")]
#[command(long_about = "vttfix validates a WEBVTT-style transcript and replaces every cue's end
time with the start time of the cue that follows it. The final cue's end is
set to the 00:00:00.000 placeholder, which you must edit by hand afterwards.

EXAMPLES:
    vttfix transcript.vtt                   # Rewrite a file, print to stdout
    vttfix transcript.vtt -o fixed.vtt      # Write the result to another file
    vttfix -i transcript.vtt                # Rewrite the file in place
    cat transcript.vtt | vttfix             # Read the transcript from stdin
    vttfix --log-level debug transcript.vtt # Show rewrite details
    vttfix completions bash > vttfix.bash   # Generate bash completions

VALIDATION:
    The input is rejected, with a diagnostic naming the violated property,
    when timestamps and \"-->\" arrows do not pair up one-to-one, when a start
    timestamp is duplicated, or when starts are out of order. The rewritten
    text is re-validated before it is returned; nothing is silently corrected.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input transcript file ("-" or omitted reads from stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Write the rewritten transcript to this file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the input file with the rewritten transcript
    #[arg(short, long)]
    in_place: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    // Initialize the logger once with info level by default
    // The level is updated from the CLI flag inside run_fix
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vttfix", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Fix(args)) => run_fix(args),
        None => {
            // Default behavior - use top-level args so plain `vttfix FILE` works
            run_fix(FixArgs {
                input_path: cli.input_path,
                output: cli.output,
                in_place: cli.in_place,
                log_level: cli.log_level,
            })
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run_fix(options: FixArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = options.log_level {
        log::set_max_level(cmd_log_level.into());
    }

    let input = match options.input_path {
        Some(path) if path.as_os_str() != "-" => InputSource::File(path),
        _ => InputSource::Stdin,
    };

    let output = if options.in_place {
        OutputTarget::InPlace
    } else {
        match options.output {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    };

    let controller = Controller::new();
    controller.run(input, output)
}
