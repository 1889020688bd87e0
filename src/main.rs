// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, warn};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use bisplit::app_config::{Config, LogLevel};
use bisplit::app_controller::Controller;
use bisplit::cli_args;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for bisplit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// bisplit - split bilingual files into monolingual XML
///
/// Reads each bilingual file and writes, for every asset in it, one XML file
/// with the source-language segments and one with the target-language segments.
#[derive(Parser, Debug)]
#[command(name = "bisplit")]
#[command(version)]
#[command(about = "Split bilingual translation files into monolingual XML files")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "bisplit reads bilingual translation files and writes two monolingual XML files per asset.

EXAMPLES:
    bisplit job.json                      # Writes 'job.json-<asset> (<lang>).xml' files
    bisplit 'jobs/*.json'                 # Glob patterns are expanded by bisplit itself
    bisplit -o out -v job.json            # Write into ./out with debug logging
    bisplit completions bash > bisplit.bash

OUTPUT:
    For each asset, '<input>-<original> (<source-lang>).xml' and
    '<input>-<original> (<target-lang>).xml'. Deleted text and
    non-segment content are left out. Inline tags become <tag/>.

Unknown options are reported and ignored. A file that fails is reported and
the remaining files are still processed.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input files or glob patterns
    #[arg(value_name = "FILES")]
    patterns: Vec<String>,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "bisplit.json")]
    config_path: PathBuf,

    /// Directory to write output files to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour code for log level
    fn colour_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::colour_for_level(record.level()),
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

fn main() -> Result<ExitCode> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let raw_args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let (args, ignored) = cli_args::filter_unknown_options(&CommandLineOptions::command(), raw_args);
    for option in &ignored {
        warn!("Unknown option {} ignored.", option);
    }

    let cli = CommandLineOptions::parse_from(args);

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "bisplit", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    run_split(cli)
}

fn run_split(options: CommandLineOptions) -> Result<ExitCode> {
    let mut config = Config::load_or_default(&options.config_path)
        .context("Failed to load configuration")?;

    // Command line takes precedence over the config file
    if let Some(output_dir) = options.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    } else if options.verbose {
        config.log_level = LogLevel::Debug;
    }

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Configuration: {:?}", config);

    if options.patterns.is_empty() {
        CommandLineOptions::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    let summary = controller.run(&options.patterns);
    log::logger().flush();

    Ok(if summary.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
