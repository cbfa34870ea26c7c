//! typeseq CLI - Main entry point
//!
//! Runs the conformance table and reports the totals. The exit code is
//! non-zero when any check failed.

use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use typeseq_cli::config::{ColorMode, HarnessConfig};
use typeseq_cli::error::CliError;
use typeseq_cli::harness::Harness;
use typeseq_cli::output;
use typeseq_cli::suite::Suite;

/// typeseq - conformance harness for compile-time sequence algorithms
#[derive(Parser, Debug)]
#[command(name = "typeseq")]
#[command(author, version, about = "Conformance harness for typeseq", long_about = None)]
struct Cli {
    /// Path to config file (default: typeseq.toml when present)
    #[arg(short, long, global = true, value_name = "PATH", env = "TYPESEQ_CONFIG")]
    config: Option<PathBuf>,

    /// Only report failing checks
    #[arg(short, long, global = true, env = "TYPESEQ_QUIET")]
    quiet: bool,

    /// Do not print the checked expression after OK
    #[arg(long, global = true)]
    no_expression: bool,

    /// Print source paths in full
    #[arg(long, global = true, env = "TYPESEQ_FULL_PATH")]
    full_path: bool,

    /// When to use colours
    #[arg(long, global = true, value_enum, env = "TYPESEQ_COLOR")]
    color: Option<ColorMode>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the conformance suites (default)
    Run {
        /// Suites to run (default: all)
        #[arg(short, long, value_enum)]
        suite: Vec<Suite>,
    },

    /// List the available suites
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CliError::ChecksFailed { .. }) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_deref())?;
    if cli.quiet {
        config.print_ok = false;
    }
    if cli.no_expression {
        config.print_expression = false;
    }
    if cli.full_path {
        config.full_path = true;
    }
    if let Some(color) = cli.color {
        config.color = color;
    }
    config.color.apply();
    tracing::debug!(?config, "effective harness config");

    match cli.command.unwrap_or(Command::Run { suite: Vec::new() }) {
        Command::Run { suite } => run_suites(config, &suite),
        Command::List => {
            list_suites();
            Ok(())
        }
    }
}

/// Load configuration with fallback to the defaults
fn load_config(custom_path: Option<&Path>) -> Result<HarnessConfig, CliError> {
    match custom_path {
        Some(path) => HarnessConfig::load_from(path).map_err(Into::into),
        None => HarnessConfig::load().map_err(Into::into),
    }
}

fn run_suites(config: HarnessConfig, selected: &[Suite]) -> Result<(), CliError> {
    let suites = if selected.is_empty() {
        Suite::ALL
    } else {
        selected
    };
    tracing::info!(suites = suites.len(), "starting conformance run");

    let mut harness = Harness::new(io::stdout().lock(), config);
    for suite in suites {
        suite.run(&mut harness)?;
    }

    let report = harness.report()?;
    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::ChecksFailed {
            failed: report.failed,
            total: report.total,
        })
    }
}

fn list_suites() {
    for suite in Suite::ALL {
        println!(
            "{:<10} {}",
            output::heading(suite.as_str()),
            output::muted(suite.description())
        );
    }
}
