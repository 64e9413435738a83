//! Stubkit CLI - command-line interface for the stubkit stubbing tool
//!
//! Parses arguments, builds exactly one command through the factory, and
//! maps its outcome to the tool's exit status.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod engine;
mod utils;

use config::Config;
use engine::ExternalStubEngine;
use stubkit_core::{factory, Command, Error, OptionsDescription};
use utils::{format_duration, print_error, print_json, print_success};

#[derive(Parser)]
#[command(
    name = "stubkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stub-aware process launcher",
    long_about = "A command-line tool for launching target processes and applying behavior stubs through an external injection engine."
)]
#[command(propagate_version = true, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STUBKIT_CONFIG")]
    config: Option<PathBuf>,

    /// JSON output format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show usage information for the tool
    #[command(name = "help")]
    Help,

    /// Launch a target process
    #[command(name = "run", alias = "r")]
    Run(RunArgs),

    /// Apply a stub to a target through the configured engine
    #[command(name = "stub", alias = "s")]
    Stub(StubArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path or name of the executable to launch
    #[arg(short, long)]
    process: String,

    /// Argument string passed to the process
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    arguments: String,
}

#[derive(Args, Debug)]
struct StubArgs {
    /// Identifier of the stub target
    #[arg(short, long)]
    target: String,

    /// Stub settings file; bare names resolve against the configured settings directory
    #[arg(short, long)]
    settings: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    debug!("Stubkit CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load(cli.config.as_deref())?;
    debug!("Configuration loaded: {:?}", config);

    let json_output = cli.json;
    match run(cli, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if json_output {
                let outcome = json!({
                    "status": "failure",
                    "error": e.to_string(),
                });
                print_json(&outcome)?;
            }
            print_error(&format!("{e}"));
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Build the single command for this invocation and execute it
async fn run(cli: Cli, config: &Config) -> Result<()> {
    let (command, name): (Arc<dyn Command>, &str) = match cli.command {
        Commands::Help => (factory::help_command(&build_options_description()), "help"),
        Commands::Run(args) => (
            factory::runner_command(
                args.process,
                args.arguments,
                config.runner.launch_options(),
            )?,
            "run",
        ),
        Commands::Stub(args) => {
            let engine = ExternalStubEngine::from_config(&config.stub)?;
            let settings = args
                .settings
                .as_deref()
                .map(|name| config.resolve_settings(name))
                .transpose()?;
            (
                factory::stubber_command(args.target, settings, Arc::new(engine))?,
                "stub",
            )
        }
    };

    let started = Instant::now();
    command.execute().await?;
    let elapsed = started.elapsed();

    if cli.json {
        let outcome = json!({
            "command": name,
            "status": "success",
            "duration_ms": elapsed.as_millis() as u64,
        });
        print_json(&outcome)?;
    } else if !cli.quiet && name != "help" {
        print_success(&format!("{} completed in {}", name, format_duration(elapsed)));
    }

    Ok(())
}

/// Build the options description the help command renders
///
/// Derived from the clap definition so the usage text can never drift from
/// the parser's actual surface.
fn build_options_description() -> OptionsDescription {
    let cmd = Cli::command();
    let mut desc =
        OptionsDescription::with_caption(format!("Usage: {} <command> [options]", cmd.get_name()));

    for sub in cmd.get_subcommands() {
        let about = sub.get_about().map(ToString::to_string).unwrap_or_default();
        desc.add(sub.get_name(), about);
    }

    for arg in cmd.get_arguments() {
        let Some(long) = arg.get_long() else { continue };
        let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
        desc.add(format!("--{long}"), help);
    }

    desc
}

/// Choose the tool's exit status for a failed invocation
///
/// A non-zero child exit is mirrored; every other failure exits 1.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::ProcessExited { code }) => *code,
        _ => 1,
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_description_covers_subcommands_and_globals() {
        let desc = build_options_description();
        let names: Vec<_> = desc.iter().map(|e| e.name.as_str()).collect();

        assert!(names.contains(&"help"));
        assert!(names.contains(&"run"));
        assert!(names.contains(&"stub"));
        assert!(names.contains(&"--verbose"));
        assert!(names.contains(&"--config"));
    }

    #[test]
    fn test_exit_code_mirrors_child_exit() {
        let err = anyhow::Error::new(Error::ProcessExited { code: 7 });
        assert_eq!(exit_code_for(&err), 7);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let err = anyhow::Error::new(Error::EmptyProcessName);
        assert_eq!(exit_code_for(&err), 1);

        let err = anyhow::anyhow!("no stub engine configured");
        assert_eq!(exit_code_for(&err), 1);
    }
}
