//! Console help for li3 commands and class API documentation.
//!
//! The library side is [`help::Help`], which renders from a
//! [`registry::CommandRegistry`] and any [`metadata::Reflector`]. The `li3`
//! binary wires both to configuration and the terminal through [`run`].

pub mod config;
pub mod error;
pub mod help;
pub mod metadata;
pub mod naming;
pub mod registry;
pub mod response;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{ColorChoice, ConsoleConfig};
use crate::help::{ApiTarget, Help, UsageFormatter};
use crate::response::ConsoleResponse;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LI3_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "li3",
    version,
    about = "Console help for li3 commands and class APIs",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Disable colorized output.
    #[arg(long, global = true)]
    pub plain: bool,

    /// Read configuration from FILE instead of the default location.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available commands, or show usage for one command
    Help {
        /// Command name (e.g. `test`) or fully-qualified class
        command: Option<String>,
    },
    /// Show documentation for a class, its methods or its properties
    Api {
        /// Dotted class path, e.g. `lithium.util.Inflector` or `lithium.core.Libraries::add`
        class: String,
        /// Document methods or properties instead of the class
        #[arg(value_enum)]
        target: Option<ApiTarget>,
        /// Restrict output to one member
        name: Option<String>,
    },
}

/// Entry point for the `li3` binary.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => ConsoleConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ConsoleConfig::load().context("loading console config")?,
    };
    let (registry, catalog) = config
        .environment()
        .context("registering configured commands")?;

    let styled = !cli.plain && config.color.enabled(std::io::stdout().is_terminal());
    if styled && config.color == ColorChoice::Always {
        colored::control::set_override(true);
    }

    let formatter = UsageFormatter::new(config.script.clone(), config.indent);
    let mut help =
        Help::new(&registry, &catalog, ConsoleResponse::new(styled)).with_formatter(formatter);

    match cli.command {
        None => {
            help.run(None);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Help { command }) => {
            if help.run(command.as_deref()) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Some(Commands::Api {
            class,
            target,
            name,
        }) => {
            help.api(&class, target, name.as_deref());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
