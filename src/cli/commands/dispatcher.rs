//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ServerConfig};
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing regular output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ServerConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher, loading the config file named on the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create a dispatcher with an already loaded config.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Get the base configuration before per-command overrides.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Serve(args)) => {
                let cmd = super::serve::ServeCommand::new(&self.config, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&self.config, args.clone());
                cmd.execute(out)
            }
            None => {
                // Default to serve with the top-level flags
                let cmd = super::serve::ServeCommand::new(&self.config, cli.serve.clone());
                cmd.execute(out)
            }
        }
    }
}
