//! Serve command implementation.
//!
//! `revision-plate serve` runs the HTTP server until interrupted.

use std::io::Write;

use anyhow::Context;

use crate::cli::args::ServeArgs;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::server;

use super::dispatcher::{Command, CommandResult};

/// The serve command implementation.
pub struct ServeCommand {
    config: ServerConfig,
}

impl ServeCommand {
    /// Create a new serve command.
    pub fn new(config: &ServerConfig, args: ServeArgs) -> Self {
        Self {
            config: config.clone().with_overrides(args.file, args.bind),
        }
    }

    /// Get the effective configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl Command for ServeCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

        runtime.block_on(server::serve(&self.config, shutdown_signal()))?;

        Ok(CommandResult::success())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
