//! Show command implementation.
//!
//! `revision-plate show` prints the revision a server started now would
//! report, or the error tag it would answer with.

use std::io::Write;

use anyhow::Context;

use crate::cli::args::ShowArgs;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::revision::RevisionStore;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    config: ServerConfig,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(config: &ServerConfig, args: ShowArgs) -> Self {
        Self {
            config: config.clone().with_overrides(args.file, None),
        }
    }

    /// Get the effective configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl Command for ShowCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let store = RevisionStore::new(&self.config.revision_file);

        match store.current_revision() {
            Ok(revision) => {
                out.write_all(&revision)
                    .context("Failed to write revision")?;
                if !revision.ends_with(b"\n") {
                    out.write_all(b"\n").context("Failed to write revision")?;
                }
                Ok(CommandResult::success())
            }
            Err(e) => {
                eprintln!("{}: {}", store.path().display(), e);
                Ok(CommandResult::failure(1))
            }
        }
    }
}
