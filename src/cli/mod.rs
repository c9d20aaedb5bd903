//! Command-line interface for revision-plate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ServeArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
