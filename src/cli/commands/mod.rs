//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod dispatcher;
pub mod serve;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
