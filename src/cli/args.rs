//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// revision-plate - Serve a build revision file over HTTP.
#[derive(Debug, Parser)]
#[command(name = "revision-plate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true, env = "REVISION_PLATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Serve options, used only when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the revision over HTTP (default if no command specified)
    Serve(ServeArgs),

    /// Print the revision the server would report
    Show(ShowArgs),
}

/// Arguments for the `serve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeArgs {
    /// Revision file to serve (default: REVISION)
    #[arg(short, long, env = "REVISION_PLATE_FILE", value_parser = revision_file_parser())]
    pub file: Option<PathBuf>,

    /// Address to listen on (default: 127.0.0.1:8080)
    #[arg(short, long, env = "REVISION_PLATE_BIND")]
    pub bind: Option<SocketAddr>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Revision file to read (default: REVISION)
    #[arg(short, long, env = "REVISION_PLATE_FILE", value_parser = revision_file_parser())]
    pub file: Option<PathBuf>,
}

/// Accepts empty paths, which the revision store maps to the default file.
fn revision_file_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_takes_serve_flags() {
        let cli = Cli::parse_from([
            "revision-plate",
            "--file",
            "site-sha",
            "--bind",
            "0.0.0.0:9000",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.serve.file, Some(PathBuf::from("site-sha")));
        assert_eq!(cli.serve.bind, Some("0.0.0.0:9000".parse().unwrap()));
    }

    #[test]
    fn global_config_before_subcommand() {
        let cli = Cli::parse_from(["revision-plate", "--config", "revision-plate.yml", "show"]);
        assert_eq!(cli.config, Some(PathBuf::from("revision-plate.yml")));
        assert!(matches!(cli.command, Some(Commands::Show(_))));
    }

    #[test]
    fn empty_file_flag_is_accepted() {
        let cli = Cli::parse_from(["revision-plate", "serve", "--file", ""]);
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.file, Some(PathBuf::new())),
            other => panic!("Expected Serve command, got {:?}", other),
        }

        let cli = Cli::parse_from(["revision-plate", "show", "--file", ""]);
        match cli.command {
            Some(Commands::Show(args)) => assert_eq!(args.file, Some(PathBuf::new())),
            other => panic!("Expected Show command, got {:?}", other),
        }

        let cli = Cli::parse_from(["revision-plate", "--file", ""]);
        assert_eq!(cli.serve.file, Some(PathBuf::new()));
    }
}
