// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// commit-gate - Conventional Commits guard for pre-execution hooks
///
/// Reads a hook payload on stdin and denies `git commit` commands whose
/// message does not follow Conventional Commits.
#[derive(Parser, Debug)]
#[command(name = "commit-gate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional Commits guard for pre-execution hooks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to hook if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for the check and types commands
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Evaluate a hook payload read from stdin (default command)
    Hook,

    /// Validate a commit message directly
    Check(CheckArgs),

    /// List the allowed commit types
    Types,

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Commit message to validate
    pub message: String,
}

impl Cli {
    /// Get the effective command (defaults to Hook).
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Hook)
    }
}
