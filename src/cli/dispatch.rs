// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::{CommitHeader, CommitType};
use crate::error::Result;
use console::style;

use super::args::{CheckArgs, Cli, Commands, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Hook => run_hook(),
        Commands::Check(args) => run_check(&cli, args),
        Commands::Types => run_types(&cli),
        Commands::Version => run_version(),
    }
}

/// Run the hook command against stdin/stdout.
fn run_hook() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let decision = crate::hook::run(stdin.lock(), stdout.lock())?;
    tracing::debug!("Hook decision: {:?}", decision);

    Ok(())
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let parsed = CommitHeader::parse(&args.message);

    match cli.format {
        Some(OutputFormat::Json) => print_check_json(&args.message, parsed.as_ref().ok()),
        _ => print_check_text(&args.message, parsed.as_ref().ok()),
    }

    parsed.map(|_| ())
}

fn print_check_text(message: &str, header: Option<&CommitHeader>) {
    let first_line = message.lines().next().unwrap_or("");

    match header {
        Some(header) => {
            println!("{} {}", style("✓").green().bold(), first_line);
            if header.is_breaking {
                println!("  {} breaking change", style("!").yellow().bold());
            }
        }
        None => {
            println!("{} {}", style("✗").red().bold(), first_line);
            println!(
                "  {} {}",
                style("→").dim(),
                style("Expected type(scope): description").dim()
            );
            println!(
                "  {} {}",
                style("→").dim(),
                style(format!("Types: {}", type_names().join(", "))).dim()
            );
        }
    }
}

fn print_check_json(message: &str, header: Option<&CommitHeader>) {
    let json = serde_json::json!({
        "valid": header.is_some(),
        "message": message,
        "type": header.map(|h| h.commit_type.as_str()),
        "scope": header.and_then(|h| h.scope.as_deref()),
        "breaking": header.map(|h| h.is_breaking).unwrap_or(false),
        "description": header.map(|h| h.description.as_str()),
    });

    println!("{}", json);
}

/// Run the types command.
fn run_types(cli: &Cli) -> Result<()> {
    match cli.format {
        Some(OutputFormat::Json) => {
            let json = CommitType::all()
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "type": t.as_str(),
                        "description": t.description(),
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::Value::Array(json));
        }
        _ => {
            for commit_type in CommitType::all() {
                println!(
                    "{:<8} {}",
                    style(commit_type.as_str()).cyan(),
                    commit_type.description()
                );
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commit-gate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

fn type_names() -> Vec<&'static str> {
    CommitType::all().iter().map(CommitType::as_str).collect()
}
