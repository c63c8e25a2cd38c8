// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-gate - Conventional Commits guard for pre-execution hooks.
//!
//! The hook system pipes a JSON description of the shell command it is
//! about to run. When that command is a `git commit`, the commit message is
//! pulled out of the command text and checked against
//! `type(scope): description`. A non-conventional message produces a
//! single-line denial payload on stdout; everything else is allowed
//! silently.
//!
//! # Example
//!
//! ```
//! use commit_gate::hook::{evaluate, Decision, HookInput};
//!
//! let input = HookInput::from_json(
//!     r#"{"tool_name":"Bash","tool_input":{"command":"git commit -m 'added stuff'"}}"#,
//! )
//! .unwrap();
//!
//! assert!(matches!(evaluate(&input), Decision::Deny(_)));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod error;
pub mod hook;

// Re-exports for convenience
pub use error::{GateError, Result};
pub use hook::{evaluate, Decision, HookInput, HookOutput};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-gate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
