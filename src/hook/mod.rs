// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pre-execution hook handling.
//!
//! The hook system sends a JSON description of the command about to run.
//! If it is a `git commit` whose message breaks Conventional Commits, a
//! denial payload is written back; otherwise nothing is written.

mod extract;
mod gate;
mod input;
mod output;

pub use extract::{extract_message, ExtractedMessage, MessageSource};
pub use gate::{evaluate, run, AllowReason, Decision};
pub use input::{HookInput, ToolInput, SHELL_TOOL};
pub use output::{denial_reason, HookOutput, HookSpecificOutput, PermissionDecision, HOOK_EVENT};
