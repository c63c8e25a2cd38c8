// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Denial payload returned to the hook system.

use crate::commit::CommitType;
use crate::error::{GateError, Result};
use serde::Serialize;

/// Hook event this program answers.
pub const HOOK_EVENT: &str = "PreToolUse";

/// Top-level response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

/// Event-specific part of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: PermissionDecision,
    pub permission_decision_reason: String,
}

/// Permission decision sent back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Deny,
}

impl HookOutput {
    /// Build the response that blocks a commit with a non-conventional message.
    pub fn deny(message: &str) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT.to_string(),
                permission_decision: PermissionDecision::Deny,
                permission_decision_reason: denial_reason(message),
            },
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(GateError::Output)
    }

    /// The human-readable explanation carried by the response.
    pub fn reason(&self) -> &str {
        &self.hook_specific_output.permission_decision_reason
    }
}

/// Build the explanation shown to the user when a message is rejected.
pub fn denial_reason(message: &str) -> String {
    let width = CommitType::all()
        .iter()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);

    let types = CommitType::all()
        .iter()
        .map(|t| format!("  {:<width$} → {}", t.as_str(), t.description(), width = width))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "❌ Invalid commit message

Your message: {message}

Required format (Conventional Commits):
  type(scope): description

Allowed types:
{types}

Valid examples:
  ✅ feat(auth): add JWT token refresh
  ✅ fix(api): handle null response
  ✅ chore(deps): upgrade ansible to 2.15

Invalid:
  ❌ Added feature (no type)
  ❌ feat:no space (missing space)"
    )
}
