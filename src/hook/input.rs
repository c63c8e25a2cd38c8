// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook payload read from stdin.

use crate::error::{InputError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

/// Tool name the caller uses for shell command execution.
pub const SHELL_TOOL: &str = "Bash";

/// The invocation request sent by the hook system.
///
/// Unknown fields are ignored. A field of the wrong type is treated the same
/// as an absent one, so only undecodable JSON is an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool about to run.
    #[serde(default, deserialize_with = "string_or_none")]
    pub tool_name: Option<String>,
    /// Arguments of the tool call.
    #[serde(default, deserialize_with = "tool_input_or_none")]
    pub tool_input: Option<ToolInput>,
}

/// Arguments of a tool call. Only `command` is inspected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// Shell command text.
    #[serde(default, deserialize_with = "string_or_none")]
    pub command: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn tool_input_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<ToolInput>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl HookInput {
    /// Parse a payload from a JSON string.
    ///
    /// Valid JSON that is not an object yields an empty request.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(InputError::MalformedInput)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// Parse a payload from a reader (usually stdin).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json(&content)
    }

    /// Name of the tool, or an empty string.
    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("")
    }

    /// Command text, or an empty string.
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|t| t.command.as_deref())
            .unwrap_or("")
    }

    /// Whether the request targets the shell tool.
    pub fn is_shell(&self) -> bool {
        self.tool_name() == SHELL_TOOL
    }
}
