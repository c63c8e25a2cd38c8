// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header grammar.
//!
//! A header is `<type>[(<scope>)][!]: <description>`. Only the prefix is
//! constrained; anything after the first character of the description is
//! accepted as-is, including further lines.

use crate::error::{Result, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;

use super::types::CommitType;

lazy_static! {
    /// Regex for the Conventional Commits header prefix.
    static ref HEADER_REGEX: Regex = Regex::new(&format!(
        r"^(?P<type>{})(?:\((?P<scope>.+)\))?(?P<breaking>!)?: (?P<description>.+)",
        CommitType::alternation()
    ))
    .unwrap();
}

/// The parsed header of a conventional commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// Commit type (feat, fix, etc.).
    pub commit_type: CommitType,
    /// Optional scope.
    pub scope: Option<String>,
    /// Whether the `!` breaking marker is present.
    pub is_breaking: bool,
    /// Description following `: `.
    pub description: String,
}

impl CommitHeader {
    /// Parse a commit message, failing if its prefix is not conventional.
    pub fn parse(message: &str) -> Result<Self> {
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let captures = HEADER_REGEX.captures(message).ok_or_else(|| {
            ValidationError::InvalidHeader {
                message: message.to_string(),
            }
        })?;

        let commit_type = captures
            .name("type")
            .and_then(|m| m.as_str().parse::<CommitType>().ok())
            .ok_or_else(|| ValidationError::InvalidHeader {
                message: message.to_string(),
            })?;

        Ok(Self {
            commit_type,
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            is_breaking: captures.name("breaking").is_some(),
            description: captures
                .name("description")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Format the header back into `type(scope)!: description` form.
    pub fn format(&self) -> String {
        let mut result = String::from(self.commit_type.as_str());

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.is_breaking {
            result.push('!');
        }

        result.push_str(": ");
        result.push_str(&self.description);

        result
    }
}

/// Check whether a message starts with a valid conventional header.
pub fn is_conventional(message: &str) -> bool {
    HEADER_REGEX.is_match(message)
}
