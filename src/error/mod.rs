// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-gate.
//!
//! Only failures that should stop the process live here. Domain outcomes
//! such as "not a git commit" or "message rejected" are ordinary
//! [`Decision`](crate::hook::Decision) values, not errors.

use thiserror::Error;

/// The main error type for commit-gate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Hook payload errors
    #[error(transparent)]
    Input(#[from] InputError),

    // Validation errors (direct `check` usage)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Response serialization errors
    #[error("Failed to serialize hook response: {0}")]
    Output(#[source] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading the hook payload.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Commit message validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("'{message}' does not match type(scope): description")]
    InvalidHeader { message: String },

    #[error("Empty commit message")]
    EmptyMessage,
}

/// Result type alias for commit-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
