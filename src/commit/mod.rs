// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit vocabulary and header grammar.

mod header;
mod types;

pub use header::{is_conventional, CommitHeader};
pub use types::CommitType;
