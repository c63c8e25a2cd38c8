// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The Conventional Commits type vocabulary.

/// Commit types accepted by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Ci,
    Build,
    Revert,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Ci => "ci",
            CommitType::Build => "build",
            CommitType::Revert => "revert",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "New feature",
            CommitType::Fix => "Bug fix",
            CommitType::Docs => "Documentation",
            CommitType::Style => "Formatting",
            CommitType::Refactor => "Refactoring",
            CommitType::Perf => "Performance",
            CommitType::Test => "Tests",
            CommitType::Chore => "Maintenance",
            CommitType::Ci => "CI/CD",
            CommitType::Build => "Build system",
            CommitType::Revert => "Revert a previous commit",
        }
    }

    /// Get all commit types, in the order they are presented to users.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Chore,
            CommitType::Ci,
            CommitType::Build,
            CommitType::Revert,
        ]
    }

    /// Regex alternation matching exactly one type keyword.
    pub(crate) fn alternation() -> String {
        Self::all()
            .iter()
            .map(CommitType::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    // Case-sensitive: `Feat` is not a valid type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
