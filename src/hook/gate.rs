// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message gate: payload in, decision out.

use crate::commit::is_conventional;
use crate::error::Result;
use std::io::{Read, Write};

use super::extract::extract_message;
use super::input::HookInput;
use super::output::HookOutput;

/// Why a command was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    /// The tool is not the shell tool.
    NotShellCommand,
    /// The command does not run `git commit`.
    NotGitCommit,
    /// No message could be located in the command.
    NoMessage,
    /// The message follows Conventional Commits.
    Conventional,
}

/// Outcome of evaluating one hook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the command run; nothing is printed.
    Allow(AllowReason),
    /// Block the command with the given response.
    Deny(HookOutput),
}

impl Decision {
    /// Whether the command is allowed to run.
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}

/// Decide whether the command described by `input` may run.
pub fn evaluate(input: &HookInput) -> Decision {
    if !input.is_shell() {
        tracing::debug!("Ignoring tool: {:?}", input.tool_name());
        return Decision::Allow(AllowReason::NotShellCommand);
    }

    let command = input.command();
    if !command.contains("git commit") {
        tracing::debug!("Command is not a git commit");
        return Decision::Allow(AllowReason::NotGitCommit);
    }

    let Some(extracted) = extract_message(command) else {
        tracing::debug!("No commit message found in command");
        return Decision::Allow(AllowReason::NoMessage);
    };

    tracing::debug!(
        "Extracted {:?} message: {:?}",
        extracted.source,
        extracted.text
    );

    if is_conventional(&extracted.text) {
        tracing::debug!("Commit message is conventional");
        Decision::Allow(AllowReason::Conventional)
    } else {
        tracing::debug!("Rejecting commit message");
        Decision::Deny(HookOutput::deny(&extracted.text))
    }
}

/// Read a payload from `reader`, evaluate it, and write any response to `writer`.
///
/// Only an unreadable or malformed payload is an error; a denial is a
/// successful run that writes one JSON line.
pub fn run(reader: impl Read, mut writer: impl Write) -> Result<Decision> {
    let input = HookInput::from_reader(reader)?;
    let decision = evaluate(&input);

    if let Decision::Deny(ref output) = decision {
        writeln!(writer, "{}", output.to_json_line()?)?;
        writer.flush()?;
    }

    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bash(command: &str) -> HookInput {
        serde_json::from_value(json!({
            "tool_name": "Bash",
            "tool_input": { "command": command }
        }))
        .unwrap()
    }

    #[test]
    fn test_other_tool_allowed() {
        let input: HookInput = serde_json::from_value(json!({
            "tool_name": "Write",
            "tool_input": { "command": "git commit -m 'bad'" }
        }))
        .unwrap();
        assert_eq!(evaluate(&input), Decision::Allow(AllowReason::NotShellCommand));
    }

    #[test]
    fn test_non_commit_command_allowed() {
        assert_eq!(
            evaluate(&bash("git status && cargo test")),
            Decision::Allow(AllowReason::NotGitCommit)
        );
        assert_eq!(
            evaluate(&bash("git  commit -m 'bad'")),
            Decision::Allow(AllowReason::NotGitCommit)
        );
    }

    #[test]
    fn test_unparseable_commit_allowed() {
        assert_eq!(
            evaluate(&bash("git commit --amend --no-edit")),
            Decision::Allow(AllowReason::NoMessage)
        );
    }

    #[test]
    fn test_conventional_inline_allowed() {
        assert_eq!(
            evaluate(&bash(r#"git commit -m "feat(x): y""#)),
            Decision::Allow(AllowReason::Conventional)
        );
        assert!(evaluate(&bash("git commit -m 'chore(deps): upgrade ansible to 2.15'")).is_allow());
        assert!(evaluate(&bash(r#"git commit -m "feat!: breaking change""#)).is_allow());
    }

    #[test]
    fn test_invalid_inline_denied() {
        match evaluate(&bash(r#"git commit -m "added stuff""#)) {
            Decision::Deny(output) => assert!(output.reason().contains("added stuff")),
            other => panic!("expected deny, got {:?}", other),
        }
        assert!(!evaluate(&bash(r#"git commit -m "feat:no space""#)).is_allow());
    }

    #[test]
    fn test_heredoc_graded_on_first_line() {
        let ok = "git commit -m \"$(cat <<EOF\nfix(api): handle null\nmore body\nEOF\n)\"";
        assert_eq!(evaluate(&bash(ok)), Decision::Allow(AllowReason::Conventional));

        let bad = "git commit -m \"$(cat <<'EOF'\nFixed the api\n\nfix: body line\nEOF\n)\"";
        match evaluate(&bash(bad)) {
            Decision::Deny(output) => assert!(output.reason().contains("Your message: Fixed the api")),
            other => panic!("expected deny, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_heredoc_denied() {
        let command = "git commit -m \"$(cat <<EOF\n   \nEOF\n)\"";
        match evaluate(&bash(command)) {
            Decision::Deny(output) => assert!(output.reason().contains("Your message: \n")),
            other => panic!("expected deny, got {:?}", other),
        }
    }

    #[test]
    fn test_command_substitution_message_allowed() {
        assert_eq!(
            evaluate(&bash(r#"git commit -m "$(git log -1 --format=%s)""#)),
            Decision::Allow(AllowReason::NoMessage)
        );
    }

    #[test]
    fn test_run_writes_nothing_on_allow() {
        let payload = br#"{"tool_name":"Bash","tool_input":{"command":"ls"}}"#;
        let mut out = Vec::new();
        let decision = run(&payload[..], &mut out).unwrap();
        assert!(decision.is_allow());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_writes_one_line_on_deny() {
        let payload = br#"{"tool_name":"Bash","tool_input":{"command":"git commit -m 'added stuff'"}}"#;
        let mut out = Vec::new();
        run(&payload[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"permissionDecision\":\"deny\""));
    }

    #[test]
    fn test_run_is_deterministic() {
        let payload = br#"{"tool_name":"Bash","tool_input":{"command":"git commit -m 'wip'"}}"#;
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&payload[..], &mut first).unwrap();
        run(&payload[..], &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_rejects_malformed_payload() {
        let mut out = Vec::new();
        assert!(run(&b"{\"tool_name\": \"Ba"[..], &mut out).is_err());
        assert!(out.is_empty());
    }
}
