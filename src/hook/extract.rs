// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message extraction from shell command text.
//!
//! This is a best-effort pattern match, not a shell parser. Commands whose
//! message cannot be located are left alone.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `git commit ... -m "message"` or `-m 'message'`.
    static ref INLINE_REGEX: Regex =
        Regex::new(r#"git commit.*?-m\s+["']([^"']+)["']"#).unwrap();

    /// `git commit ... -m "$(cat <<'EOF' ... EOF)"`.
    static ref HEREDOC_REGEX: Regex =
        Regex::new(r#"(?s)git commit.*?-m\s+"?\$\(cat\s+<<["']?EOF["']?\s*\n(.+?)\nEOF"#).unwrap();
}

/// Where the candidate message was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// Quoted `-m` argument.
    Inline,
    /// First line of a heredoc body.
    Heredoc,
}

/// A commit message candidate pulled out of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub text: String,
    pub source: MessageSource,
}

/// Extract the commit message from a `git commit` command.
///
/// The inline form wins over the heredoc form. Returns `None` when neither
/// shape is present.
pub fn extract_message(command: &str) -> Option<ExtractedMessage> {
    extract_inline(command)
        .map(|text| ExtractedMessage {
            text,
            source: MessageSource::Inline,
        })
        .or_else(|| {
            extract_heredoc(command).map(|text| ExtractedMessage {
                text,
                source: MessageSource::Heredoc,
            })
        })
}

fn extract_inline(command: &str) -> Option<String> {
    let captured = INLINE_REGEX.captures(command)?.get(1)?.as_str();

    // A `$(...)` argument is a command substitution, never graded inline.
    // `$(cat <<EOF` falls through to the heredoc form; any other
    // substitution (`$(git log -1 --format=%s)`) has no readable message
    // and the command is let through.
    if captured.starts_with("$(") {
        return None;
    }

    Some(captured.to_string())
}

fn extract_heredoc(command: &str) -> Option<String> {
    let body = HEREDOC_REGEX.captures(command)?.get(1)?.as_str();
    // A blank body still yields a candidate so the grammar rejects it.
    Some(body.trim().split('\n').next().unwrap_or("").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_double_quotes() {
        let msg = extract_message(r#"git commit -m "feat(x): y""#).unwrap();
        assert_eq!(msg.text, "feat(x): y");
        assert_eq!(msg.source, MessageSource::Inline);
    }

    #[test]
    fn test_inline_single_quotes_with_flags() {
        let msg = extract_message("git add . && git commit -a --no-verify -m 'added stuff'").unwrap();
        assert_eq!(msg.text, "added stuff");
    }

    #[test]
    fn test_inline_takes_first_m_flag() {
        let msg = extract_message(r#"git commit -m "fix: one" -m "body para""#).unwrap();
        assert_eq!(msg.text, "fix: one");
    }

    #[test]
    fn test_heredoc_first_line_only() {
        let command = "git commit -m \"$(cat <<EOF\nfix(api): handle null\nmore body\nEOF\n)\"";
        let msg = extract_message(command).unwrap();
        assert_eq!(msg.text, "fix(api): handle null");
        assert_eq!(msg.source, MessageSource::Heredoc);
    }

    #[test]
    fn test_heredoc_quoted_delimiter() {
        let command = "git commit -m \"$(cat <<'EOF'\n  docs: update readme\n\nDetails.\nEOF\n)\"";
        let msg = extract_message(command).unwrap();
        assert_eq!(msg.text, "docs: update readme");
        assert_eq!(msg.source, MessageSource::Heredoc);
    }

    #[test]
    fn test_heredoc_other_delimiter_not_recognized() {
        let command = "git commit -m \"$(cat <<MSG\nfix: x\nMSG\n)\"";
        assert!(extract_message(command).is_none());
    }

    #[test]
    fn test_heredoc_blank_body_is_empty_message() {
        let command = "git commit -m \"$(cat <<EOF\n   \nEOF\n)\"";
        let msg = extract_message(command).unwrap();
        assert_eq!(msg.text, "");
        assert_eq!(msg.source, MessageSource::Heredoc);
    }

    #[test]
    fn test_other_substitution_has_no_message() {
        assert!(extract_message(r#"git commit -m "$(git log -1 --format=%s)""#).is_none());
    }

    #[test]
    fn test_no_message_flag() {
        assert!(extract_message("git commit --amend --no-edit").is_none());
        assert!(extract_message("git commit").is_none());
        assert!(extract_message("git commit -F msg.txt").is_none());
    }

    #[test]
    fn test_m_flag_before_git_commit_ignored() {
        assert!(extract_message(r#"echo -m "x" ; git commit"#).is_none());
    }
}
