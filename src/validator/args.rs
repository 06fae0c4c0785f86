//! Free-form argument tokenization.
//!
//! Validator arguments arrive as one raw string and are split into
//! shell-like tokens. A token wrapped entirely in matching single or double
//! quotes has the outer quotes stripped. There is no escape-sequence
//! processing, and an unmatched quote is never an error: the scan simply
//! yields the literal token content it can match.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one token: runs of unquoted text and fully quoted spans.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:[^\s"']+|"[^"]*"|'[^']*')+"#).expect("Invalid token regex")
});

/// Split raw argument text into tokens.
///
/// Empty or whitespace-only input yields no tokens. Tokens are delimited by
/// whitespace outside quotes; a quoted span keeps its embedded whitespace.
pub fn tokenize_args(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    TOKEN_REGEX
        .find_iter(trimmed)
        .map(|token| strip_outer_quotes(token.as_str()).to_string())
        .collect()
}

/// Strip the enclosing quote characters when the whole token is wrapped
/// symmetrically in the same quote kind. Partial or mixed quoting passes
/// through unchanged.
fn strip_outer_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize_args("").is_empty());
    }

    #[test]
    fn whitespace_only_input_yields_no_tokens() {
        assert!(tokenize_args("   \t  ").is_empty());
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            tokenize_args("demo-change --strict"),
            vec!["demo-change", "--strict"]
        );
    }

    #[test]
    fn double_quoted_span_is_one_token_without_quotes() {
        let tokens = tokenize_args(r#"--change enhance-reporting --prompt "some text""#);
        assert_eq!(
            tokens,
            vec!["--change", "enhance-reporting", "--prompt", "some text"]
        );
    }

    #[test]
    fn single_quoted_span_is_one_token_without_quotes() {
        let tokens = tokenize_args("--prompt 'other text'");
        assert_eq!(tokens, vec!["--prompt", "other text"]);
    }

    #[test]
    fn opposite_kind_quotes_pass_through() {
        let tokens = tokenize_args(r#""it's quoted""#);
        assert_eq!(tokens, vec!["it's quoted"]);
    }

    #[test]
    fn partially_quoted_token_keeps_quote_characters() {
        let tokens = tokenize_args(r#"--prompt="some text""#);
        assert_eq!(tokens, vec![r#"--prompt="some text""#]);
    }

    #[test]
    fn unmatched_quote_degrades_to_literal_content() {
        // The dangling quote cannot open a quoted span, so the scan drops it
        // and keeps the rest literally.
        let tokens = tokenize_args(r#"alpha "beta"#);
        assert_eq!(tokens, vec!["alpha", "beta"]);
    }

    #[test]
    fn empty_quoted_token_becomes_empty_string() {
        let tokens = tokenize_args(r#"--name "" next"#);
        assert_eq!(tokens, vec!["--name", "", "next"]);
    }

    #[test]
    fn non_ascii_text_tokenizes() {
        let tokens = tokenize_args(r#"--prompt "完善审批流程""#);
        assert_eq!(tokens, vec!["--prompt", "完善审批流程"]);
    }

    #[test]
    fn tokenization_is_idempotent_for_plain_tokens() {
        let tokens = tokenize_args("validate demo-change --strict");
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize_args(&rejoined), tokens);
    }
}
