//! Command token recognition

use crate::config::DEFAULT_COMMAND_PATTERN;
use crate::error::{CommandError, Result};
use regex::Regex;
use std::collections::HashSet;

/// One recognised command token and its byte span in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    /// Matched text
    pub token: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

/// A compiled set of command patterns
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    patterns: Vec<Regex>,
}

impl CommandMatcher {
    /// Compile `patterns`, falling back to [`DEFAULT_COMMAND_PATTERN`] when
    /// none are given
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let sources: Vec<&str> = if patterns.is_empty() {
            vec![DEFAULT_COMMAND_PATTERN]
        } else {
            patterns.iter().map(AsRef::as_ref).collect()
        };

        let patterns = sources
            .into_iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| CommandError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Number of compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// All matches of every pattern, ordered by start offset
    ///
    /// Matches from different patterns that share a start keep pattern
    /// order. With `deduplicate`, only the first occurrence of each token
    /// text is kept.
    pub fn find_tokens(&self, text: &str, deduplicate: bool) -> Vec<TokenMatch> {
        let mut matches: Vec<TokenMatch> = self
            .patterns
            .iter()
            .flat_map(|re| re.find_iter(text))
            .map(|m| TokenMatch {
                token: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect();
        matches.sort_by_key(|m| m.start);

        if deduplicate {
            let mut seen = HashSet::new();
            matches.retain(|m| seen.insert(m.token.clone()));
        }
        matches
    }

    /// Distinct command tokens in first-occurrence order
    pub fn find_commands(&self, text: &str) -> Vec<String> {
        self.find_tokens(text, true)
            .into_iter()
            .map(|m| m.token)
            .collect()
    }
}

/// Distinct command tokens of `text` under `patterns`
///
/// Convenience for one-off scans; pipelines should build a
/// [`CommandMatcher`] once and reuse it.
pub fn find_commands_in_text<S: AsRef<str>>(text: &str, patterns: &[S]) -> Result<Vec<String>> {
    Ok(CommandMatcher::new(patterns)?.find_commands(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_commands_dedup_in_order() {
        let found =
            find_commands_in_text("CMD_A then CMD_B, CMD_A again", &[DEFAULT_COMMAND_PATTERN])
                .unwrap();
        assert_eq!(found, vec!["CMD_A", "CMD_B"]);
    }

    #[test]
    fn test_empty_pattern_list_uses_default() {
        let matcher = CommandMatcher::new::<&str>(&[]).unwrap();
        assert_eq!(matcher.pattern_count(), 1);
        assert_eq!(matcher.find_commands("issue CMD_ZQCAL now"), vec!["CMD_ZQCAL"]);
    }

    #[test]
    fn test_word_boundary_excludes_embedded_tokens() {
        let found = find_commands_in_text("XCMD_A CMD_lower CMD_B1", &[DEFAULT_COMMAND_PATTERN])
            .unwrap();
        assert_eq!(found, vec!["CMD_B1"]);
    }

    #[test]
    fn test_matches_from_several_patterns_are_position_ordered() {
        let matcher = CommandMatcher::new(&[r"\bMRW\b", r"\bCMD_[A-Z]+\b"]).unwrap();
        let tokens = matcher.find_tokens("CMD_ACT MRW CMD_RD MRW", false);
        let names: Vec<&str> = tokens.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(names, vec!["CMD_ACT", "MRW", "CMD_RD", "MRW"]);
        assert!(tokens.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn test_spans_point_into_text() {
        let text = "before CMD_X after";
        let tokens = CommandMatcher::new(&[DEFAULT_COMMAND_PATTERN])
            .unwrap()
            .find_tokens(text, false);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&text[tokens[0].start..tokens[0].end], "CMD_X");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = CommandMatcher::new(&["CMD_(unclosed"]).unwrap_err();
        match err {
            CommandError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "CMD_(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
