//! Command sequencing inference from adjacent token pairs

use crate::config::CommandConfig;
use crate::matcher::CommandMatcher;
use reqforge_domain::{
    Chunk, CommandRef, CompatibilityAttachment, CompatibilityMatrix, CompatibilityState,
    RequirementUnit,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Lowercased keyword lists used to classify the text between two tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceKeywords {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SequenceKeywords {
    /// Build from raw keyword lists; empty keywords are dropped
    pub fn new<S: AsRef<str>>(positive: &[S], negative: &[S]) -> Self {
        let normalize = |list: &[S]| -> Vec<String> {
            list.iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect()
        };
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    /// Keywords taken from the `[commands]` section
    pub fn from_config(config: &CommandConfig) -> Self {
        Self::new(
            config.sequence_positive_keywords.as_slice(),
            config.sequence_negative_keywords.as_slice(),
        )
    }

    fn classify(&self, between: &str) -> Option<CompatibilityState> {
        if self.negative.iter().any(|k| between.contains(k.as_str())) {
            return Some(CompatibilityState::Forbidden);
        }
        if self.positive.is_empty() || self.positive.iter().any(|k| between.contains(k.as_str()))
        {
            return Some(CompatibilityState::Allowed);
        }
        None
    }
}

impl Default for SequenceKeywords {
    fn default() -> Self {
        Self::from_config(&CommandConfig::default())
    }
}

/// Infer a directed compatibility matrix from the chunk texts
///
/// Each chunk's tokens (all matches, position-ordered) are walked pairwise.
/// Self pairs are skipped, as are pairs with a member outside a non-empty
/// `whitelist`. A negative keyword between the two tokens records `N`,
/// which later observations never overwrite. Any other observation records
/// `Y` unless the pair is already `N`.
pub fn infer_compatibility(
    chunks: &[Chunk],
    matcher: &CommandMatcher,
    whitelist: Option<&HashSet<String>>,
    keywords: &SequenceKeywords,
) -> CompatibilityMatrix {
    let whitelist = whitelist.filter(|w| !w.is_empty());
    let mut matrix = CompatibilityMatrix::new();

    for chunk in chunks {
        let text = chunk.text.as_str();
        if text.is_empty() {
            continue;
        }
        let tokens = matcher.find_tokens(text, false);

        for pair in tokens.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            let (src, dst) = (first.token.as_str(), second.token.as_str());
            if src == dst {
                continue;
            }
            if let Some(allowed) = whitelist {
                if !allowed.contains(src) || !allowed.contains(dst) {
                    continue;
                }
            }

            // Overlapping matches from different patterns leave nothing between.
            let between = if second.start > first.end {
                text[first.end..second.start].to_lowercase()
            } else {
                String::new()
            };

            match keywords.classify(&between) {
                Some(CompatibilityState::Forbidden) => {
                    matrix.set(src, dst, CompatibilityState::Forbidden);
                }
                _ if matrix.get(src, dst) == Some(CompatibilityState::Forbidden) => {}
                _ => matrix.set(src, dst, CompatibilityState::Allowed),
            }
        }
    }

    debug!(pairs = matrix.pair_count(), "Inferred compatibility matrix");
    matrix
}

/// Attach an inferred matrix to the configured target requirement
///
/// Nothing happens when the matrix is empty or the target index is out of
/// range. A target without commands receives the sorted names appearing in
/// the matrix, capped at `max_per_requirement`. Returns whether the matrix
/// was attached.
pub fn attach_compatibility(
    requirements: &mut [RequirementUnit],
    matrix: CompatibilityMatrix,
    config: &CommandConfig,
) -> bool {
    if matrix.is_empty() {
        return false;
    }
    let index = config.target_requirement_index;
    let Some(target) = requirements.get_mut(index) else {
        warn!(
            index,
            total = requirements.len(),
            "Compatibility target out of range; matrix not attached"
        );
        return false;
    };

    if target.commands.is_empty() {
        target.commands = matrix
            .command_names()
            .into_iter()
            .take(config.max_per_requirement)
            .map(CommandRef::named)
            .collect();
    }
    target.compatibility_matrix = CompatibilityAttachment {
        description: config.compatibility_description.clone(),
        matrix,
        default: config.compatibility_default.clone(),
    };
    true
}
