//! Per-requirement command annotation

use crate::matcher::CommandMatcher;
use reqforge_domain::{Chunk, CommandRef, RequirementUnit};
use tracing::debug;

/// Attach the command tokens found in each requirement's source chunk
///
/// Requirement `i` is scanned against chunk `i` (an absent chunk reads as
/// empty text). At most `max_per_requirement` distinct tokens are kept, in
/// first-occurrence order. Requirements left with no token after the cap
/// keep their existing commands. Returns how many requirements were annotated.
pub fn annotate_requirements(
    requirements: &mut [RequirementUnit],
    chunks: &[Chunk],
    matcher: &CommandMatcher,
    max_per_requirement: usize,
) -> usize {
    let mut annotated = 0;

    for (idx, requirement) in requirements.iter_mut().enumerate() {
        let text = chunks.get(idx).map(|c| c.text.as_str()).unwrap_or("");
        let found: Vec<CommandRef> = matcher
            .find_commands(text)
            .into_iter()
            .take(max_per_requirement)
            .map(CommandRef::named)
            .collect();
        if found.is_empty() {
            continue;
        }

        requirement.commands = found;
        annotated += 1;
        debug!(
            requirement = %requirement.id,
            commands = requirement.commands.len(),
            "Annotated requirement"
        );
    }

    annotated
}
