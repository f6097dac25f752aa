//! Prompt construction for chunk summarization

use reqforge_domain::Chunk;

/// System prompt used when none is configured
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert verification engineer. \
Summarize specification text into a concise requirement unit for verification \
coverage. Produce a short structured JSON capturing key verification intent.";

/// User prompt template used when none is configured
///
/// Placeholders: `{chunk_index}`, `{start_page}`, `{chunk_text}`.
pub const DEFAULT_USER_TEMPLATE: &str = "Summarize the following specification excerpt \
into a JSON object with keys `\"title\"`, `\"description\"`, `\"source_pages\"` (array of \
ints), and `\"confidence\"` (float between 0 and 1). Keep the description within 6 \
sentences and focus on verification-relevant behavior.\n\n\
### Excerpt {chunk_index} (page {start_page}):\n{chunk_text}\n";

/// Replace every occurrence of each non-empty term with `[REDACTED]`
pub fn redact_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    terms
        .iter()
        .map(|term| term.as_ref())
        .filter(|term: &&str| !term.is_empty())
        .fold(text.to_string(), |acc, term| acc.replace(term, "[REDACTED]"))
}

/// Fill `template` for the 1-based `index`-th chunk
///
/// The chunk text is trimmed and redacted before substitution. Unknown
/// placeholders are left as-is.
pub fn render_user_prompt<S: AsRef<str>>(
    template: &str,
    index: usize,
    chunk: &Chunk,
    redact: &[S],
) -> String {
    let text = redact_terms(chunk.text.trim(), redact);
    template
        .replace("{chunk_index}", &index.to_string())
        .replace("{start_page}", &chunk.metadata.start_page.to_string())
        .replace("{chunk_text}", &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqforge_domain::ChunkMetadata;

    #[test]
    fn test_redact_terms() {
        let out = redact_terms("Vendor X part X-100", &["X-100", "", "Vendor"]);
        assert_eq!(out, "[REDACTED] X part [REDACTED]");
    }

    #[test]
    fn test_render_default_template() {
        let chunk = Chunk {
            text: "  tRCD must be met. \n".to_string(),
            metadata: ChunkMetadata::opened(7, "text"),
        };
        let prompt = render_user_prompt(DEFAULT_USER_TEMPLATE, 3, &chunk, &[] as &[&str]);
        assert!(prompt.contains("Excerpt 3 (page 7):\ntRCD must be met.\n"));
        assert!(!prompt.contains("{chunk_text}"));
    }

    #[test]
    fn test_chunk_text_braces_are_not_reinterpreted() {
        let chunk = Chunk {
            text: "literal {start_page} in text".to_string(),
            metadata: ChunkMetadata::opened(2, "text"),
        };
        let prompt = render_user_prompt("{chunk_text}", 1, &chunk, &["secret"]);
        assert_eq!(prompt, "literal {start_page} in text");
    }
}
