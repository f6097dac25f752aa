//! Turning raw model output into summaries
//!
//! Models are asked for JSON but routinely wrap it in Markdown fences, add
//! prose, or omit fields. Every field therefore has a fallback derived from
//! the chunk itself.

use reqforge_domain::serde_util::{coerce_f64, coerce_pages};
use reqforge_domain::{Chunk, Summary};
use serde_json::{Map, Value};
use tracing::debug;

/// Confidence assigned when the response carries none
pub const PARSED_DEFAULT_CONFIDENCE: f64 = 0.7;

/// Maximum characters of a fallback title
pub(crate) const TITLE_CHARS: usize = 60;

/// Maximum characters of a fallback description
pub(crate) const DESCRIPTION_CHARS: usize = 500;

/// Remove one surrounding Markdown code fence (optionally tagged `json`)
pub fn strip_code_fences(response: &str) -> &str {
    let clean = response.trim();
    let Some(rest) = clean.strip_prefix("```") else {
        return clean;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// First line of the trimmed text, cut to 60 characters
pub(crate) fn first_line_title(text: &str) -> Option<String> {
    text.trim()
        .lines()
        .next()
        .map(|line| line.chars().take(TITLE_CHARS).collect::<String>())
        .filter(|title| !title.is_empty())
}

/// Title for the `index`-th chunk (1-based) when the model gave none
pub(crate) fn fallback_title(chunk: &Chunk, index: usize) -> String {
    first_line_title(&chunk.text).unwrap_or_else(|| format!("Summary {index}"))
}

pub(crate) fn leading_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

fn non_empty_str<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Build a summary for the `index`-th chunk (1-based) from a raw response
///
/// Only the parsed fields are set; prompt, response and model are recorded
/// by the caller.
pub fn parse_summary_response(response: &str, chunk: &Chunk, index: usize) -> Summary {
    let clean = strip_code_fences(response);

    let data = if clean.is_empty() {
        Map::new()
    } else {
        match serde_json::from_str::<Value>(clean) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => {
                debug!(index, error = %e, "Response is not JSON; using it as the description");
                Map::new()
            }
        }
    };

    let title = non_empty_str(&data, "title")
        .map(str::to_string)
        .unwrap_or_else(|| fallback_title(chunk, index));

    let description = match non_empty_str(&data, "description") {
        Some(description) => description.to_string(),
        None if !clean.is_empty() => clean.to_string(),
        None => leading_chars(&chunk.text, DESCRIPTION_CHARS),
    };

    let mut source_pages = data.get("source_pages").map(coerce_pages).unwrap_or_default();
    if source_pages.is_empty() {
        source_pages = vec![chunk.metadata.start_page];
    }

    let confidence = data
        .get("confidence")
        .and_then(coerce_f64)
        .unwrap_or(PARSED_DEFAULT_CONFIDENCE);

    Summary {
        title: Some(title),
        description: Some(description),
        source_pages,
        confidence: Some(confidence),
        evidence: Some(chunk.metadata.clone()),
        ..Default::default()
    }
}
