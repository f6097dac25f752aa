//! Windowed chunking of the merged stream

use crate::config::ChunkingConfig;
use reqforge_domain::{Chunk, ChunkMetadata, MergedUnit};
use tracing::debug;

/// Packs merged units into overlapping, bounded-size windows
///
/// Units are never split: a unit longer than the budget travels alone and
/// overflows it. All lengths are counted in characters, not bytes.
pub struct TextWindowChunker {
    max_characters: usize,
    overlap_characters: usize,
}

impl TextWindowChunker {
    /// Create a new chunker
    pub fn new(max_characters: usize, overlap_characters: usize) -> Self {
        Self {
            max_characters,
            overlap_characters,
        }
    }

    /// Create a chunker from a validated configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.max_characters, config.overlap_characters)
    }

    /// Chunk the merged units, preserving their order
    pub fn chunk(&self, units: &[MergedUnit]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut window = Window::default();

        for unit in units {
            if !window.is_empty() && window.char_len + unit.char_len() > self.max_characters {
                let (sealed, carried) = window.seal(self.overlap_characters);
                chunks.push(sealed);
                window = carried;
            }
            window.push(unit);
        }

        if let Some(last) = window.finish() {
            chunks.push(last);
        }

        debug!("Produced {} chunks from {} units", chunks.len(), units.len());
        chunks
    }
}

/// The open window being filled
#[derive(Default)]
struct Window {
    text: String,
    char_len: usize,
    /// `None` until the first unit lands in this window
    meta: Option<ChunkMetadata>,
    /// Page owning the carried overlap, for windows opened by a seal
    seed_page: Option<u32>,
    /// `(char offset, page)` for each contribution, ascending
    spans: Vec<(usize, u32)>,
}

impl Window {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push(&mut self, unit: &MergedUnit) {
        match &mut self.meta {
            Some(meta) => meta.add_kind(&unit.kind),
            None => {
                // A fresh window belongs to the unit's page; a carried one
                // keeps the page of the text it inherited.
                let page = match self.seed_page {
                    Some(page) if !self.text.is_empty() => page,
                    _ => unit.page,
                };
                self.meta = Some(ChunkMetadata::opened(page, unit.kind.clone()));
            }
        }

        self.spans.push((self.char_len, unit.page));
        self.text.push('\n');
        self.text.push_str(&unit.content);
        self.char_len += 1 + unit.char_len();
    }

    /// Close this window and open the next one seeded with its tail
    fn seal(self, overlap_characters: usize) -> (Chunk, Window) {
        let tail = tail_chars(&self.text, overlap_characters);
        let tail_len = tail.chars().count();

        let carried = if tail.is_empty() {
            Window::default()
        } else {
            let tail_start = self.char_len - tail_len;
            let page = self
                .spans
                .iter()
                .rev()
                .find(|(offset, _)| *offset <= tail_start)
                .map(|(_, page)| *page)
                .unwrap_or_default();
            Window {
                text: tail.to_string(),
                char_len: tail_len,
                meta: None,
                seed_page: Some(page),
                spans: vec![(0, page)],
            }
        };

        let sealed = Chunk {
            text: self.text.trim().to_string(),
            metadata: self.meta.unwrap_or_default(),
        };
        (sealed, carried)
    }

    fn finish(self) -> Option<Chunk> {
        if self.text.is_empty() {
            return None;
        }
        Some(Chunk {
            text: self.text.trim().to_string(),
            metadata: self.meta.unwrap_or_default(),
        })
    }
}

/// The last `n` characters of `text` (all of it when shorter)
fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
