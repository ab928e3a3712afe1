//! Word and line text resolution.
//!
//! Maps atomic WORD and LINE block IDs to their text content. Built in a
//! single pass over the index; read-only afterward. Table cells may reference
//! LINE children instead of WORD children, so cell-text resolution prefers
//! the WORD map and falls back to the LINE map.

use std::collections::HashMap;

use crate::block::BlockType;
use crate::index::BlockIndex;

/// Resolves child block IDs to text.
#[derive(Debug)]
pub struct WordResolver<'g> {
    words: HashMap<&'g str, &'g str>,
    lines: HashMap<&'g str, &'g str>,
}

impl<'g> WordResolver<'g> {
    /// Collect WORD and LINE texts from the index.
    pub fn build(index: &BlockIndex<'g>) -> Self {
        let words = index
            .of_type(BlockType::Word)
            .filter_map(|b| b.text.as_deref().map(|t| (b.id.as_str(), t)))
            .collect();
        let lines = index
            .of_type(BlockType::Line)
            .filter_map(|b| b.text.as_deref().map(|t| (b.id.as_str(), t)))
            .collect();
        Self { words, lines }
    }

    /// Resolve a WORD block ID to its text.
    pub fn resolve(&self, id: &str) -> Option<&'g str> {
        self.words.get(id).copied()
    }

    /// Resolve an ID against the WORD map first, then the LINE map.
    ///
    /// Used for table-cell children, which may be words or whole lines.
    pub fn resolve_any(&self, id: &str) -> Option<&'g str> {
        self.words
            .get(id)
            .or_else(|| self.lines.get(id))
            .copied()
    }

    /// Join the resolvable WORD texts among `ids` with single spaces.
    ///
    /// Unresolved IDs are skipped; an empty result means nothing resolved.
    pub fn join_words<'a, I>(&self, ids: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let texts: Vec<&str> = ids.into_iter().filter_map(|id| self.resolve(id)).collect();
        texts.join(" ")
    }

    /// Join the resolvable texts among `ids` with single spaces, preferring
    /// the WORD map and falling back to the LINE map per ID.
    pub fn join_any<'a, I>(&self, ids: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let texts: Vec<&str> = ids
            .into_iter()
            .filter_map(|id| self.resolve_any(id))
            .collect();
        texts.join(" ")
    }
}
