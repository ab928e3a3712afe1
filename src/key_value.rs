//! Form key→value reconstruction.
//!
//! The analysis service annotates form fields as pairs of `KEY_VALUE_SET`
//! blocks: the KEY side points at its label words via CHILD relationships and
//! at the VALUE side via a VALUE relationship; the VALUE side points at its
//! content words via CHILD relationships. This module walks those links and
//! produces a cleaned key→value text map.

use indexmap::IndexMap;

use crate::block::{BlockType, EntityType, RelationshipType};
use crate::index::BlockIndex;
use crate::words::WordResolver;

/// Cleaned key text → value text, in discovery order.
pub type KeyValueMap = IndexMap<String, String>;

/// Reconstructs form key→value pairs from a block index.
#[derive(Debug)]
pub struct KeyValueExtractor;

impl KeyValueExtractor {
    /// Extract all form pairs.
    ///
    /// Keys are normalized by stripping every `:` and trimming whitespace;
    /// KEY blocks whose children resolve to no text are skipped and
    /// duplicate keys keep the last value seen.
    /// A KEY block without a VALUE relationship (or whose VALUE block has no
    /// resolvable children) still yields an entry, with an empty value.
    pub fn extract(index: &BlockIndex<'_>, words: &WordResolver<'_>) -> KeyValueMap {
        let mut map = KeyValueMap::new();

        for block in index.of_type(BlockType::KeyValueSet) {
            if !block.has_entity_type(EntityType::Key) {
                continue;
            }

            let key_text = words.join_words(block.child_ids());
            if key_text.trim().is_empty() {
                continue;
            }

            let value_text = block
                .related_ids(RelationshipType::Value)
                .next()
                .and_then(|value_id| index.get(value_id))
                .map(|value_block| words.join_words(value_block.child_ids()))
                .unwrap_or_default();

            map.insert(
                normalize_key(&key_text),
                value_text.trim().to_string(),
            );
        }

        log::debug!("extracted {} form key/value pairs", map.len());
        map
    }

    /// Map each KEY block's ID to its label text.
    ///
    /// Unlike [`extract`](Self::extract), entries are keyed by block ID, so
    /// duplicate labels survive. Empty labels are kept as empty strings.
    pub fn key_blocks<'g>(
        index: &BlockIndex<'g>,
        words: &WordResolver<'g>,
    ) -> IndexMap<&'g str, String> {
        index
            .of_type(BlockType::KeyValueSet)
            .filter(|b| b.has_entity_type(EntityType::Key))
            .map(|b| (b.id.as_str(), words.join_words(b.child_ids())))
            .collect()
    }
}

/// Strip every `:` from a key label and trim surrounding whitespace.
pub fn normalize_key(raw: &str) -> String {
    raw.replace(':', "").trim().to_string()
}
