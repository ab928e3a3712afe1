//! Output helpers for the ingestion pipeline.
//!
//! The downstream consumer supplies an ordered list of business-relevant key
//! labels; only those are serialized, in the caller's order. serde_json
//! writes non-ASCII characters literally, which the pipeline's consumers
//! (Portuguese field labels throughout) rely on.

use indexmap::IndexMap;

use crate::block::BlockType;
use crate::error::Result;
use crate::index::BlockIndex;
use crate::key_value::KeyValueMap;

/// Keep only the expected keys, in expected order.
///
/// Keys absent from `map` are dropped, not defaulted.
pub fn filter_keys<'a>(expected: &[&'a str], map: &KeyValueMap) -> IndexMap<&'a str, String> {
    expected
        .iter()
        .filter_map(|&key| map.get(key).map(|value| (key, value.clone())))
        .collect()
}

/// Filter to the expected keys and serialize as a pretty JSON object.
pub fn filtered_json(expected: &[&str], map: &KeyValueMap) -> Result<String> {
    let filtered = filter_keys(expected, map);
    Ok(serde_json::to_string_pretty(&filtered)?)
}

/// Which block granularity [`extract_text`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextGranularity {
    /// One string per detected LINE block.
    #[default]
    Line,
    /// One string per detected WORD block.
    Word,
}

/// Concatenate all detected text at the given granularity, one block per
/// line, in response order.
pub fn extract_text(index: &BlockIndex<'_>, granularity: TextGranularity) -> String {
    let block_type = match granularity {
        TextGranularity::Line => BlockType::Line,
        TextGranularity::Word => BlockType::Word,
    };
    let texts: Vec<&str> = index
        .of_type(block_type)
        .filter_map(|b| b.text.as_deref())
        .collect();
    texts.join("\n")
}
