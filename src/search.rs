//! Keyword search over detected words.
//!
//! Locates WORD blocks whose text matches a keyword, exactly or as a
//! substring, and reports where they sit on the page. Used by callers to
//! spot-check documents for identifiers (CPF/CNPJ, plate numbers) before
//! running the full extraction.

use indexmap::IndexMap;

use crate::block::BlockType;
use crate::geometry::BoundingBox;
use crate::index::BlockIndex;

/// How a word matched the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole word equals the keyword (case-insensitive).
    Exact,
    /// The word contains the keyword as a substring (case-insensitive).
    Partial,
}

/// One matched WORD block with its location metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch<'g> {
    /// ID of the matched block.
    pub id: &'g str,
    /// The word's text.
    pub text: &'g str,
    /// Detection confidence, 0–100.
    pub confidence: Option<f32>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Position on the page, if geometry was reported.
    pub bbox: Option<BoundingBox>,
    /// Whether the match was exact or partial.
    pub kind: MatchKind,
}

/// Find all WORD blocks matching `keyword`, in response order.
pub fn find_keyword_blocks<'g>(index: &BlockIndex<'g>, keyword: &str) -> Vec<KeywordMatch<'g>> {
    let needle = keyword.to_lowercase();

    index
        .of_type(BlockType::Word)
        .filter_map(|block| {
            let text = block.text.as_deref()?;
            let lower = text.to_lowercase();
            let kind = if lower == needle {
                MatchKind::Exact
            } else if lower.contains(&needle) {
                MatchKind::Partial
            } else {
                return None;
            };
            Some(KeywordMatch {
                id: &block.id,
                text,
                confidence: block.confidence,
                page: block.page,
                bbox: block.bbox().copied(),
                kind,
            })
        })
        .collect()
}

/// Search several keywords at once; results keep the caller's keyword order.
pub fn find_keywords<'g, 'k>(
    index: &BlockIndex<'g>,
    keywords: &[&'k str],
) -> IndexMap<&'k str, Vec<KeywordMatch<'g>>> {
    keywords
        .iter()
        .map(|&keyword| (keyword, find_keyword_blocks(index, keyword)))
        .collect()
}
