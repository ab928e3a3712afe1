//! Two-stage extraction pipeline.
//!
//! Table recovery runs as an explicit primary/fallback pair: structural
//! TABLE extraction first, positional-heuristic extraction only when the
//! primary stage produced nothing. Keeping the decision point here, rather
//! than inside either extractor, lets both stages be tested on their own.

use serde::Serialize;

use crate::block::BlockGraph;
use crate::config::ExtractConfig;
use crate::error::Result;
use crate::index::BlockIndex;
use crate::key_value::{KeyValueExtractor, KeyValueMap};
use crate::positional::PositionalFallbackExtractor;
use crate::table::{TableExtractor, TableRow};
use crate::words::WordResolver;

/// Everything the interpreter produces for one analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    /// Form key→value pairs, cleaned, in discovery order.
    pub key_values: KeyValueMap,
    /// Normalized coverage-table rows.
    pub rows: Vec<TableRow>,
}

/// Extract table rows, falling back to positional recovery on empty output.
///
/// The fallback also covers the zero-TABLE-blocks case: structural
/// extraction then yields an empty list, which triggers it.
pub fn extract_rows(
    index: &BlockIndex<'_>,
    words: &WordResolver<'_>,
    expected_items: &[&str],
    config: &ExtractConfig,
) -> Vec<TableRow> {
    let rows = TableExtractor::extract(index, words, config);
    if !rows.is_empty() {
        return rows;
    }
    log::debug!("no structured table rows found, trying positional fallback");
    PositionalFallbackExtractor::extract(index, expected_items, config)
}

/// Run the full interpreter over one block graph.
///
/// Builds the index and word resolver once, then runs the key-value
/// extractor and the two-stage table pipeline. The only failure mode is a
/// structurally malformed graph.
pub fn analyze(
    graph: &BlockGraph,
    expected_items: &[&str],
    config: &ExtractConfig,
) -> Result<AnalysisOutput> {
    let index = BlockIndex::build(graph)?;
    let words = WordResolver::build(&index);

    let key_values = KeyValueExtractor::extract(&index, &words);
    let rows = extract_rows(&index, &words, expected_items, config);

    log::debug!(
        "analysis produced {} key/value pairs and {} rows",
        key_values.len(),
        rows.len()
    );

    Ok(AnalysisOutput { key_values, rows })
}
