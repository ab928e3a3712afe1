//! Structured table extraction.
//!
//! Walks TABLE → CELL relationships, resolves each cell's text, rebuilds the
//! row/column grid from the cells' 1-based indices, and emits one
//! [`TableRow`] per well-formed data row. The header row is skipped, as is
//! any later row whose description repeats the header label. Rows missing
//! any of the three expected columns are dropped whole; no partial rows are
//! produced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::block::BlockType;
use crate::config::ExtractConfig;
use crate::index::BlockIndex;
use crate::words::WordResolver;

/// One normalized row of the policy coverage table.
///
/// The serialized field names are a fixed, human-facing output contract of
/// the downstream ingestion pipeline and are not translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Coverage description (column 1).
    #[serde(rename = "Descrição")]
    pub description: String,
    /// Maximum indemnity limit (column 2).
    #[serde(rename = "Limite Máximo Indenização")]
    pub max_indemnity_limit: String,
    /// Net premium (column 3).
    #[serde(rename = "Prêmio Líquido")]
    pub net_premium: String,
}

/// Reconstructs table rows from explicit TABLE/CELL structure.
#[derive(Debug)]
pub struct TableExtractor;

impl TableExtractor {
    /// Extract well-formed data rows from every TABLE block.
    ///
    /// Tables are processed in response order and their rows concatenated;
    /// within a table, rows come out in row-index order. Returns an empty
    /// list when the response has no TABLE blocks or none of their rows are
    /// well formed — the caller decides whether to fall back to positional
    /// extraction (see [`crate::pipeline::extract_rows`]).
    pub fn extract(
        index: &BlockIndex<'_>,
        words: &WordResolver<'_>,
        config: &ExtractConfig,
    ) -> Vec<TableRow> {
        let mut rows = Vec::new();

        for table in index.of_type(BlockType::Table) {
            log::debug!("processing table {}", table.id);

            // row index -> column index -> cell text
            let mut grid: BTreeMap<u32, BTreeMap<u32, String>> = BTreeMap::new();

            for cell in table
                .child_ids()
                .filter_map(|id| index.get(id))
                .filter(|b| b.block_type == BlockType::Cell)
            {
                let text = words.join_any(cell.child_ids()).trim().to_string();
                let row = cell.row_index.unwrap_or(0);
                let col = cell.column_index.unwrap_or(0);
                grid.entry(row).or_default().insert(col, text);
            }

            for (row_num, columns) in &grid {
                if *row_num == config.header_row {
                    continue;
                }
                let (Some(description), Some(limit), Some(premium)) =
                    (columns.get(&1), columns.get(&2), columns.get(&3))
                else {
                    continue;
                };
                if description.is_empty() || limit.is_empty() || premium.is_empty() {
                    continue;
                }
                if config.is_header_label(description) {
                    continue;
                }
                rows.push(TableRow {
                    description: description.clone(),
                    max_indemnity_limit: limit.clone(),
                    net_premium: premium.clone(),
                });
            }
        }

        rows
    }
}
