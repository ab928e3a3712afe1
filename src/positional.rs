//! Positional fallback extraction.
//!
//! Some scanned policies render the coverage table without any structure the
//! analysis service recognizes as a TABLE; the rows exist only as visually
//! aligned LINE blocks. This extractor recovers them by anchoring on the
//! expected coverage descriptions and reading values off lines at the same
//! height to the right.
//!
//! This is a best-effort heuristic: it emits default placeholders for values
//! it cannot find and silently skips items with no textual match. It never
//! fails.

use crate::block::{Block, BlockType};
use crate::config::ExtractConfig;
use crate::geometry::BoundingBox;
use crate::index::BlockIndex;
use crate::table::TableRow;

/// Coverage line items of the stock policy layout, in table order.
///
/// Callers with a different product mix pass their own list; this constant
/// reproduces the layout the heuristic was calibrated against.
pub const EXPECTED_ITEMS: [&str; 13] = [
    "Colisão, Incêndio e Roubo/Furto",
    "Despesa extraordinária",
    "RCF-V - Danos Materiais",
    "RCF-V - Danos Corporais",
    "RCF-V - Danos Morais",
    "APP - Morte (por passageiro)",
    "APP - Invalidez permanente (por passageiro)",
    "APP - DMHO (por passageiro)",
    "Assistência 24 horas",
    "Km adicional de reboque",
    "Kit Gás",
    "Blindagem",
    "Extensão para Garantia de 0km",
];

/// A LINE block flattened to what the heuristic needs.
#[derive(Debug, Clone, Copy)]
struct PositionedLine<'g> {
    text: &'g str,
    page: u32,
    bbox: BoundingBox,
}

/// Recovers table rows by geometric alignment when no TABLE was detected.
#[derive(Debug)]
pub struct PositionalFallbackExtractor;

impl PositionalFallbackExtractor {
    /// Locate each expected item and infer its limit and premium from lines
    /// on the same visual row.
    ///
    /// Rows come out in `expected_items` order, not document order. Items
    /// with no matching line anywhere in the graph produce no row.
    pub fn extract(
        index: &BlockIndex<'_>,
        expected_items: &[&str],
        config: &ExtractConfig,
    ) -> Vec<TableRow> {
        let mut lines: Vec<PositionedLine<'_>> = index
            .of_type(BlockType::Line)
            .filter_map(positioned)
            .collect();
        lines.sort_by(|a, b| {
            a.page
                .cmp(&b.page)
                .then_with(|| a.bbox.top.total_cmp(&b.bbox.top))
                .then_with(|| a.bbox.left.total_cmp(&b.bbox.left))
        });

        let mut rows = Vec::new();

        for item in expected_items {
            let needle = item.to_lowercase();
            let Some(anchor) = lines
                .iter()
                .find(|line| line.text.to_lowercase().contains(&needle))
            else {
                log::debug!("no line matches expected item {:?}, skipping", item);
                continue;
            };

            let mut values: Vec<&PositionedLine<'_>> = lines
                .iter()
                .filter(|line| {
                    line.page == anchor.page
                        && line.bbox.is_same_row(&anchor.bbox, config.row_tolerance)
                        && line.bbox.is_right_of(&anchor.bbox)
                })
                .collect();
            values.sort_by(|a, b| a.bbox.left.total_cmp(&b.bbox.left));

            let limit = values
                .first()
                .map(|line| line.text.to_string())
                .unwrap_or_else(|| config.default_limit.clone());
            let premium = values
                .get(1)
                .map(|line| line.text.to_string())
                .unwrap_or_else(|| config.default_premium.clone());

            rows.push(TableRow {
                description: item.to_string(),
                max_indemnity_limit: limit,
                net_premium: premium,
            });
        }

        rows
    }
}

/// Flatten a LINE block; lines without text, page, or geometry are unusable.
fn positioned(block: &Block) -> Option<PositionedLine<'_>> {
    Some(PositionedLine {
        text: block.text.as_deref()?,
        page: block.page?,
        bbox: *block.bbox()?,
    })
}
