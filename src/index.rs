//! ID-indexed view of a block graph.
//!
//! The raw response references blocks only by ID, so every traversal needs
//! fast ID resolution. [`BlockIndex`] is built once per analysis call as a
//! pure function of the graph: an arena of blocks plus an id→position map and
//! a type→positions map. Dangling IDs resolve to `None` rather than failing;
//! extractors treat them as absent data.

use std::collections::HashMap;

use crate::block::{Block, BlockGraph, BlockType};
use crate::error::{Error, Result};

/// Fast lookup structures over one block graph.
#[derive(Debug)]
pub struct BlockIndex<'g> {
    blocks: &'g [Block],
    by_id: HashMap<&'g str, usize>,
    by_type: HashMap<BlockType, Vec<usize>>,
}

impl<'g> BlockIndex<'g> {
    /// Build the index over a graph.
    ///
    /// Fails only on structurally malformed input (a block with an empty ID);
    /// duplicate IDs keep the first occurrence, matching the first-match
    /// behavior of a linear scan over the response.
    pub fn build(graph: &'g BlockGraph) -> Result<Self> {
        let blocks = graph.blocks.as_slice();
        let mut by_id = HashMap::with_capacity(blocks.len());
        let mut by_type: HashMap<BlockType, Vec<usize>> = HashMap::new();

        for (pos, block) in blocks.iter().enumerate() {
            if block.id.is_empty() {
                return Err(Error::MalformedGraph(format!(
                    "block at position {} has an empty id",
                    pos
                )));
            }
            by_id.entry(block.id.as_str()).or_insert(pos);
            by_type.entry(block.block_type).or_default().push(pos);
        }

        log::debug!(
            "indexed {} blocks ({} tables, {} key/value sets)",
            blocks.len(),
            by_type.get(&BlockType::Table).map_or(0, Vec::len),
            by_type.get(&BlockType::KeyValueSet).map_or(0, Vec::len),
        );

        Ok(Self {
            blocks,
            by_id,
            by_type,
        })
    }

    /// Look up a block by ID. Unresolved IDs read as `None`.
    pub fn get(&self, id: &str) -> Option<&'g Block> {
        self.by_id.get(id).map(|&pos| &self.blocks[pos])
    }

    /// All blocks of the given type, in response order.
    pub fn of_type(&self, block_type: BlockType) -> impl Iterator<Item = &'g Block> + '_ {
        let blocks = self.blocks;
        self.by_type
            .get(&block_type)
            .into_iter()
            .flatten()
            .map(move |&pos| &blocks[pos])
    }

    /// All blocks, in response order.
    pub fn blocks(&self) -> &'g [Block] {
        self.blocks
    }
}
