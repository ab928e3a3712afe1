//! The block-graph data model.
//!
//! A document-analysis response is a flat collection of [`Block`]s that
//! reference each other only by ID. Blocks carry detected text, geometry,
//! entity markers for form key/value pairs, and typed relationships to other
//! blocks. The model is deliberately tolerant: every field except `Id` and
//! `BlockType` is optional on the wire, and unknown block, entity, or
//! relationship types deserialize into catch-all variants instead of failing
//! the whole response.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::BoundingBox;

/// The kind of structure a block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// A full page.
    Page,
    /// A single detected word.
    Word,
    /// A visual line of text (one or more words).
    Line,
    /// A form key or value marker; see [`EntityType`].
    KeyValueSet,
    /// A detected table.
    Table,
    /// One cell of a detected table.
    Cell,
    /// A checkbox or radio button.
    SelectionElement,
    /// Any block type this library does not interpret.
    #[serde(other)]
    Other,
}

/// Entity marker on a `KEY_VALUE_SET` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// The block is the key side of a form pair.
    Key,
    /// The block is the value side of a form pair.
    Value,
    /// Unrecognized entity marker.
    #[serde(other)]
    Other,
}

/// The kind of a directed reference between blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Compositional: the targets make up this block's content.
    Child,
    /// Key→value link from a KEY block to its VALUE block.
    Value,
    /// Unrecognized relationship kind.
    #[serde(other)]
    Other,
}

/// A typed, directed reference from one block to a list of target block IDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    /// The relationship kind.
    #[serde(rename = "Type")]
    pub relationship_type: RelationshipType,
    /// Target block IDs, in wire order.
    #[serde(default)]
    pub ids: Vec<String>,
}

/// Geometry wrapper as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Geometry {
    /// The block's bounding box in normalized page coordinates.
    pub bounding_box: BoundingBox,
}

/// An atomic unit of detected document structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Unique ID within one response.
    pub id: String,
    /// What kind of structure this block represents.
    pub block_type: BlockType,
    /// Detected text; present for WORD and LINE blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Detection confidence, 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Position on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Entity markers; only meaningful on KEY_VALUE_SET blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,
    /// Outgoing references to other blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
    /// 1-based row index; CELL blocks only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,
    /// 1-based column index; CELL blocks only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,
}

impl Block {
    /// The block's text, or `""` when absent.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// The block's bounding box, if geometry was reported.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.geometry.as_ref().map(|g| &g.bounding_box)
    }

    /// Whether this block carries the given entity marker.
    pub fn has_entity_type(&self, entity: EntityType) -> bool {
        self.entity_types.contains(&entity)
    }

    /// Target IDs of all relationships of the given kind, in wire order.
    pub fn related_ids(&self, kind: RelationshipType) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .filter(move |r| r.relationship_type == kind)
            .flat_map(|r| r.ids.iter().map(String::as_str))
    }

    /// Target IDs of CHILD relationships, in wire order.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.related_ids(RelationshipType::Child)
    }
}

/// The complete set of blocks for one document-analysis response.
///
/// The graph is read-only input: it is loaded once per analysis call and all
/// derived structures ([`crate::index::BlockIndex`],
/// [`crate::words::WordResolver`], extractor outputs) are rebuilt from it on
/// every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockGraph {
    /// All blocks, in response order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl BlockGraph {
    /// Parse a block graph from a raw JSON analysis response.
    ///
    /// Structurally unreadable JSON is the one hard failure in this library;
    /// it surfaces as [`crate::error::Error::Json`].
    pub fn from_json(raw: &str) -> Result<Self> {
        let graph: BlockGraph = serde_json::from_str(raw)?;
        Ok(graph)
    }

    /// Number of blocks in the response.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the response contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_word_block() {
        let graph = BlockGraph::from_json(
            r#"{"Blocks":[{"Id":"w1","BlockType":"WORD","Text":"Nome","Confidence":99.1,"Page":1}]}"#,
        )
        .unwrap();
        assert_eq!(graph.len(), 1);
        let block = &graph.blocks[0];
        assert_eq!(block.block_type, BlockType::Word);
        assert_eq!(block.text(), "Nome");
        assert_eq!(block.page, Some(1));
    }

    #[test]
    fn test_parse_key_value_set_with_relationships() {
        let graph = BlockGraph::from_json(
            r#"{"Blocks":[{
                "Id":"k1","BlockType":"KEY_VALUE_SET","EntityTypes":["KEY"],
                "Relationships":[
                    {"Type":"VALUE","Ids":["v1"]},
                    {"Type":"CHILD","Ids":["w1","w2"]}
                ]
            }]}"#,
        )
        .unwrap();
        let block = &graph.blocks[0];
        assert_eq!(block.block_type, BlockType::KeyValueSet);
        assert!(block.has_entity_type(EntityType::Key));
        let children: Vec<&str> = block.child_ids().collect();
        assert_eq!(children, vec!["w1", "w2"]);
        let values: Vec<&str> = block.related_ids(RelationshipType::Value).collect();
        assert_eq!(values, vec!["v1"]);
    }

    #[test]
    fn test_unknown_block_type_is_tolerated() {
        let graph = BlockGraph::from_json(
            r#"{"Blocks":[{"Id":"q1","BlockType":"QUERY_RESULT","Text":"42"}]}"#,
        )
        .unwrap();
        assert_eq!(graph.blocks[0].block_type, BlockType::Other);
    }

    #[test]
    fn test_unknown_relationship_type_is_tolerated() {
        let graph = BlockGraph::from_json(
            r#"{"Blocks":[{
                "Id":"t1","BlockType":"TABLE",
                "Relationships":[{"Type":"MERGED_CELL","Ids":["m1"]}]
            }]}"#,
        )
        .unwrap();
        let block = &graph.blocks[0];
        assert_eq!(block.child_ids().count(), 0);
        assert_eq!(
            block.relationships[0].relationship_type,
            RelationshipType::Other
        );
    }

    #[test]
    fn test_cell_indices() {
        let graph = BlockGraph::from_json(
            r#"{"Blocks":[{"Id":"c1","BlockType":"CELL","RowIndex":2,"ColumnIndex":3}]}"#,
        )
        .unwrap();
        let cell = &graph.blocks[0];
        assert_eq!(cell.row_index, Some(2));
        assert_eq!(cell.column_index, Some(3));
    }

    #[test]
    fn test_geometry_bbox() {
        let graph = BlockGraph::from_json(
            r#"{"Blocks":[{
                "Id":"l1","BlockType":"LINE","Text":"x","Page":1,
                "Geometry":{"BoundingBox":{"Left":0.1,"Top":0.2,"Width":0.3,"Height":0.04}}
            }]}"#,
        )
        .unwrap();
        let bbox = graph.blocks[0].bbox().unwrap();
        assert_eq!(bbox.left, 0.1);
        assert_eq!(bbox.top, 0.2);
    }

    #[test]
    fn test_empty_response() {
        let graph = BlockGraph::from_json(r#"{"Blocks":[]}"#).unwrap();
        assert!(graph.is_empty());

        // A response with no Blocks key at all is an empty graph too.
        let graph = BlockGraph::from_json("{}").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_unreadable_json_is_a_hard_error() {
        assert!(BlockGraph::from_json("not json at all").is_err());
    }
}
