//! # policy_extract
//!
//! Structured data extraction from document-analysis block graphs.
//!
//! A document-understanding service turns a scanned insurance policy into a
//! flat graph of detected "blocks" — words, lines, form key/value markers,
//! tables, and cells — that reference each other by ID. This crate
//! interprets that graph:
//!
//! - **Key/value reconstruction**: form annotations become a cleaned
//!   key→value map ([`key_value::KeyValueExtractor`]).
//! - **Table reconstruction**: TABLE/CELL relationships become normalized
//!   coverage rows ([`table::TableExtractor`]).
//! - **Positional fallback**: when no table structure was detected, expected
//!   line items are located by text and their values inferred from
//!   geometric alignment ([`positional::PositionalFallbackExtractor`]).
//!
//! The interpreter is pure and synchronous: it owns no I/O, degrades
//! gracefully on partial or malformed input, and can run concurrently over
//! independent graphs.
//!
//! ## Quick start
//!
//! ```
//! use policy_extract::{analyze, BlockGraph, ExtractConfig, EXPECTED_ITEMS};
//!
//! # fn main() -> policy_extract::Result<()> {
//! let graph = BlockGraph::from_json(r#"{"Blocks":[]}"#)?;
//! let output = analyze(&graph, &EXPECTED_ITEMS, &ExtractConfig::default())?;
//! assert!(output.rows.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Block-graph model
pub mod block;
pub mod geometry;

// Derived lookup structures
pub mod index;
pub mod words;

// Extractors
pub mod key_value;
pub mod positional;
pub mod table;

// Two-stage orchestration
pub mod pipeline;

// Keyword search
pub mod search;

// Output boundary helpers
pub mod output;

// Configuration
pub mod config;

// Re-exports
pub use block::{Block, BlockGraph, BlockType, EntityType, Relationship, RelationshipType};
pub use config::ExtractConfig;
pub use error::{Error, Result};
pub use geometry::BoundingBox;
pub use index::BlockIndex;
pub use key_value::{KeyValueExtractor, KeyValueMap};
pub use pipeline::{analyze, extract_rows, AnalysisOutput};
pub use positional::{PositionalFallbackExtractor, EXPECTED_ITEMS};
pub use table::{TableExtractor, TableRow};
pub use words::WordResolver;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
