//! Property tests for normalization and extractor determinism.

use policy_extract::key_value::{normalize_key, KeyValueExtractor};
use policy_extract::{BlockGraph, BlockIndex, WordResolver};
use proptest::prelude::*;

fn pair_graph(pairs: &[(String, String)]) -> BlockGraph {
    let mut blocks = Vec::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        blocks.push(serde_json::json!({
            "Id": format!("k{}", i), "BlockType": "KEY_VALUE_SET",
            "EntityTypes": ["KEY"],
            "Relationships": [
                {"Type": "CHILD", "Ids": [format!("kw{}", i)]},
                {"Type": "VALUE", "Ids": [format!("v{}", i)]}
            ]
        }));
        blocks.push(serde_json::json!({
            "Id": format!("v{}", i), "BlockType": "KEY_VALUE_SET",
            "EntityTypes": ["VALUE"],
            "Relationships": [{"Type": "CHILD", "Ids": [format!("vw{}", i)]}]
        }));
        blocks.push(serde_json::json!({
            "Id": format!("kw{}", i), "BlockType": "WORD", "Text": key
        }));
        blocks.push(serde_json::json!({
            "Id": format!("vw{}", i), "BlockType": "WORD", "Text": value
        }));
    }
    serde_json::from_value(serde_json::json!({ "Blocks": blocks })).unwrap()
}

proptest! {
    #[test]
    fn normalized_keys_have_no_colons(raw in ".*") {
        let normalized = normalize_key(&raw);
        prop_assert!(!normalized.contains(':'));
    }

    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn key_value_extraction_is_deterministic(
        pairs in proptest::collection::vec(
            ("[A-Za-z]{1,12}:?", "[A-Za-z0-9 /,.$]{0,16}"),
            0..6,
        )
    ) {
        let graph = pair_graph(&pairs);
        let index = BlockIndex::build(&graph).unwrap();
        let words = WordResolver::build(&index);
        let first = KeyValueExtractor::extract(&index, &words);
        let second = KeyValueExtractor::extract(&index, &words);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn extracted_keys_are_normalized(
        pairs in proptest::collection::vec(
            ("[A-Za-z]{1,12}:?", "[A-Za-z0-9 ]{0,16}"),
            1..6,
        )
    ) {
        let graph = pair_graph(&pairs);
        let index = BlockIndex::build(&graph).unwrap();
        let words = WordResolver::build(&index);
        let map = KeyValueExtractor::extract(&index, &words);
        for key in map.keys() {
            prop_assert!(!key.contains(':'));
            prop_assert_eq!(key.trim(), key.as_str());
        }
    }
}

#[test]
fn normalize_strips_colon_and_whitespace() {
    assert_eq!(normalize_key("Nome: "), "Nome");
}
