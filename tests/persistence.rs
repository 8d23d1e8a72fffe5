use id3tree::prelude::*;
use id3tree::persistence::{from_json_str, to_json_string};

use std::collections::BTreeMap;


fn path(name: &str) -> std::path::PathBuf {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset");
    path.push(name);
    path
}


fn weather_tree() -> Node {
    let dataset = SampleReader::new()
        .header_file(path("playtennis_headers.txt"))
        .data_file(path("play_tennis.txt"))
        .read()
        .unwrap();
    DecisionTreeBuilder::new(dataset.schema())
        .positive("Yes")
        .negative("No")
        .build()
        .fit(dataset.rows().to_vec())
}


#[test]
fn save_and_load() {
    let tree = weather_tree();
    let file = std::env::temp_dir().join("id3tree_weather_tree.json");

    save_tree(&tree, &file).unwrap();
    let loaded = load_tree(&file).unwrap();
    assert_eq!(loaded, tree);
}


#[test]
fn keys_join_attribute_and_value() {
    let json = to_json_string(&weather_tree()).unwrap();
    assert!(json.contains("\"Outlook__Overcast\":\"Yes\""));
    assert!(json.contains("\"Humidity__High\":\"No\""));
    assert!(json.contains("\"Wind__Weak\":\"Yes\""));
}


#[test]
fn parse_internal_node() {
    let tree = from_json_str(
        r#"{"Outlook__Sunny": "No", "Outlook__Rain": "Yes"}"#
    ).unwrap();

    let children = BTreeMap::from([
        ("Sunny".to_string(), Node::leaf("No")),
        ("Rain".to_string(), Node::leaf("Yes")),
    ]);
    assert_eq!(tree, Node::internal("Outlook", children));
}


#[test]
fn parse_leaf() {
    let tree = from_json_str(r#""No""#).unwrap();
    assert_eq!(tree, Node::leaf("No"));
}


#[test]
fn value_keeps_later_separators() {
    let tree = from_json_str(r#"{"a__b__c": "No"}"#).unwrap();
    assert_eq!(tree.attribute(), Some("a"));
    assert_eq!(tree.child("b__c"), Some(&Node::leaf("No")));
}


#[test]
fn malformed_trees() {
    let inputs = [
        r#"{"Outlook__Sunny": "No", "Wind__Weak": "Yes"}"#,
        r#"{"Outlook": "No"}"#,
        r#"{}"#,
        r#"{"Outlook__Sunny": {}}"#,
    ];
    for input in inputs {
        let result = from_json_str(input);
        assert!(
            matches!(result, Err(Error::MalformedTree(_))),
            "{input} should be rejected"
        );
    }

    assert!(matches!(from_json_str("3"), Err(Error::Json(_))));
    assert!(matches!(from_json_str("{"), Err(Error::Json(_))));
}


#[test]
fn separator_in_value_cannot_be_encoded() {
    let children = BTreeMap::from([
        ("a__b".to_string(), Node::leaf("No")),
    ]);
    let tree = Node::internal("x", children);
    assert!(matches!(to_json_string(&tree), Err(Error::Parameters(_))));
}


#[test]
fn missing_file() {
    let file = std::env::temp_dir().join("id3tree_no_such_tree.json");
    let _ = std::fs::remove_file(&file);
    let result = load_tree(&file);
    assert!(matches!(result, Err(Error::Persistence { .. })));
}


#[test]
fn corrupt_file() {
    let file = std::env::temp_dir().join("id3tree_corrupt_tree.json");
    std::fs::write(&file, r#"{"Outlook": "No"}"#).unwrap();
    let result = load_tree(&file);
    match result {
        Err(Error::Persistence { path, .. }) => assert_eq!(path, file),
        other => panic!("unexpected result {other:?}"),
    }
}
