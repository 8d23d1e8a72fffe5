//! Reads/writes decision trees as JSON.
//!
//! A leaf is stored as its bare label.
//! An internal node is stored as an object whose keys join
//! the splitting attribute and each value with [`SEPARATOR`]:
//! ```text
//! {"Outlook__Overcast": "Yes", "Outlook__Sunny": {"Humidity__High": "No", ...}, ...}
//! ```
use serde::{Serialize, Deserialize};

use crate::Node;
use crate::constants::SEPARATOR;
use crate::error::{Error, Result};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;


/// The JSON shape of a [`Node`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Leaf(String),
    Internal(BTreeMap<String, RawNode>),
}


impl TryFrom<&Node> for RawNode {
    type Error = Error;
    fn try_from(node: &Node) -> Result<Self> {
        match node {
            Node::Leaf { label } => Ok(RawNode::Leaf(label.clone())),
            Node::Internal { attribute, children } => {
                if attribute.contains(SEPARATOR) {
                    return Err(Error::Parameters(format!(
                        "attribute `{attribute}` contains \
                         the separator `{SEPARATOR}`"
                    )));
                }
                let mut raw = BTreeMap::new();
                for (value, child) in children {
                    if value.contains(SEPARATOR) {
                        return Err(Error::Parameters(format!(
                            "value `{value}` of `{attribute}` contains \
                             the separator `{SEPARATOR}`"
                        )));
                    }
                    let key = format!("{attribute}{SEPARATOR}{value}");
                    raw.insert(key, RawNode::try_from(child)?);
                }
                Ok(RawNode::Internal(raw))
            },
        }
    }
}


impl TryFrom<RawNode> for Node {
    type Error = String;
    fn try_from(raw: RawNode) -> std::result::Result<Self, Self::Error> {
        let raw = match raw {
            RawNode::Leaf(label) => { return Ok(Node::leaf(label)); },
            RawNode::Internal(raw) => raw,
        };

        let mut attribute: Option<String> = None;
        let mut children = BTreeMap::new();
        for (key, child) in raw {
            let (attr, value) = key.split_once(SEPARATOR)
                .ok_or_else(|| {
                    format!("key `{key}` has no separator `{SEPARATOR}`")
                })?;

            match attribute.as_deref() {
                None => { attribute = Some(attr.to_string()); },
                Some(a) if a == attr => {},
                Some(a) => {
                    return Err(format!(
                        "a node splits on both `{a}` and `{attr}`"
                    ));
                },
            }
            children.insert(value.to_string(), Node::try_from(child)?);
        }

        let attribute = attribute
            .ok_or_else(|| "an internal node has no child".to_string())?;
        Ok(Node::internal(attribute, children))
    }
}


/// Encodes `tree` as a JSON string.
/// Fails if an attribute or a value contains [`SEPARATOR`].
pub fn to_json_string(tree: &Node) -> Result<String> {
    let raw = RawNode::try_from(tree)?;
    Ok(serde_json::to_string(&raw)?)
}


/// Decodes a tree from a JSON string.
pub fn from_json_str(json: &str) -> Result<Node> {
    let raw = serde_json::from_str::<RawNode>(json)?;
    Node::try_from(raw).map_err(Error::MalformedTree)
}


/// Writes `tree` to `path` as JSON.
pub fn save_tree<P: AsRef<Path>>(tree: &Node, path: P) -> Result<()> {
    let json = to_json_string(tree)?;
    fs::write(path, json)?;
    Ok(())
}


/// Reads a tree written by [`save_tree`].
/// A missing or corrupt file results in `Error::Persistence`.
pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<Node> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| Error::persistence(path, e))?;
    from_json_str(&json)
        .map_err(|e| Error::persistence(path, e))
}
