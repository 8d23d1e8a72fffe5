//! Defines the inner representation
//! of the decision tree.
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


/// Enumeration of the internal nodes and the leaves.
#[derive(Clone, PartialEq, Eq)]
pub enum Node {
    /// A node that splits on `attribute`.
    /// `children` has one entry per value of `attribute`
    /// observed by the rows that reached this node.
    Internal {
        /// Name of the splitting attribute.
        attribute: String,
        /// Sub-trees keyed by the attribute value.
        children: BTreeMap<String, Node>,
    },
    /// A node that predicts `label`.
    Leaf {
        /// The predicted decision value.
        label: String,
    },
}


impl Node {
    /// Construct a leaf node that predicts `label`.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into() }
    }


    /// Construct an internal node.
    pub fn internal<S: Into<String>>(
        attribute: S,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Self::Internal { attribute: attribute.into(), children, }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the predicted label if `self` is a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf { label } => Some(label),
            Self::Internal { .. } => None,
        }
    }


    /// Returns the splitting attribute if `self` is an internal node.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Internal { attribute, .. } => Some(attribute),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the child reached by `value`, if any.
    pub fn child<S: AsRef<str>>(&self, value: S) -> Option<&Node> {
        match self {
            Self::Internal { children, .. } => children.get(value.as_ref()),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Internal { children, .. } => {
                children.values().map(Node::leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Internal { children, .. } => {
                1 + children.values().map(Node::depth).max().unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        Ok(())
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Internal { attribute, children } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal { attribute, children } => {
                f.debug_struct("Internal")
                    .field("attribute", &attribute)
                    .field("children", &children)
                    .finish()
            },
            Self::Leaf { label } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}
