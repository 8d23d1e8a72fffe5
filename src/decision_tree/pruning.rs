//! Defines the reduced-error pruning of decision trees.
use colored::Colorize;

use crate::{Record, Schema};
use crate::common::checker;
use super::{
    classifier::Classifier,
    dtree::DecisionTree,
    node::Node,
};

use std::mem;


/// Reduced-error pruning.
///
/// Visits the child slots of the tree depth-first.
/// For each slot holding an internal node, the whole tree is scored
/// on the validation rows with the slot replaced by
/// a positive leaf and by a negative leaf.
/// If neither replacement beats the current tree,
/// the sub-tree is kept and its children are visited.
/// Otherwise, the slot becomes the better leaf
/// (the positive one on ties).
///
/// This is a single pass. A collapse only depends on the rows
/// reaching the slot, and pruning the children of a kept slot only
/// raises its accuracy, so a second pass leaves the output unchanged.
pub struct ReducedErrorPruning<'a> {
    classifier: Classifier<'a>,
    positive: String,
    negative: String,
    train: Option<&'a [Record]>,
    verbose: bool,
}


impl<'a> ReducedErrorPruning<'a> {
    /// Construct a new instance of [`ReducedErrorPruning`].
    pub fn new<S>(schema: &'a Schema, positive: S, negative: S) -> Self
        where S: Into<String>
    {
        let positive = positive.into();
        let negative = negative.into();
        checker::check_labels(&positive, &negative);
        Self {
            classifier: Classifier::new(schema),
            positive,
            negative,
            train: None,
            verbose: false,
        }
    }


    /// Construct a pruner with the labels of `dtree`.
    pub fn from_tree(dtree: &DecisionTree<'a>) -> Self {
        Self::new(dtree.schema(), dtree.positive(), dtree.negative())
    }


    /// Set the training rows.
    /// They are only used to report the training accuracy
    /// after each collapse when `verbose` is `true`.
    pub fn train_rows(mut self, rows: &'a [Record]) -> Self {
        self.train = Some(rows);
        self
    }


    /// Set the verbose parameter.
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Prunes `tree` against `validation` and returns the pruned tree.
    /// The root node itself is never replaced.
    ///
    /// `validation` must not be empty.
    pub fn prune(&self, mut tree: Node, validation: &[Record]) -> Node {
        checker::check_rows(validation);
        let mut path = Vec::new();
        self.prune_children(&mut tree, &mut path, validation);
        tree
    }


    fn prune_children(
        &self,
        root: &mut Node,
        path: &mut Vec<String>,
        validation: &[Record],
    )
    {
        let values = match node_at(root, path) {
            Node::Internal { children, .. } => {
                children.keys().cloned().collect::<Vec<_>>()
            },
            Node::Leaf { .. } => { return; },
        };

        for value in values {
            path.push(value);

            if !node_at(root, path).is_leaf() {
                let baseline = self.classifier.accuracy(root, validation);

                let original = mem::replace(
                    node_at_mut(root, path), Node::leaf(&self.positive)
                );
                let positive = self.classifier.accuracy(root, validation);

                *node_at_mut(root, path) = Node::leaf(&self.negative);
                let negative = self.classifier.accuracy(root, validation);

                if baseline >= positive && baseline >= negative {
                    *node_at_mut(root, path) = original;
                    self.prune_children(root, path, validation);
                } else {
                    let label = if positive >= negative {
                        &self.positive
                    } else {
                        &self.negative
                    };
                    *node_at_mut(root, path) = Node::leaf(label);

                    if self.verbose {
                        self.print_collapse(root, path, positive.max(negative));
                    }
                }
            }

            path.pop();
        }
    }


    fn print_collapse(&self, root: &Node, path: &[String], accuracy: f64) {
        let train = self.train
            .filter(|rows| !rows.is_empty())
            .map(|rows| self.classifier.accuracy(root, rows));

        let train = match train {
            Some(acc) => format!("[TRAIN {acc:.5}]"),
            None => "[TRAIN -]".to_string(),
        };
        println!(
            "{}    {}    {}",
            format!("  [PRUNE depth {: >3}]", path.len()).bold().red(),
            train.bold().green(),
            format!("[TEST {accuracy:.5}]").bold().yellow(),
        );
    }
}


/// Returns the node reached by following `path` from `root`.
fn node_at<'n>(root: &'n Node, path: &[String]) -> &'n Node {
    path.iter()
        .fold(root, |node, value| {
            node.child(value)
                .expect("The pruning path follows existing children")
        })
}


/// Returns the node reached by following `path` from `root`.
fn node_at_mut<'n>(root: &'n mut Node, path: &[String]) -> &'n mut Node {
    path.iter()
        .fold(root, |node, value| {
            match node {
                Node::Internal { children, .. } => {
                    children.get_mut(value)
                        .expect("The pruning path follows existing children")
                },
                Node::Leaf { .. } => {
                    panic!("The pruning path passes through a leaf")
                },
            }
        })
}
