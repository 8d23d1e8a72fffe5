//! Defines the decision tree classifier.
use crate::{Record, Schema};
use crate::common::checker;
use super::node::Node;

use std::collections::HashMap;
use std::fmt;


/// Result of classifying a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<'t> {
    /// The label of the reached leaf.
    Label(&'t str),
    /// The record reached an internal node
    /// that has no child for its value.
    Unresolved,
}


impl<'t> Prediction<'t> {
    /// Returns the predicted label, if any.
    pub fn label(&self) -> Option<&'t str> {
        match *self {
            Self::Label(label) => Some(label),
            Self::Unresolved => None,
        }
    }


    /// Returns `true` if the record reached a leaf.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Label(_))
    }
}


/// Number of correctly/incorrectly classified rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Number of correctly classified rows.
    pub success: usize,
    /// Number of misclassified or unresolved rows.
    pub errors: usize,
}


impl Evaluation {
    /// Returns the number of evaluated rows.
    pub fn total(&self) -> usize {
        self.success + self.errors
    }


    /// Returns the ratio of the correctly classified rows.
    /// The evaluation must cover at least one row.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        assert!(total > 0, "accuracy over zero rows is undefined");
        self.success as f64 / total as f64
    }
}


impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accuracy = if self.total() == 0 { 0f64 } else { self.accuracy() };
        write!(
            f,
            "Total {} Success {} Errors {} Accuracy {}",
            self.total(), self.success, self.errors, accuracy,
        )
    }
}


/// Classifies records of a fixed [`Schema`] with decision trees.
///
/// The classifier owns the lookup from attribute names
/// to schema positions, so the same instance can score
/// many trees (e.g., the candidate trees of pruning).
pub struct Classifier<'a> {
    schema: &'a Schema,
    positions: HashMap<&'a str, usize>,
}


impl<'a> Classifier<'a> {
    /// Construct a new instance of [`Classifier`].
    pub fn new(schema: &'a Schema) -> Self {
        let mut positions = HashMap::new();
        for (i, name) in schema.names().iter().enumerate() {
            positions.entry(name.as_str()).or_insert(i);
        }
        Self { schema, positions }
    }


    /// Returns the schema.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }


    /// Walks `tree` from the root and returns the label of the reached leaf.
    /// Returns `Prediction::Unresolved` if the walk reaches an internal node
    /// that has no child for the value of `record`.
    pub fn classify<'t>(&self, tree: &'t Node, record: &Record)
        -> Prediction<'t>
    {
        let mut node = tree;
        loop {
            match node {
                Node::Leaf { label } => {
                    return Prediction::Label(label);
                },
                Node::Internal { attribute, children } => {
                    let next = self.positions.get(attribute.as_str())
                        .and_then(|&i| record.get(i))
                        .and_then(|value| children.get(value));
                    match next {
                        Some(child) => { node = child; },
                        None => { return Prediction::Unresolved; },
                    }
                },
            }
        }
    }


    /// Returns `true` if `tree` predicts the decision value of `record`.
    #[inline]
    pub fn is_correct(&self, tree: &Node, record: &Record) -> bool {
        let truth = record.get(self.schema.decision_index());
        match (self.classify(tree, record), truth) {
            (Prediction::Label(label), Some(truth)) => label == truth,
            _ => false,
        }
    }


    /// Counts the rows that `tree` classifies correctly.
    /// Unresolved rows count as errors.
    pub fn evaluate<'r, I>(&self, tree: &Node, rows: I) -> Evaluation
        where I: IntoIterator<Item = &'r Record>
    {
        let mut evaluation = Evaluation::default();
        for row in rows {
            if self.is_correct(tree, row) {
                evaluation.success += 1;
            } else {
                evaluation.errors += 1;
            }
        }
        evaluation
    }


    /// Returns the ratio of `rows` that `tree` classifies correctly.
    ///
    /// `rows` must not be empty.
    pub fn accuracy(&self, tree: &Node, rows: &[Record]) -> f64 {
        checker::check_rows(rows);
        self.evaluate(tree, rows).accuracy()
    }


    /// Predicts the labels of `rows`.
    pub fn predict_all<'t>(&self, tree: &'t Node, rows: &[Record])
        -> Vec<Prediction<'t>>
    {
        rows.iter()
            .map(|row| self.classify(tree, row))
            .collect()
    }
}
