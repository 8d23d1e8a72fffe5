//! Converts a decision tree into nested if-then rules.
use crate::{Record, Schema};
use crate::constants::TABS_PER_LINE;
use super::{
    classifier::Classifier,
    node::Node,
};

use std::cmp::Ordering;
use std::fs;
use std::path::Path;


/// Writes a tree as nested `IF attribute == value` / `THEN label` lines.
///
/// At each internal node, the branches are listed in descending accuracy
/// of their sub-trees on the reference rows that take the branch.
/// The order does not change the meaning of the rules.
///
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
///
/// # let schema = Schema::with_last_decision(vec!["x", "class"]).unwrap();
/// # let rows: Vec<Record> = Vec::new();
/// # let tree = Node::leaf("No");
/// let rules = RuleExtractor::new(&schema)
///     .extract(&tree, &rows);
/// println!("{rules}");
/// ```
pub struct RuleExtractor<'a> {
    classifier: Classifier<'a>,
    indent: usize,
}


impl<'a> RuleExtractor<'a> {
    /// Construct a new instance of [`RuleExtractor`].
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            classifier: Classifier::new(schema),
            indent: TABS_PER_LINE,
        }
    }


    /// Set the number of spaces per nesting level.
    /// Default value is `4`.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }


    /// Returns the rules of `tree`,
    /// ordering the branches with the reference `rows`.
    pub fn extract(&self, tree: &Node, rows: &[Record]) -> String {
        let mut rules = String::new();
        self.write_rules(tree, rows.iter().collect(), 0, &mut rules);
        rules
    }


    /// Writes the rules of `tree` to `path`.
    pub fn to_file<P>(&self, tree: &Node, rows: &[Record], path: P)
        -> std::io::Result<()>
        where P: AsRef<Path>
    {
        fs::write(path, self.extract(tree, rows))
    }


    fn write_rules(
        &self,
        node: &Node,
        rows: Vec<&Record>,
        depth: usize,
        rules: &mut String,
    )
    {
        let prefix = " ".repeat(self.indent * depth);

        let (attribute, children) = match node {
            Node::Leaf { label } => {
                rules.push_str(&format!("{prefix}THEN {label}\n"));
                return;
            },
            Node::Internal { attribute, children } => (attribute, children),
        };

        let position = self.classifier.schema().position(attribute);

        let mut branches = children.iter()
            .map(|(value, child)| {
                let subset = rows.iter()
                    .copied()
                    .filter(|row| {
                        position.and_then(|i| row.get(i)) == Some(value)
                    })
                    .collect::<Vec<_>>();

                let evaluation = self.classifier
                    .evaluate(child, subset.iter().copied());
                let accuracy = if evaluation.total() == 0 {
                    0f64
                } else {
                    evaluation.accuracy()
                };

                (accuracy, value, child, subset)
            })
            .collect::<Vec<_>>();

        // Stable sort keeps the child order on ties.
        branches.sort_by(|a, b| {
            b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal)
        });

        for (_, value, child, subset) in branches {
            rules.push_str(&format!("{prefix}IF {attribute} == {value}\n"));
            self.write_rules(child, subset, depth + 1, rules);
        }
    }
}
