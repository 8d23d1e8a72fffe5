use colored::Colorize;

use crate::{Record, Schema};
use crate::common::checker;

use super::{
    criterion::*,
    node::Node,
};

use std::collections::BTreeMap;


/// Grows an ID3 decision tree over categorical records.
/// The tree splits on the attribute with the maximal information gain
/// until the rows are pure or no attribute has a positive gain.
///
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
///
/// let dataset = SampleReader::new()
///     .header_file("playtennis_headers.txt")
///     .data_file("play_tennis.txt")
///     .read()
///     .unwrap();
/// let dtree = DecisionTreeBuilder::new(dataset.schema())
///     .positive("Yes")
///     .negative("No")
///     .build();
/// let tree = dtree.fit(dataset.rows().to_vec());
/// println!("{tree:?}");
/// ```
pub struct DecisionTree<'a> {
    schema: &'a Schema,
    positive: String,
    negative: String,
    verbose: bool,
}


impl<'a> DecisionTree<'a> {
    #[inline]
    pub(super) fn from_components(
        schema: &'a Schema,
        positive: String,
        negative: String,
        verbose: bool,
    ) -> Self
    {
        Self { schema, positive, negative, verbose, }
    }


    /// Returns the schema of the training rows.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }


    /// Returns the label of the positive class.
    pub fn positive(&self) -> &str {
        &self.positive
    }


    /// Returns the label of the negative class.
    pub fn negative(&self) -> &str {
        &self.negative
    }


    /// Entropy of the decision column over `rows`.
    pub fn entropy_of(&self, rows: &[Record]) -> f64 {
        total_entropy(
            rows,
            &self.positive,
            &self.negative,
            self.schema.decision_index(),
        )
    }


    /// Grows a decision tree from `rows`.
    /// The rows are consumed;
    /// clone them beforehand if you need them again.
    ///
    /// `rows` must not be empty.
    pub fn fit(&self, rows: Vec<Record>) -> Node {
        checker::check_rows(&rows);
        let entropy = self.entropy_of(&rows);
        self.full_tree(rows, entropy, 0)
    }


    /// Construct a tree that splits `rows` until
    /// no attribute reduces the entropy.
    fn full_tree(&self, rows: Vec<Record>, entropy: f64, depth: usize)
        -> Node
    {
        let decision_index = self.schema.decision_index();

        if let Some(label) = unanimous_label(&rows, decision_index) {
            return Node::leaf(label);
        }

        let table = information_gain(
            self.schema.names(),
            entropy,
            &rows[..],
            &self.positive,
            decision_index,
        );

        let (attribute, index, gain) = match table.best() {
            Some(best) => (best.attribute.clone(), best.index, best.gain),
            None => {
                return Node::leaf(self.majority_label(&rows));
            },
        };

        let n_rows = rows.len();

        // Move each row into the partition of its value.
        let mut partitions: BTreeMap<String, Vec<Record>> = BTreeMap::new();
        for row in rows {
            partitions.entry(row[index].clone())
                .or_default()
                .push(row);
        }

        // A split must shrink the rows.
        // Labels other than the positive/negative pair can give
        // a positive gain to an attribute with a single value.
        if partitions.len() < 2 {
            let rows = partitions.into_values().flatten().collect::<Vec<_>>();
            return Node::leaf(self.majority_label(&rows));
        }

        if self.verbose {
            println!(
                "{}    {}    {}    {}",
                format!("  [DEPTH {depth: >3}]").bold().red(),
                format!("[SPLIT {attribute}]").bold().green(),
                format!("[GAIN {gain:.5}]").bold().yellow(),
                format!("[ROWS {n_rows}]").bold().cyan(),
            );
        }

        let children = partitions.into_iter()
            .map(|(value, part)| {
                let entropy = self.entropy_of(&part);
                let child = self.full_tree(part, entropy, depth + 1);
                (value, child)
            })
            .collect::<BTreeMap<_, _>>();

        Node::internal(attribute, children)
    }


    /// Returns the label that appears most in `rows`.
    /// The rows not labeled positive count as negative,
    /// and ties go to the positive label.
    fn majority_label(&self, rows: &[Record]) -> String {
        let decision_index = self.schema.decision_index();
        let n_positive = rows.iter()
            .filter(|row| row[decision_index] == self.positive)
            .count();
        let n_negative = rows.len() - n_positive;

        if n_positive >= n_negative {
            self.positive.clone()
        } else {
            self.negative.clone()
        }
    }
}


/// Returns the decision value if every row has the same one.
fn unanimous_label(rows: &[Record], decision_index: usize)
    -> Option<String>
{
    let (first, rest) = rows.split_first()?;
    let label = &first[decision_index];
    rest.iter()
        .all(|row| &row[decision_index] == label)
        .then(|| label.clone())
}
