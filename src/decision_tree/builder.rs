use crate::Schema;
use crate::common::checker;
use crate::constants::{
    DEFAULT_POSITIVE_LABEL,
    DEFAULT_NEGATIVE_LABEL,
};
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use id3tree::prelude::*;
///
/// # let schema = Schema::with_last_decision(vec!["x", "class"]).unwrap();
/// let dtree = DecisionTreeBuilder::new(&schema)
///     .positive("Yes")
///     .negative("No")
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    schema: &'a Schema,
    positive: String,
    negative: String,
    verbose: bool,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// positive: DEFAULT_POSITIVE_LABEL == ">50K",
    /// negative: DEFAULT_NEGATIVE_LABEL == "<=50K",
    /// verbose: false,
    /// ```
    /// The decision column is the one of `schema`.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            positive: DEFAULT_POSITIVE_LABEL.to_string(),
            negative: DEFAULT_NEGATIVE_LABEL.to_string(),
            verbose: false,
        }
    }


    /// Set the label of the positive class.
    pub fn positive<S: Into<String>>(mut self, label: S) -> Self {
        self.positive = label.into();
        self
    }


    /// Set the label of the negative class.
    pub fn negative<S: Into<String>>(mut self, label: S) -> Self {
        self.negative = label.into();
        self
    }


    /// If `true`, `DecisionTree` prints each split.
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        checker::check_labels(&self.positive, &self.negative);
        DecisionTree::from_components(
            self.schema, self.positive, self.negative, self.verbose,
        )
    }
}
