#![warn(missing_docs)]

//!
//! A crate that grows, prunes, and validates ID3 decision trees
//! over categorical data.
//!
//! Every value of a data file is a string,
//! and one column of the file is the binary decision.
//! Continuous columns should be discretized beforehand
//! (see [`tools::MedianBinning`]).
//!
//! - Induction
//!     [`DecisionTree`] splits on the attribute with the maximal
//!     information gain until the rows are pure
//!     or no attribute reduces the entropy.
//!
//! - Classification
//!     [`Classifier`] walks a tree for each record.
//!     A record whose value was never seen at a node is
//!     [`Prediction::Unresolved`] and counts as a miss.
//!
//! - Pruning, validation, and rules
//!     [`ReducedErrorPruning`] collapses sub-trees that do not
//!     help on held-out rows,
//!     [`research::CrossValidation`] runs k-fold cross validation,
//!     and [`RuleExtractor`] writes a tree as nested if-then rules.

pub mod constants;
pub mod error;
pub mod sample;
pub mod decision_tree;
pub mod persistence;
pub mod research;
pub mod tools;
pub mod prelude;

pub(crate) mod common;


pub use error::{Error, Result};

pub use sample::{
    SampleReader,
    Schema,
    Record,
    Dataset,
    read_table,
    write_table,
};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    Classifier,
    Evaluation,
    Prediction,
    Node,
    ReducedErrorPruning,
    RuleExtractor,
};

pub use persistence::{save_tree, load_tree};
