//! Exports the standard structs and functions.
//!
pub use crate::sample::{
    SampleReader,
    Schema,
    Record,
    Dataset,
};


pub use crate::decision_tree::{
    // Induction
    DecisionTree,
    DecisionTreeBuilder,


    // Classification
    Classifier,
    Evaluation,
    Prediction,
    Node,


    // Post-processing
    ReducedErrorPruning,
    RuleExtractor,
};


pub use crate::persistence::{
    save_tree,
    load_tree,
};


pub use crate::error::{Error, Result};
