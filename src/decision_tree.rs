//! The ID3 decision tree: induction, classification,
//! reduced-error pruning, and rule extraction.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the classifier that walks the trees.
pub mod classifier;
/// Defines the entropy and the information gain.
pub mod criterion;
/// Defines the reduced-error pruning.
pub mod pruning;
/// Defines the if-then rule extraction.
pub mod rules;

mod node;


pub use builder::DecisionTreeBuilder;
pub use classifier::{Classifier, Evaluation, Prediction};
pub use criterion::{
    entropy,
    total_entropy,
    information_gain,
    AttributeGain,
    InformationGainTable,
};
pub use dtree::DecisionTree;
pub use node::Node;
pub use pruning::ReducedErrorPruning;
pub use rules::RuleExtractor;
