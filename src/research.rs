//! This directory provides some features for research
//! - Cross validation of the decision tree
//! - Console reports of the accuracy

/// Provides the k-fold cross validation.
pub mod cross_validation;

/// Prints the evaluation results.
pub mod report;

pub use cross_validation::{CrossValidation, FoldReport};
pub use report::{print_accuracy, print_folds, mean_accuracy};
