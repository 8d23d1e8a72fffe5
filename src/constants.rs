//! Constants shared by the tree algorithms and the command line tool.

/// Joins an attribute name and one of its values
/// in the keys of a persisted tree.
pub const SEPARATOR: &str = "__";

/// Number of spaces per nesting level of the if-then rules.
pub const TABS_PER_LINE: usize = 4;

/// Default label of the positive class.
pub const DEFAULT_POSITIVE_LABEL: &str = ">50K";
/// Default label of the negative class.
pub const DEFAULT_NEGATIVE_LABEL: &str = "<=50K";

/// Default file of a grown tree.
pub const TREE_FILE_NAME:        &str = "id3_tree.json";
/// Default file of a pruned tree.
pub const TREE_PRUNED_FILE_NAME: &str = "id3_pruned_tree.json";
/// Default file of the if-then rules.
pub const IFTHEN_FILE_PATH:      &str = "ifthen.txt";

/// Default number of cross validation folds.
pub const DEFAULT_N_FOLDS: usize = 10;
/// Default seed of the fold partition.
pub const DEFAULT_SEED:    u64   = 1234;

/// Marker of an unknown value in the raw data files.
pub const DEFAULT_UNKNOWN_FLAG: &str = "?";

/// Width of the numbers in the console reports.
pub const PRINT_WIDTH: usize = 9;
