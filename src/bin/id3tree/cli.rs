//! Command line arguments of `id3tree`.
use clap::{Args, Parser, Subcommand};

use id3tree::constants::{
    DEFAULT_NEGATIVE_LABEL,
    DEFAULT_N_FOLDS,
    DEFAULT_POSITIVE_LABEL,
    DEFAULT_SEED,
    DEFAULT_UNKNOWN_FLAG,
    IFTHEN_FILE_PATH,
    TREE_FILE_NAME,
    TREE_PRUNED_FILE_NAME,
};

use std::path::PathBuf;


/// Grows, prunes and validates ID3 decision trees.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "id3tree", version, about)]
pub struct Cli {
    /// Action to execute
    #[command(subcommand)]
    pub command: Command,
}


/// Actions of `id3tree`
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Grow a tree on the data file and save it
    Train(TrainArgs),

    /// Report the accuracy of a saved tree on the data file
    Test(TestArgs),

    /// Grow a tree on the data file and prune it against a test file
    Prune(PruneArgs),

    /// Run k-fold cross validation on the data file
    Validate(ValidateArgs),

    /// Export a saved tree as if-then rules
    Rules(RulesArgs),

    /// Discretize continuous columns at their medians
    Discretize(DiscretizeArgs),
}


/// Arguments shared by the actions that read a data file.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct DataArgs {
    /// File whose first line holds the attribute names
    pub header: PathBuf,

    /// Comma-delimited data file
    pub data: PathBuf,

    /// Position of the decision column (default: the last column)
    #[arg(long)]
    pub decision_index: Option<usize>,

    /// Label of the positive class
    #[arg(long, default_value = DEFAULT_POSITIVE_LABEL)]
    pub positive: String,

    /// Label of the negative class
    #[arg(long, default_value = DEFAULT_NEGATIVE_LABEL)]
    pub negative: String,

    /// Print progress information
    #[arg(short, long)]
    pub verbose: bool,
}


#[derive(Args, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Where to save the tree
    #[arg(short, long, default_value = TREE_FILE_NAME)]
    pub output: PathBuf,

    /// Also write the tree in Graphviz dot format
    #[arg(long)]
    pub dot: Option<PathBuf>,
}


#[derive(Args, Debug, Clone, PartialEq)]
pub struct TestArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Saved tree to evaluate (use the pruned tree file for a pruned tree)
    #[arg(short, long, default_value = TREE_FILE_NAME)]
    pub tree: PathBuf,
}


#[derive(Args, Debug, Clone, PartialEq)]
pub struct PruneArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Held-out file used as the pruning validation set
    #[arg(long)]
    pub test: PathBuf,

    /// Where to save the pruned tree
    #[arg(short, long, default_value = TREE_PRUNED_FILE_NAME)]
    pub output: PathBuf,
}


#[derive(Args, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of folds
    #[arg(short = 'k', long, default_value_t = DEFAULT_N_FOLDS)]
    pub folds: usize,

    /// Seed of the fold partition
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}


#[derive(Args, Debug, Clone, PartialEq)]
pub struct RulesArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Saved tree to export
    #[arg(short, long, default_value = TREE_FILE_NAME)]
    pub tree: PathBuf,

    /// Where to write the rules
    #[arg(short, long, default_value = IFTHEN_FILE_PATH)]
    pub output: PathBuf,
}


#[derive(Args, Debug, Clone, PartialEq)]
pub struct DiscretizeArgs {
    /// Raw comma-delimited data file
    pub input: PathBuf,

    /// Where to write the discretized rows
    pub output: PathBuf,

    /// Rows containing this value are dropped
    #[arg(long, default_value = DEFAULT_UNKNOWN_FLAG)]
    pub unknown: String,

    /// Positions of the continuous columns
    #[arg(long, value_delimiter = ',', default_value = "0,2,4,10,11,12")]
    pub columns: Vec<usize>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validate() {
        let cli = Cli::try_parse_from([
            "id3tree", "validate", "headers.txt", "adult.data", "-k", "5",
        ]).unwrap();
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.folds, 5);
                assert_eq!(args.seed, DEFAULT_SEED);
                assert_eq!(args.data.positive, DEFAULT_POSITIVE_LABEL);
                assert_eq!(args.data.decision_index, None);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn prune_requires_test_file() {
        let result = Cli::try_parse_from([
            "id3tree", "prune", "headers.txt", "adult.data",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let result = Cli::try_parse_from(["id3tree", "train", "headers.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_discretize_columns() {
        let cli = Cli::try_parse_from([
            "id3tree", "discretize", "adult.raw", "adult.data",
            "--columns", "0,2",
        ]).unwrap();
        match cli.command {
            Command::Discretize(args) => {
                assert_eq!(args.columns, vec![0, 2]);
                assert_eq!(args.unknown, DEFAULT_UNKNOWN_FLAG);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }
}
