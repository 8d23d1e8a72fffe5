use rand::prelude::*;
use colored::Colorize;

use crate::{Record, DecisionTree, Classifier, Evaluation};
use crate::common::checker;
use crate::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED, PRINT_WIDTH};
use crate::error::{Error, Result};

use std::iter::Iterator;


/// A struct that generates
/// pairs of training/test rows for cross validation.
///
/// The rows are dealt into the folds one by one:
/// a uniformly random remaining row goes to the next fold
/// in round-robin order, so the fold sizes differ by at most `1`.
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
/// use id3tree::research::CrossValidation;
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
/// let classifier = Classifier::new(dataset.schema());
/// let cv = CrossValidation::new(dataset.rows())
///     .n_folds(5)
///     .verbose(true)
///     .seed(777);
/// for (train, test) in cv {
///     let tree = dtree.fit(train);
///     let accuracy = classifier.accuracy(&tree, &test);
///     println!("[test: {accuracy}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    rows: &'a [Record],
    folds: Option<Vec<Vec<Record>>>,
    verbose: bool,
}


/// Accuracy of the tree trained without one fold,
/// measured on that fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldReport {
    /// Index of the held-out fold.
    pub fold: usize,
    /// Number of training rows.
    pub train_size: usize,
    /// Evaluation on the held-out fold.
    pub evaluation: Evaluation,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(rows: &'a [Record]) -> Self {
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            verbose: false,
            folds: None,
            rows,
        }
    }


    /// Set the number of folds.
    /// Default value is `10.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self.folds = None;
        self
    }


    /// Set the seed of the randomness for the partition.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.folds = None;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the folds.
    /// The folds are disjoint and their union is the given rows.
    ///
    /// The number of folds must be in `[1, rows.len()]`.
    pub fn folds(&mut self) -> &[Vec<Record>] {
        if self.folds.is_none() {
            self.folds = Some(self.make_folds());
        }
        self.folds.as_deref().unwrap_or_default()
    }


    fn make_folds(&self) -> Vec<Vec<Record>> {
        checker::check_n_folds(self.n_folds, self.rows.len());

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut remaining = self.rows.to_vec();
        let mut folds = vec![Vec::new(); self.n_folds];

        let mut count = 0;
        while !remaining.is_empty() {
            let i = rng.gen_range(0..remaining.len());
            folds[count].push(remaining.swap_remove(i));
            count = (count + 1) % self.n_folds;
        }
        folds
    }


    /// Returns the training/test rows for `i`th fold.
    /// The training rows are a fresh copy of the other folds.
    #[inline]
    fn fold_at(&mut self, i: usize) -> (Vec<Record>, Vec<Record>) {
        let folds = self.folds();
        let test = folds[i].clone();
        let train = folds.iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .flat_map(|(_, fold)| fold.iter().cloned())
            .collect::<Vec<_>>();
        (train, test)
    }


    /// Trains a tree on each training split with `dtree`
    /// and evaluates it on the held-out fold.
    ///
    /// Requires at least `2` folds and at most one fold per row.
    pub fn run(self, dtree: &DecisionTree<'_>) -> Result<Vec<FoldReport>> {
        let n_rows = self.rows.len();
        if !(2..=n_rows).contains(&self.n_folds) {
            return Err(Error::Parameters(format!(
                "the number of folds must be in [2, {n_rows}]. got {}.",
                self.n_folds
            )));
        }

        let classifier = Classifier::new(dtree.schema());
        let reports = self.enumerate()
            .map(|(fold, (train, test))| {
                let train_size = train.len();
                let tree = dtree.fit(train);
                let evaluation = classifier.evaluate(&tree, &test);
                FoldReport { fold, train_size, evaluation }
            })
            .collect();
        Ok(reports)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Vec<Record>, Vec<Record>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>PRINT_WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>PRINT_WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
