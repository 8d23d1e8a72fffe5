//! This file defines some functions that checks some pre-conditions
//! E.g., emptiness of the rows

use crate::Record;


/// Check whether the rows given to the tree induction
/// or to the accuracy computation are valid or not.
#[inline(always)]
pub(crate) fn check_rows(rows: &[Record]) {
    assert!(
        !rows.is_empty(),
        "the rows must not be empty"
    );
}


/// Check whether the positive/negative labels are a valid pair.
#[inline(always)]
pub(crate) fn check_labels(positive: &str, negative: &str) {
    assert!(
        positive != negative,
        "positive and negative labels must differ. got `{positive}` twice."
    );
}


/// Check the number of folds for partitioning `n_rows` rows.
#[inline(always)]
pub(crate) fn check_n_folds(n_folds: usize, n_rows: usize) {
    assert!(
        (1..=n_rows).contains(&n_folds),
        "the number of folds must be in [1, {n_rows}]. got {n_folds}."
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_folds_success() {
        check_n_folds(1, 10);
        check_n_folds(10, 10);
    }

    #[test]
    #[should_panic]
    fn test_n_folds_zero() {
        check_n_folds(0, 10);
    }

    #[test]
    #[should_panic]
    fn test_n_folds_too_many() {
        check_n_folds(11, 10);
    }

    #[test]
    #[should_panic]
    fn test_empty_rows() {
        check_rows(&[]);
    }

    #[test]
    #[should_panic]
    fn test_same_labels() {
        check_labels("Yes", "Yes");
    }
}
