//! Prints the evaluation results to the console.
use colored::Colorize;

use crate::Evaluation;
use crate::constants::PRINT_WIDTH;
use super::cross_validation::FoldReport;


/// Prints the numbers of the correctly/incorrectly
/// classified rows and the accuracy.
pub fn print_accuracy(evaluation: &Evaluation) {
    if evaluation.total() == 0 {
        println!("{}", "  [NO ROWS TO EVALUATE]".bold().red());
        return;
    }
    println!(
        "{}    {}    {}    {}",
        format!("[TOTAL {:>PRINT_WIDTH$}]", evaluation.total()).bold().red(),
        format!("[SUCCESS {:>PRINT_WIDTH$}]", evaluation.success).bold().green(),
        format!("[ERRORS {:>PRINT_WIDTH$}]", evaluation.errors).bold().yellow(),
        format!("[ACCURACY {:.5}]", evaluation.accuracy()).bold().cyan(),
    );
}


/// Prints the result of each fold and the mean accuracy.
pub fn print_folds(reports: &[FoldReport]) {
    for report in reports {
        print!(
            "{}    {}    ",
            format!("  [{: >3}'th fold]", report.fold + 1).bold().red(),
            format!("[TRAIN {:>PRINT_WIDTH$}]", report.train_size).bold().green(),
        );
        print_accuracy(&report.evaluation);
    }

    if let Some(mean) = mean_accuracy(reports) {
        println!(
            "{}",
            format!("  [MEAN ACCURACY {mean:.5}]").bold().cyan(),
        );
    }
}


/// Returns the mean of the accuracies of the folds.
pub fn mean_accuracy(reports: &[FoldReport]) -> Option<f64> {
    if reports.is_empty() { return None; }
    let sum = reports.iter()
        .map(|report| report.evaluation.accuracy())
        .sum::<f64>();
    Some(sum / reports.len() as f64)
}
