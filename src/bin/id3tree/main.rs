mod cli;

use clap::Parser;
use colored::Colorize;

use id3tree::prelude::*;
use id3tree::persistence;
use id3tree::research::{self, CrossValidation};
use id3tree::tools::MedianBinning;
use id3tree::{read_table, write_table};

use cli::{Cli, Command, DataArgs};

use std::path::Path;
use std::process;


fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {e}", "error:".bold().red());
        process::exit(1);
    }
}


fn run(command: Command) -> Result<()> {
    match command {
        Command::Train(args) => {
            let dataset = read_dataset(&args.data)?;
            let tree = build_tree(&dataset, &args.data)
                .fit(dataset.rows().to_vec());
            persistence::save_tree(&tree, &args.output)?;
            if let Some(dot) = args.dot.as_ref() {
                tree.to_dot_file(dot)?;
            }
            println!(
                "{}    {}",
                format!("[LEAVES {}]", tree.leaves()).bold().green(),
                format!("[DEPTH {}]", tree.depth()).bold().yellow(),
            );
        },
        Command::Test(args) => {
            let dataset = read_dataset(&args.data)?;
            let tree = load_tree(&args.tree)?;
            let evaluation = Classifier::new(dataset.schema())
                .evaluate(&tree, dataset.rows());
            research::print_accuracy(&evaluation);
        },
        Command::Prune(args) => {
            let dataset = read_dataset(&args.data)?;
            let test = read_rows(&args.test, dataset.schema())?;

            let dtree = build_tree(&dataset, &args.data);
            let tree = dtree.fit(dataset.rows().to_vec());

            let classifier = Classifier::new(dataset.schema());
            research::print_accuracy(&classifier.evaluate(&tree, &test));

            let tree = ReducedErrorPruning::from_tree(&dtree)
                .train_rows(dataset.rows())
                .verbose(args.data.verbose)
                .prune(tree, &test);

            research::print_accuracy(&classifier.evaluate(&tree, &test));
            persistence::save_tree(&tree, &args.output)?;
        },
        Command::Validate(args) => {
            let dataset = read_dataset(&args.data)?;
            let dtree = build_tree(&dataset, &args.data);
            let reports = CrossValidation::new(dataset.rows())
                .n_folds(args.folds)
                .seed(args.seed)
                .verbose(args.data.verbose)
                .run(&dtree)?;
            research::print_folds(&reports);
        },
        Command::Rules(args) => {
            let dataset = read_dataset(&args.data)?;
            let tree = load_tree(&args.tree)?;
            RuleExtractor::new(dataset.schema())
                .to_file(&tree, dataset.rows(), &args.output)?;
        },
        Command::Discretize(args) => {
            let rows = read_table(&args.input)?;
            let binned = MedianBinning::new(args.columns)
                .unknown_flag(args.unknown)
                .transform(rows)?;
            write_table(&args.output, &binned.rows)?;
            for (column, median) in binned.thresholds.iter() {
                println!(
                    "{}    {}",
                    format!("[COLUMN {column: >3}]").bold().red(),
                    format!("[MEDIAN {median}]").bold().green(),
                );
            }
            println!(
                "{}",
                format!("[EXCLUDED {}]", binned.excluded).bold().yellow(),
            );
        },
    }
    Ok(())
}


/// Reads the header and the data files.
/// An empty data file is an error since no tree can be grown from it.
fn read_dataset(args: &DataArgs) -> Result<Dataset> {
    if args.positive == args.negative {
        return Err(Error::Parameters(format!(
            "positive and negative labels must differ. got `{}` twice.",
            args.positive
        )));
    }
    let mut reader = SampleReader::new()
        .header_file(&args.header)
        .data_file(&args.data);
    if let Some(index) = args.decision_index {
        reader = reader.decision_index(index);
    }
    let dataset = reader.read()?;
    if dataset.is_empty() {
        return Err(Error::EmptyDataset(args.data.clone()));
    }
    Ok(dataset)
}


/// Reads the rows of another data file with `schema`.
fn read_rows(path: &Path, schema: &Schema) -> Result<Vec<Record>> {
    let rows = read_table(path)?;
    let dataset = Dataset::new(schema.clone(), rows)?;
    if dataset.is_empty() {
        return Err(Error::EmptyDataset(path.to_path_buf()));
    }
    Ok(dataset.into_parts().1)
}


fn build_tree<'a>(dataset: &'a Dataset, args: &DataArgs) -> DecisionTree<'a> {
    DecisionTreeBuilder::new(dataset.schema())
        .positive(&args.positive)
        .negative(&args.negative)
        .verbose(args.verbose)
        .build()
}
