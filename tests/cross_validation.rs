use id3tree::prelude::*;
use id3tree::research::{CrossValidation, mean_accuracy};


fn path(name: &str) -> std::path::PathBuf {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset");
    path.push(name);
    path
}


fn play_tennis() -> Dataset {
    SampleReader::new()
        .header_file(path("playtennis_headers.txt"))
        .data_file(path("play_tennis.txt"))
        .read()
        .unwrap()
}


fn sorted(mut rows: Vec<Record>) -> Vec<Record> {
    rows.sort();
    rows
}


#[test]
fn folds_partition_the_rows() {
    let dataset = play_tennis();
    let n_rows = dataset.len();

    for k in 1..=n_rows {
        let mut cv = CrossValidation::new(dataset.rows()).n_folds(k);
        let folds = cv.folds().to_vec();

        assert_eq!(folds.len(), k);
        let total = folds.iter().map(Vec::len).sum::<usize>();
        assert_eq!(total, n_rows);

        let max = folds.iter().map(Vec::len).max().unwrap();
        let min = folds.iter().map(Vec::len).min().unwrap();
        assert!(max - min <= 1, "k = {k}: sizes in [{min}, {max}]");

        let union = folds.into_iter().flatten().collect::<Vec<_>>();
        assert_eq!(sorted(union), sorted(dataset.rows().to_vec()));
    }
}


#[test]
fn same_seed_same_folds() {
    let dataset = play_tennis();
    let mut a = CrossValidation::new(dataset.rows()).n_folds(3).seed(7);
    let mut b = CrossValidation::new(dataset.rows()).n_folds(3).seed(7);
    assert_eq!(a.folds(), b.folds());
}


#[test]
fn each_fold_is_held_out_once() {
    let dataset = play_tennis();
    let mut cv = CrossValidation::new(dataset.rows())
        .n_folds(4)
        .verbose(true);
    let folds = cv.folds().to_vec();

    let pairs = cv.collect::<Vec<_>>();
    assert_eq!(pairs.len(), 4);
    for ((train, test), fold) in pairs.into_iter().zip(folds) {
        assert_eq!(test, fold);
        assert_eq!(train.len() + test.len(), dataset.len());
        assert!(test.iter().all(|row| !train.contains(row)));
    }
}


#[test]
fn run_reports_every_fold() {
    let dataset = play_tennis();
    let dtree = DecisionTreeBuilder::new(dataset.schema())
        .positive("Yes")
        .negative("No")
        .build();

    let reports = CrossValidation::new(dataset.rows())
        .n_folds(2)
        .seed(42)
        .run(&dtree)
        .unwrap();

    assert_eq!(reports.len(), 2);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.fold, i);
        assert_eq!(report.train_size, 7);
        assert_eq!(report.evaluation.total(), 7);
    }
    let mean = mean_accuracy(&reports).unwrap();
    assert!((0.0..=1.0).contains(&mean));
}


#[test]
fn run_needs_two_folds() {
    let dataset = play_tennis();
    let dtree = DecisionTreeBuilder::new(dataset.schema())
        .positive("Yes")
        .negative("No")
        .build();

    let one = CrossValidation::new(dataset.rows())
        .n_folds(1)
        .run(&dtree);
    assert!(matches!(one, Err(Error::Parameters(_))));

    let too_many = CrossValidation::new(dataset.rows())
        .n_folds(dataset.len() + 1)
        .run(&dtree);
    assert!(matches!(too_many, Err(Error::Parameters(_))));
}


#[test]
#[should_panic]
fn zero_folds_panics() {
    let dataset = play_tennis();
    let _ = CrossValidation::new(dataset.rows()).n_folds(0).folds().len();
}
