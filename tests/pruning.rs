use id3tree::prelude::*;


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


fn record(values: &[&str]) -> Record {
    values.iter().map(|v| v.to_string()).collect()
}


fn weather_tree(dataset: &Dataset) -> Node {
    DecisionTreeBuilder::new(dataset.schema())
        .positive("Yes")
        .negative("No")
        .build()
        .fit(dataset.rows().to_vec())
}


#[test]
fn collapses_harmful_subtree() {
    let dataset = play_tennis();
    let tree = weather_tree(&dataset);

    // On these rows every sunny day is a `No`.
    let validation = vec![
        record(&["Sunny", "Cool", "Normal", "Weak", "No"]),
        record(&["Sunny", "Hot", "High", "Weak", "No"]),
        record(&["Overcast", "Hot", "High", "Weak", "Yes"]),
    ];

    let classifier = Classifier::new(dataset.schema());
    let before = classifier.accuracy(&tree, &validation);

    let pruned = ReducedErrorPruning::new(dataset.schema(), "Yes", "No")
        .prune(tree.clone(), &validation);
    let after = classifier.accuracy(&pruned, &validation);

    assert!(after >= before);
    assert_eq!(after, 1.0);
    assert_eq!(pruned.child("Sunny"), Some(&Node::leaf("No")));
    // The rain subtree does not change the accuracy, hence kept.
    assert_eq!(pruned.child("Rain"), tree.child("Rain"));
}


#[test]
fn keeps_the_tree_on_its_training_rows() {
    let dataset = play_tennis();
    let tree = weather_tree(&dataset);

    let pruned = ReducedErrorPruning::new(dataset.schema(), "Yes", "No")
        .prune(tree.clone(), dataset.rows());
    assert_eq!(pruned, tree);
}


#[test]
fn ties_go_to_the_positive_leaf() {
    let dataset = play_tennis();
    let tree = weather_tree(&dataset);

    // The current tree misses both rows,
    // and each constant leaf gets one of them.
    let validation = vec![
        record(&["Sunny", "Hot", "High", "Weak", "Yes"]),
        record(&["Sunny", "Hot", "Normal", "Weak", "No"]),
    ];

    let pruned = ReducedErrorPruning::new(dataset.schema(), "Yes", "No")
        .prune(tree, &validation);
    assert_eq!(pruned.child("Sunny"), Some(&Node::leaf("Yes")));
}


#[test]
fn never_decreases_validation_accuracy() {
    let dataset = play_tennis();
    let classifier = Classifier::new(dataset.schema());
    let tree = weather_tree(&dataset);

    let validations = vec![
        vec![
            record(&["Rain", "Mild", "High", "Strong", "Yes"]),
            record(&["Rain", "Cool", "Normal", "Weak", "No"]),
            record(&["Sunny", "Mild", "Normal", "Weak", "Yes"]),
        ],
        vec![
            record(&["Overcast", "Mild", "High", "Strong", "No"]),
            record(&["Fog", "Mild", "High", "Strong", "No"]),
        ],
        dataset.rows()[..7].to_vec(),
    ];

    for validation in validations {
        let before = classifier.accuracy(&tree, &validation);
        let pruned = ReducedErrorPruning::new(dataset.schema(), "Yes", "No")
            .verbose(true)
            .train_rows(dataset.rows())
            .prune(tree.clone(), &validation);
        let after = classifier.accuracy(&pruned, &validation);
        assert!(after >= before, "{after} < {before}");
        assert!(pruned.leaves() <= tree.leaves());
    }
}


#[test]
fn root_is_never_replaced() {
    let schema = Schema::with_last_decision(vec!["a", "class"]).unwrap();
    let tree = Node::internal("a", std::collections::BTreeMap::from([
        ("x".to_string(), Node::leaf("-")),
    ]));
    let validation = vec![record(&["x", "+"])];
    let pruned = ReducedErrorPruning::new(&schema, "+", "-")
        .prune(tree.clone(), &validation);
    assert_eq!(pruned, tree);
}


#[test]
fn second_pass_changes_nothing() {
    let dataset = play_tennis();
    let tree = weather_tree(&dataset);

    let validations = vec![
        vec![
            record(&["Sunny", "Cool", "Normal", "Weak", "No"]),
            record(&["Sunny", "Hot", "High", "Weak", "No"]),
            record(&["Overcast", "Hot", "High", "Weak", "Yes"]),
        ],
        vec![
            record(&["Rain", "Mild", "High", "Strong", "Yes"]),
            record(&["Rain", "Cool", "Normal", "Weak", "No"]),
            record(&["Sunny", "Mild", "High", "Weak", "Yes"]),
        ],
        dataset.rows().to_vec(),
    ];

    let pruning = ReducedErrorPruning::new(dataset.schema(), "Yes", "No");
    for validation in validations {
        let once = pruning.prune(tree.clone(), &validation);
        let twice = pruning.prune(once.clone(), &validation);
        assert_eq!(twice, once);
    }
}
