use id3tree::prelude::*;

use std::collections::BTreeMap;


fn record(values: &[&str]) -> Record {
    values.iter().map(|v| v.to_string()).collect()
}


fn schema() -> Schema {
    Schema::with_last_decision(
        vec!["Outlook", "Temperature", "Humidity", "Wind", "Play"]
    ).unwrap()
}


// Outlook == Sunny  => Humidity == High => No
//                      Humidity == Normal => Yes
// Outlook == Overcast => Yes
fn tree() -> Node {
    let humidity = Node::internal("Humidity", BTreeMap::from([
        ("High".to_string(), Node::leaf("No")),
        ("Normal".to_string(), Node::leaf("Yes")),
    ]));
    Node::internal("Outlook", BTreeMap::from([
        ("Sunny".to_string(), humidity),
        ("Overcast".to_string(), Node::leaf("Yes")),
    ]))
}


#[test]
fn classify_reaches_leaves() {
    let schema = schema();
    let classifier = Classifier::new(&schema);
    let tree = tree();

    let sunny_high = record(&["Sunny", "Hot", "High", "Weak", "No"]);
    assert_eq!(classifier.classify(&tree, &sunny_high), Prediction::Label("No"));

    let overcast = record(&["Overcast", "Cool", "High", "Strong", "Yes"]);
    assert_eq!(classifier.classify(&tree, &overcast).label(), Some("Yes"));
}


#[test]
fn leaf_ignores_the_record() {
    let schema = schema();
    let classifier = Classifier::new(&schema);
    let tree = Node::leaf("No");
    let anything = record(&["Fog", "Freezing", "Dry", "Calm", "Yes"]);
    assert_eq!(classifier.classify(&tree, &anything), Prediction::Label("No"));
}


#[test]
fn unseen_value_is_unresolved() {
    let schema = schema();
    let classifier = Classifier::new(&schema);
    let tree = tree();

    let rain = record(&["Rain", "Mild", "High", "Weak", "Yes"]);
    let prediction = classifier.classify(&tree, &rain);
    assert_eq!(prediction, Prediction::Unresolved);
    assert!(!prediction.is_resolved());

    // Unseen at a deeper node.
    let sunny_low = record(&["Sunny", "Mild", "Low", "Weak", "No"]);
    assert_eq!(classifier.classify(&tree, &sunny_low), Prediction::Unresolved);
}


#[test]
fn unknown_attribute_is_unresolved() {
    let schema = schema();
    let classifier = Classifier::new(&schema);
    let tree = Node::internal("Pressure", BTreeMap::from([
        ("Low".to_string(), Node::leaf("Yes")),
    ]));
    let row = record(&["Sunny", "Mild", "Low", "Weak", "Yes"]);
    assert_eq!(classifier.classify(&tree, &row), Prediction::Unresolved);
}


#[test]
fn unresolved_rows_are_misses() {
    let schema = schema();
    let classifier = Classifier::new(&schema);
    let tree = tree();

    let rows = vec![
        record(&["Sunny", "Hot", "High", "Weak", "No"]),      // correct
        record(&["Sunny", "Hot", "Normal", "Weak", "No"]),    // wrong
        record(&["Rain", "Mild", "High", "Weak", "Yes"]),     // unresolved
        record(&["Overcast", "Hot", "High", "Weak", "Yes"]),  // correct
    ];

    let evaluation = classifier.evaluate(&tree, &rows);
    assert_eq!(evaluation, Evaluation { success: 2, errors: 2 });
    assert_eq!(classifier.accuracy(&tree, &rows), 0.5);

    let predictions = classifier.predict_all(&tree, &rows);
    assert_eq!(predictions[2], Prediction::Unresolved);
    assert_eq!(
        format!("{evaluation}"),
        "Total 4 Success 2 Errors 2 Accuracy 0.5"
    );
}


#[test]
#[should_panic]
fn accuracy_over_no_rows_panics() {
    let schema = schema();
    let classifier = Classifier::new(&schema);
    classifier.accuracy(&tree(), &[]);
}
